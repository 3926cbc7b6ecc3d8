// file: src/models/command.rs
// description: chat command records in raw and published form
// reference: Twitch Toolkit command export schema

use serde::{Deserialize, Serialize};

/// Who may invoke a command in chat.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum UserLevel {
    Anyone,
    Moderator,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawCommand {
    pub name: Option<String>,
    pub usage: String,
    pub description: Option<String>,
    pub user_level: UserLevel,
    pub shortcut: bool,
    pub is_shortcut: bool,
}

impl RawCommand {
    /// Commands without a display name are placeholders in the export.
    pub fn has_name(&self) -> bool {
        self.name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }

    pub fn is_moderator_only(&self) -> bool {
        self.user_level == UserLevel::Moderator
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedCommand {
    pub usage: String,
    pub description: Option<String>,
    #[serde(rename = "level")]
    pub user_level: UserLevel,
}

impl ProcessedCommand {
    pub fn from_raw(raw: RawCommand) -> Self {
        Self {
            usage: raw.usage,
            description: raw.description,
            user_level: raw.user_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandListing {
    pub commands: Vec<ProcessedCommand>,
    pub total: usize,
}

impl CommandListing {
    pub fn new(commands: Vec<ProcessedCommand>) -> Self {
        let total = commands.len();
        Self { commands, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn raw(name: Option<&str>) -> RawCommand {
        RawCommand {
            name: name.map(str::to_string),
            usage: "!buy".to_string(),
            description: Some("Buy something".to_string()),
            user_level: UserLevel::Anyone,
            shortcut: false,
            is_shortcut: false,
        }
    }

    #[test]
    fn test_user_level_parsing_is_exact() {
        assert_eq!(UserLevel::from_str("Moderator").unwrap(), UserLevel::Moderator);
        assert_eq!(UserLevel::from_str("Anyone").unwrap(), UserLevel::Anyone);
        assert!(UserLevel::from_str("moderator").is_err());
        assert!(UserLevel::from_str("Superuser").is_err());
    }

    #[test]
    fn test_blank_names() {
        assert!(raw(Some("Buy")).has_name());
        assert!(!raw(Some("   ")).has_name());
        assert!(!raw(Some("")).has_name());
        assert!(!raw(None).has_name());
    }

    #[test]
    fn test_processed_command_serializes_level() {
        let processed = ProcessedCommand::from_raw(raw(Some("Buy")));
        let json = serde_json::to_value(&processed).unwrap();

        assert_eq!(json["usage"], "!buy");
        assert_eq!(json["level"], "Anyone");
        assert!(json.get("user_level").is_none());
    }

    #[test]
    fn test_listing_total_matches_length() {
        let listing = CommandListing::new(vec![
            ProcessedCommand::from_raw(raw(Some("a"))),
            ProcessedCommand::from_raw(raw(Some("b"))),
        ]);
        assert_eq!(listing.total, 2);
    }
}
