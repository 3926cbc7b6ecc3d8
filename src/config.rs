// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Created next to the commands input file.
    pub directory_name: String,
    pub files: OutputFiles,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputFiles {
    pub commands_moderator: String,
    pub commands_viewer: String,
    pub commands_pawn: String,
    pub items: String,
    pub events: String,
    pub traits_vanilla: String,
    pub traits_magic: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    pub reserved_command_prefix: String,
    pub pawn_command_prefixes: Vec<String>,
    pub pawn_command_keyword: String,
    pub recategorize: Vec<CategoryRule>,
    pub ignored_events: Vec<String>,
    pub variable_price_events: Vec<String>,
    pub variable_price_label: String,
    pub magic_trait_price: i64,
}

/// Item category rename, matched case-insensitively on `from`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CategoryRule {
    pub from: String,
    pub to: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        // A missing file falls back to the built-in defaults; env overrides still apply.
        let path = path.unwrap_or_else(|| Path::new("config/default.toml"));
        builder = builder.add_source(config::File::from(path).required(false));

        builder = builder.add_source(
            config::Environment::with_prefix("RIMWORLD_PARSER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            output: OutputConfig {
                directory_name: "Output".to_string(),
                files: OutputFiles {
                    commands_moderator: "SiteCommandsModerator.json".to_string(),
                    commands_viewer: "SiteCommandsViewer.json".to_string(),
                    commands_pawn: "SiteCommandsPawn.json".to_string(),
                    items: "StoreItems.json".to_string(),
                    events: "StoreEvents.json".to_string(),
                    traits_vanilla: "StoreTraitsVanilla.json".to_string(),
                    traits_magic: "StoreTraitsMagic.json".to_string(),
                },
            },
            rules: RulesConfig {
                reserved_command_prefix: "!rwdata".to_string(),
                pawn_command_prefixes: vec![
                    "!insult".to_string(),
                    "!leave".to_string(),
                    "!levelskill".to_string(),
                ],
                pawn_command_keyword: "mypawn".to_string(),
                recategorize: vec![
                    CategoryRule {
                        from: "TMC Long Range".to_string(),
                        to: "Ranged weapons".to_string(),
                    },
                    CategoryRule {
                        from: "Persona weapons".to_string(),
                        to: "Melee weapons".to_string(),
                    },
                ],
                ignored_events: vec!["backpack".to_string()],
                variable_price_events: vec!["trait".to_string(), "replacetrait".to_string()],
                variable_price_label: "Varies".to_string(),
                magic_trait_price: 4000,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.output.directory_name.trim().is_empty() {
            return Err(PipelineError::Config(
                "output.directory_name must not be empty".to_string(),
            ));
        }

        let names = self.output.files.all();
        let mut seen = HashSet::new();
        for name in &names {
            if name.trim().is_empty() {
                return Err(PipelineError::Config(
                    "output file names must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(PipelineError::Config(format!(
                    "output file name {} is used more than once",
                    name
                )));
            }
        }

        if self.rules.reserved_command_prefix.is_empty() {
            return Err(PipelineError::Config(
                "rules.reserved_command_prefix must not be empty".to_string(),
            ));
        }

        // An empty prefix or keyword would match every usage.
        if self.rules.pawn_command_keyword.trim().is_empty() {
            return Err(PipelineError::Config(
                "rules.pawn_command_keyword must not be empty".to_string(),
            ));
        }
        if self
            .rules
            .pawn_command_prefixes
            .iter()
            .any(|prefix| prefix.trim().is_empty())
        {
            return Err(PipelineError::Config(
                "rules.pawn_command_prefixes must not contain empty entries".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Config::default_config().output
    }
}

impl Default for OutputFiles {
    fn default() -> Self {
        Config::default_config().output.files
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Config::default_config().rules
    }
}

impl OutputFiles {
    pub fn all(&self) -> [&str; 7] {
        [
            &self.commands_moderator,
            &self.commands_viewer,
            &self.commands_pawn,
            &self.items,
            &self.events,
            &self.traits_vanilla,
            &self.traits_magic,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default_config().validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("parser.toml");
        fs::write(
            &path,
            "[output]\ndirectory_name = \"Site\"\n\n[rules]\nmagic_trait_price = 5000\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config.output.directory_name, "Site");
        assert_eq!(config.output.files, OutputFiles::default());
        assert_eq!(config.rules.magic_trait_price, 5000);
        assert_eq!(config.rules.reserved_command_prefix, "!rwdata");
    }

    #[test]
    fn test_duplicate_file_names_rejected() {
        let mut config = Config::default_config();
        config.output.files.items = "StoreEvents.json".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_directory_rejected() {
        let mut config = Config::default_config();
        config.output.directory_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_pawn_matchers_rejected() {
        let mut config = Config::default_config();
        config.rules.pawn_command_keyword = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.rules.pawn_command_prefixes.push(" ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let config = Config::load(Some(path.as_path())).unwrap();

        assert_eq!(config, Config::default_config());
    }
}
