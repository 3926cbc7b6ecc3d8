// file: src/parser/schema.rs
// description: serde mirrors of the upstream export documents
// reference: Twitch Toolkit json exports (commands, store items, incidents, store extension)

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct CommandRecord {
    #[serde(default)]
    pub data: Option<CommandData>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub usage: String,
    #[serde(rename = "userLevel")]
    pub user_level: String,
    #[serde(default)]
    pub shortcut: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommandData {
    #[serde(rename = "isShortcut", default)]
    pub is_shortcut: bool,
}

#[derive(Debug, Deserialize)]
pub struct ItemsDocument {
    pub items: Vec<ItemRecord>,
    #[serde(default)]
    pub total: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ItemRecord {
    pub abr: String,
    pub category: String,
    #[serde(default)]
    pub defname: Option<String>,
    pub price: i64,
}

#[derive(Debug, Deserialize)]
pub struct EventsDocument {
    pub incitems: Vec<EventRecord>,
    #[serde(default)]
    pub total: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct EventRecord {
    pub abr: String,
    pub price: PriceText,
    pub karmatype: String,
}

/// Event prices are usually quoted, but bare integers show up in older exports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceText {
    Text(String),
    Number(i64),
}

impl PriceText {
    pub fn into_text(self) -> String {
        match self {
            PriceText::Text(text) => text,
            PriceText::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TraitsDocument {
    pub traits: Vec<TraitRecord>,
    #[serde(default)]
    pub races: Vec<RaceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitRecord {
    pub can_add: bool,
    #[serde(default)]
    pub can_remove: bool,
    pub add_price: i64,
    #[serde(default)]
    pub remove_price: i64,
    #[serde(default)]
    pub def_name: Option<String>,
    #[serde(default)]
    pub degree: i64,
    pub name: String,
    #[serde(default)]
    pub data: Option<TraitData>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stats: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub bypass_limit: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitData {
    #[serde(default)]
    pub can_bypass_limit: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub conflicts: Vec<String>,
    #[serde(default)]
    pub custom_name: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stats: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceRecord {
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub def_name: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub data: Option<RaceData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceData {
    #[serde(default)]
    pub custom_name: bool,
}

/// Exports write `null` for lists the mod never filled in.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
