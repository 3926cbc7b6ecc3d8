// file: src/models/store_trait.rs
// description: pawn trait records in raw and published form
// reference: Twitch Toolkit store extension export schema

use crate::utils::text::title_case;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTrait {
    pub name: String,
    pub description: Option<String>,
    pub def_name: String,
    pub degree: i64,
    pub can_add: bool,
    pub can_remove: bool,
    pub add_price: i64,
    pub remove_price: i64,
    pub stats: Vec<String>,
    pub conflicts: Vec<String>,
    pub bypass_limit: bool,
    pub can_bypass_limit: bool,
    pub custom_name: bool,
}

/// Purchasable race entry. Decoded for completeness, never published.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Race {
    pub name: String,
    pub def_name: String,
    pub price: i64,
    pub enabled: bool,
    pub custom_name: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTraitDocument {
    pub traits: Vec<RawTrait>,
    pub races: Vec<Race>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTrait {
    pub name: String,
    /// Published as `null` when the export has none.
    pub description: Option<String>,
    pub attributes: Vec<String>,
    pub price: i64,
}

impl ProcessedTrait {
    pub fn from_raw(raw: RawTrait) -> Self {
        Self {
            name: title_case(&raw.name),
            description: raw.description,
            attributes: raw.stats,
            price: raw.add_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitListing {
    pub traits: Vec<ProcessedTrait>,
    pub total: usize,
}

impl TraitListing {
    pub fn new(traits: Vec<ProcessedTrait>) -> Self {
        let total = traits.len();
        Self { traits, total }
    }
}
