// file: src/models/event.rs
// description: purchasable event records in raw and published form
// reference: Twitch Toolkit incident export schema

use crate::utils::text::title_case;
use serde::{Deserialize, Serialize};

/// Tone of an event. Declaration order is the display order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum KarmaType {
    Good,
    Neutral,
    Bad,
    Doom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    pub name: String,
    /// Kept as text: the published price may be a label instead of a number.
    pub price: String,
    pub karma_type: KarmaType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedEvent {
    pub name: String,
    pub price: String,
    #[serde(rename = "karmatype")]
    pub karma_type: KarmaType,
}

impl ProcessedEvent {
    pub fn from_raw(raw: RawEvent) -> Self {
        Self {
            name: title_case(&raw.name),
            price: raw.price,
            karma_type: raw.karma_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventListing {
    pub events: Vec<ProcessedEvent>,
    pub total: usize,
}

impl EventListing {
    pub fn new(events: Vec<ProcessedEvent>) -> Self {
        let total = events.len();
        Self { events, total }
    }
}
