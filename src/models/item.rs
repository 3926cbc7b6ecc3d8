// file: src/models/item.rs
// description: store item records in raw and published form
// reference: Twitch Toolkit store item export schema

use crate::utils::text::title_case;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct RawItem {
    pub name: String,
    pub category: String,
    pub definition: String,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedItem {
    pub name: String,
    pub price: i64,
    pub category: String,
}

impl ProcessedItem {
    pub fn from_raw(raw: RawItem) -> Self {
        Self {
            name: title_case(&raw.name),
            price: raw.price,
            category: raw.category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemListing {
    pub items: Vec<ProcessedItem>,
    pub total: usize,
}

impl ItemListing {
    pub fn new(items: Vec<ProcessedItem>) -> Self {
        let total = items.len();
        Self { items, total }
    }
}
