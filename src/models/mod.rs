// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod command;
pub mod event;
pub mod item;
pub mod store_trait;

pub use command::{CommandListing, ProcessedCommand, RawCommand, UserLevel};
pub use event::{EventListing, KarmaType, ProcessedEvent, RawEvent};
pub use item::{ItemListing, ProcessedItem, RawItem};
pub use store_trait::{ProcessedTrait, Race, RawTrait, RawTraitDocument, TraitListing};

use serde::Serialize;

/// A published document: a plural-named record list plus its `total`.
pub trait Listing: Serialize {
    fn total(&self) -> usize;
}

impl Listing for CommandListing {
    fn total(&self) -> usize {
        self.total
    }
}

impl Listing for ItemListing {
    fn total(&self) -> usize {
        self.total
    }
}

impl Listing for EventListing {
    fn total(&self) -> usize {
        self.total
    }
}

impl Listing for TraitListing {
    fn total(&self) -> usize {
        self.total
    }
}

/// The four record families, one per input document and pipeline.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum RecordKind {
    Commands,
    Items,
    Events,
    Traits,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_record_kind_display() {
        let names: Vec<String> = RecordKind::iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["commands", "items", "events", "traits"]);
    }
}
