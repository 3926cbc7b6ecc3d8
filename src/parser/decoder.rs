// file: src/parser/decoder.rs
// description: decodes upstream export documents into typed raw records
// reference: https://docs.rs/serde_json

use crate::error::{PipelineError, Result};
use crate::models::{
    Race, RawCommand, RawEvent, RawItem, RawTrait, RawTraitDocument, RecordKind,
};
use crate::parser::schema::{
    CommandRecord, EventsDocument, ItemsDocument, RaceRecord, TraitRecord, TraitsDocument,
};
use crate::pipeline::sorter;
use serde::de::DeserializeOwned;
use std::str::FromStr;
use tracing::{debug, warn};

pub struct DocumentDecoder;

impl DocumentDecoder {
    pub fn new() -> Self {
        Self
    }

    /// The commands export is a bare array.
    pub fn decode_commands(&self, json: &str) -> Result<Vec<RawCommand>> {
        let records: Vec<CommandRecord> = from_json(RecordKind::Commands, json)?;

        records
            .into_iter()
            .map(|record| -> Result<RawCommand> {
                Ok(RawCommand {
                    user_level: parse_enum("userLevel", record.user_level)?,
                    name: record.name,
                    usage: record.usage,
                    description: record.description,
                    shortcut: record.shortcut,
                    is_shortcut: record.data.unwrap_or_default().is_shortcut,
                })
            })
            .collect()
    }

    pub fn decode_items(&self, json: &str) -> Result<Vec<RawItem>> {
        let document: ItemsDocument = from_json(RecordKind::Items, json)?;
        check_declared_total(RecordKind::Items, document.total, document.items.len());

        Ok(document
            .items
            .into_iter()
            .map(|record| RawItem {
                name: record.abr,
                category: record.category,
                definition: record.defname.unwrap_or_default(),
                price: record.price,
            })
            .collect())
    }

    pub fn decode_events(&self, json: &str) -> Result<Vec<RawEvent>> {
        let document: EventsDocument = from_json(RecordKind::Events, json)?;
        check_declared_total(RecordKind::Events, document.total, document.incitems.len());

        document
            .incitems
            .into_iter()
            .map(|record| -> Result<RawEvent> {
                Ok(RawEvent {
                    karma_type: parse_enum("karmatype", record.karmatype)?,
                    name: record.abr,
                    price: record.price.into_text(),
                })
            })
            .collect()
    }

    /// Traits come back ordered by name, case-insensitively.
    pub fn decode_traits(&self, json: &str) -> Result<RawTraitDocument> {
        let document: TraitsDocument = from_json(RecordKind::Traits, json)?;

        let mut traits: Vec<RawTrait> = document.traits.into_iter().map(raw_trait).collect();
        sorter::sort_traits_by_name(&mut traits);

        let races: Vec<Race> = document.races.into_iter().map(race).collect();
        debug!(
            "Decoded {} traits and {} races from traits document",
            traits.len(),
            races.len()
        );

        Ok(RawTraitDocument { traits, races })
    }
}

impl Default for DocumentDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn from_json<T: DeserializeOwned>(document: RecordKind, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| PipelineError::Decode { document, source })
}

fn parse_enum<E: FromStr>(field: &'static str, value: String) -> Result<E> {
    E::from_str(&value).map_err(|_| PipelineError::UnrecognizedValue { field, value })
}

fn check_declared_total(kind: RecordKind, declared: Option<i64>, actual: usize) {
    if let Some(declared) = declared
        && declared != actual as i64
    {
        warn!(
            "The {} document declares a total of {} but lists {} records",
            kind, declared, actual
        );
    }
}

fn raw_trait(record: TraitRecord) -> RawTrait {
    let data = record.data.unwrap_or_default();

    RawTrait {
        name: record.name,
        description: record.description,
        def_name: record.def_name.unwrap_or_default(),
        degree: record.degree,
        can_add: record.can_add,
        can_remove: record.can_remove,
        add_price: record.add_price,
        remove_price: record.remove_price,
        stats: record.stats,
        conflicts: record.conflicts,
        bypass_limit: record.bypass_limit,
        can_bypass_limit: data.can_bypass_limit,
        custom_name: data.custom_name,
    }
}

fn race(record: RaceRecord) -> Race {
    Race {
        name: record.name.unwrap_or_default(),
        def_name: record.def_name.unwrap_or_default(),
        price: record.price,
        enabled: record.enabled,
        custom_name: record.data.unwrap_or_default().custom_name,
    }
}
