// file: src/pipeline/sorter.rs
// description: deterministic ordering for each record family
// reference: stable slice sorting with case-insensitive keys

use crate::models::{ProcessedCommand, ProcessedEvent, ProcessedItem, RawTrait};
use crate::utils::text::cmp_ignore_case;

// All sorts are stable, so records with equal keys keep their input order.

pub fn sort_commands(commands: &mut [ProcessedCommand]) {
    commands.sort_by(|a, b| cmp_ignore_case(&a.usage, &b.usage));
}

pub fn sort_items(items: &mut [ProcessedItem]) {
    items.sort_by(|a, b| {
        cmp_ignore_case(&a.category, &b.category).then_with(|| cmp_ignore_case(&a.name, &b.name))
    });
}

pub fn sort_events(events: &mut [ProcessedEvent]) {
    events.sort_by(|a, b| {
        a.karma_type
            .cmp(&b.karma_type)
            .then_with(|| cmp_ignore_case(&a.name, &b.name))
    });
}

pub fn sort_traits_by_name(traits: &mut [RawTrait]) {
    traits.sort_by(|a, b| cmp_ignore_case(&a.name, &b.name));
}
