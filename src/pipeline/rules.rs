// file: src/pipeline/rules.rs
// description: per-kind filtering and field derivation
// reference: configurable rule sets applied before classification

use crate::config::{CategoryRule, RulesConfig};
use crate::error::{PipelineError, Result};
use crate::models::{
    ProcessedCommand, ProcessedEvent, ProcessedItem, ProcessedTrait, RawCommand, RawEvent,
    RawItem, RawTrait,
};
use crate::utils::text::eq_ignore_case;
use tracing::debug;

/// Records that survived filtering, plus how many were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed<T> {
    pub records: Vec<T>,
    pub dropped: usize,
}

impl<T> Transformed<T> {
    fn new(records: Vec<T>, read: usize) -> Self {
        let dropped = read - records.len();
        Self { records, dropped }
    }
}

pub struct TransformRules {
    reserved_command_prefix: String,
    recategorize: Vec<CategoryRule>,
    ignored_events: Vec<String>,
    variable_price_events: Vec<String>,
    variable_price_label: String,
}

impl TransformRules {
    pub fn new(rules: &RulesConfig) -> Self {
        Self {
            reserved_command_prefix: rules.reserved_command_prefix.clone(),
            recategorize: rules.recategorize.clone(),
            ignored_events: rules.ignored_events.clone(),
            variable_price_events: rules.variable_price_events.clone(),
            variable_price_label: rules.variable_price_label.clone(),
        }
    }

    pub fn admit_command(&self, command: &RawCommand) -> bool {
        command.has_name() && !command.usage.starts_with(&self.reserved_command_prefix)
    }

    pub fn transform_commands(&self, commands: Vec<RawCommand>) -> Transformed<ProcessedCommand> {
        let read = commands.len();
        let records = commands
            .into_iter()
            .filter(|command| {
                let admitted = self.admit_command(command);
                if !admitted {
                    debug!("Dropping command {:?}", command.usage);
                }
                admitted
            })
            .map(ProcessedCommand::from_raw)
            .collect();

        Transformed::new(records, read)
    }

    /// Returns the published category for an item category.
    pub fn recategorize(&self, category: &str) -> String {
        self.recategorize
            .iter()
            .find(|rule| eq_ignore_case(&rule.from, category))
            .map(|rule| rule.to.clone())
            .unwrap_or_else(|| category.to_string())
    }

    pub fn transform_items(&self, items: Vec<RawItem>) -> Transformed<ProcessedItem> {
        let read = items.len();
        let records = items
            .into_iter()
            .filter(|item| item.price >= 0)
            .map(|mut item| {
                item.category = self.recategorize(&item.category);
                ProcessedItem::from_raw(item)
            })
            .collect();

        Transformed::new(records, read)
    }

    pub fn is_ignored_event(&self, name: &str) -> bool {
        self.ignored_events
            .iter()
            .any(|ignored| eq_ignore_case(ignored, name))
    }

    pub fn has_variable_price(&self, name: &str) -> bool {
        self.variable_price_events
            .iter()
            .any(|variable| eq_ignore_case(variable, name))
    }

    /// Parses the authored price. Every event must carry an integer price,
    /// including the ones whose published price is replaced by a label.
    pub fn event_price(&self, event: &RawEvent) -> Result<i64> {
        event
            .price
            .trim()
            .parse::<i64>()
            .map_err(|source| PipelineError::PriceParse {
                name: event.name.clone(),
                price: event.price.clone(),
                source,
            })
    }

    pub fn transform_events(&self, events: Vec<RawEvent>) -> Result<Transformed<ProcessedEvent>> {
        let read = events.len();
        let mut records = Vec::with_capacity(read);

        for mut event in events {
            // The negative-price check runs first, so a negative "trait" is dropped, not relabeled.
            if self.event_price(&event)? < 0 {
                debug!("Dropping event {:?} with negative price", event.name);
                continue;
            }

            if self.is_ignored_event(&event.name) {
                debug!("Dropping ignored event {:?}", event.name);
                continue;
            }

            if self.has_variable_price(&event.name) {
                event.price = self.variable_price_label.clone();
            }

            records.push(ProcessedEvent::from_raw(event));
        }

        Ok(Transformed::new(records, read))
    }

    pub fn transform_traits(&self, traits: Vec<RawTrait>) -> Transformed<ProcessedTrait> {
        let read = traits.len();
        let records = traits
            .into_iter()
            .filter(|store_trait| store_trait.can_add)
            .map(ProcessedTrait::from_raw)
            .collect();

        Transformed::new(records, read)
    }
}

impl Default for TransformRules {
    fn default() -> Self {
        Self::new(&RulesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KarmaType, UserLevel};
    use pretty_assertions::assert_eq;

    fn command(name: Option<&str>, usage: &str) -> RawCommand {
        RawCommand {
            name: name.map(str::to_string),
            usage: usage.to_string(),
            description: None,
            user_level: UserLevel::Anyone,
            shortcut: false,
            is_shortcut: false,
        }
    }

    fn item(name: &str, category: &str, price: i64) -> RawItem {
        RawItem {
            name: name.to_string(),
            category: category.to_string(),
            definition: String::new(),
            price,
        }
    }

    fn event(name: &str, price: &str) -> RawEvent {
        RawEvent {
            name: name.to_string(),
            price: price.to_string(),
            karma_type: KarmaType::Neutral,
        }
    }

    #[test]
    fn test_command_filtering() {
        let rules = TransformRules::default();

        let result = rules.transform_commands(vec![
            command(Some("Sync"), "!rwdata sync"),
            command(Some(" "), "!buy"),
            command(None, "!balance"),
            command(Some("Buy"), "!buy item"),
        ]);

        assert_eq!(result.dropped, 3);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].usage, "!buy item");
    }

    #[test]
    fn test_reserved_prefix_is_case_sensitive() {
        let rules = TransformRules::default();
        assert!(!rules.admit_command(&command(Some("x"), "!rwdata")));
        assert!(rules.admit_command(&command(Some("x"), "!RWDATA")));
    }

    #[test]
    fn test_items_dropped_and_recategorized() {
        let rules = TransformRules::default();

        let result = rules.transform_items(vec![
            item("broken", "Misc", -1),
            item("laser rifle", "tmc long range", 900),
            item("zeushammer", "Persona weapons", 0),
            item("parka", "Apparel", 300),
        ]);

        assert_eq!(result.dropped, 1);
        let published: Vec<(&str, &str)> = result
            .records
            .iter()
            .map(|i| (i.name.as_str(), i.category.as_str()))
            .collect();
        assert_eq!(
            published,
            vec![
                ("Laser Rifle", "Ranged weapons"),
                ("Zeushammer", "Melee weapons"),
                ("Parka", "Apparel"),
            ]
        );
    }

    #[test]
    fn test_variable_price_events_relabelled() {
        let rules = TransformRules::default();

        let result = rules
            .transform_events(vec![
                event("Trait", "50"),
                event("REPLACETRAIT", "0"),
                event("raid", "500"),
            ])
            .unwrap();

        let prices: Vec<&str> = result.records.iter().map(|e| e.price.as_str()).collect();
        assert_eq!(prices, vec!["Varies", "Varies", "500"]);
        assert_eq!(result.records[2].name, "Raid");
    }

    #[test]
    fn test_events_dropped() {
        let rules = TransformRules::default();

        let result = rules
            .transform_events(vec![
                event("backpack", "10"),
                event("x", "-5"),
                event("trait", "-1"),
                event("y", " 7 "),
            ])
            .unwrap();

        assert_eq!(result.dropped, 3);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].price, " 7 ");
    }

    #[test]
    fn test_non_numeric_event_price_fails() {
        let rules = TransformRules::default();

        let err = rules
            .transform_events(vec![event("trait", "Varies")])
            .unwrap_err();

        assert!(matches!(err, PipelineError::PriceParse { .. }));
    }

    #[test]
    fn test_only_addable_traits_survive() {
        let rules = TransformRules::default();

        let result = rules.transform_traits(vec![
            RawTrait {
                name: "abrasive".to_string(),
                can_add: false,
                ..Default::default()
            },
            RawTrait {
                name: "too smart".to_string(),
                can_add: true,
                add_price: 3999,
                ..Default::default()
            },
        ]);

        assert_eq!(result.dropped, 1);
        assert_eq!(result.records[0].name, "Too Smart");
        assert_eq!(result.records[0].price, 3999);
    }
}
