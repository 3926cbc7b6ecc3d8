// file: src/pipeline/classifier.rs
// description: routes processed records into named output buckets
// reference: configurable rule-based classification

use crate::config::RulesConfig;
use crate::models::{ProcessedCommand, ProcessedTrait, UserLevel};
use crate::utils::text::contains_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum CommandBucket {
    Moderator,
    Viewer,
    Pawn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum TraitBucket {
    Vanilla,
    Magic,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandBuckets {
    pub moderator: Vec<ProcessedCommand>,
    pub viewer: Vec<ProcessedCommand>,
    pub pawn: Vec<ProcessedCommand>,
}

impl CommandBuckets {
    pub fn get_mut(&mut self, bucket: CommandBucket) -> &mut Vec<ProcessedCommand> {
        match bucket {
            CommandBucket::Moderator => &mut self.moderator,
            CommandBucket::Viewer => &mut self.viewer,
            CommandBucket::Pawn => &mut self.pawn,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraitBuckets {
    pub vanilla: Vec<ProcessedTrait>,
    pub magic: Vec<ProcessedTrait>,
}

pub struct RecordClassifier {
    pawn_command_prefixes: Vec<String>,
    pawn_command_keyword: String,
    magic_trait_price: i64,
}

impl RecordClassifier {
    pub fn new(rules: &RulesConfig) -> Self {
        Self {
            pawn_command_prefixes: rules.pawn_command_prefixes.clone(),
            pawn_command_keyword: rules.pawn_command_keyword.clone(),
            magic_trait_price: rules.magic_trait_price,
        }
    }

    /// Commands that act on the viewer's own pawn.
    /// Prefixes match case-sensitively, the keyword anywhere and in any case.
    pub fn is_pawn_command(&self, usage: &str) -> bool {
        self.pawn_command_prefixes
            .iter()
            .any(|prefix| usage.starts_with(prefix.as_str()))
            || contains_ignore_case(usage, &self.pawn_command_keyword)
    }

    pub fn command_bucket(&self, command: &ProcessedCommand) -> CommandBucket {
        if command.user_level == UserLevel::Moderator {
            CommandBucket::Moderator
        } else if self.is_pawn_command(&command.usage) {
            CommandBucket::Pawn
        } else {
            CommandBucket::Viewer
        }
    }

    pub fn split_commands(&self, commands: Vec<ProcessedCommand>) -> CommandBuckets {
        let mut buckets = CommandBuckets::default();
        for command in commands {
            let bucket = self.command_bucket(&command);
            buckets.get_mut(bucket).push(command);
        }
        buckets
    }

    pub fn trait_bucket(&self, store_trait: &ProcessedTrait) -> TraitBucket {
        if store_trait.price == self.magic_trait_price {
            TraitBucket::Magic
        } else {
            TraitBucket::Vanilla
        }
    }

    /// Keeps the incoming order inside each bucket.
    pub fn split_traits(&self, traits: Vec<ProcessedTrait>) -> TraitBuckets {
        let mut buckets = TraitBuckets::default();
        for store_trait in traits {
            match self.trait_bucket(&store_trait) {
                TraitBucket::Magic => buckets.magic.push(store_trait),
                TraitBucket::Vanilla => buckets.vanilla.push(store_trait),
            }
        }
        buckets
    }
}

impl Default for RecordClassifier {
    fn default() -> Self {
        Self::new(&RulesConfig::default())
    }
}
