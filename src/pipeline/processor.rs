// file: src/pipeline/processor.rs
// description: turns one raw export document into rendered output artifacts
// reference: decode, filter, classify, sort, render for each record kind

use crate::config::{Config, OutputFiles};
use crate::error::{PipelineError, Result};
use crate::exporter::{Artifact, JsonExporter};
use crate::models::{CommandListing, EventListing, ItemListing, RecordKind, TraitListing};
use crate::parser::DocumentDecoder;
use crate::pipeline::classifier::{CommandBucket, RecordClassifier, TraitBucket};
use crate::pipeline::rules::TransformRules;
use crate::pipeline::sorter;
use std::fs;
use std::path::Path;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// Everything one pipeline produced, rendered but not yet written.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult {
    pub kind: RecordKind,
    pub records_read: usize,
    pub records_dropped: usize,
    pub artifacts: Vec<Artifact>,
}

impl ProcessingResult {
    pub fn records_written(&self) -> usize {
        self.artifacts.iter().map(|artifact| artifact.total).sum()
    }
}

pub struct RecordProcessor {
    files: OutputFiles,
    decoder: DocumentDecoder,
    rules: TransformRules,
    classifier: RecordClassifier,
}

impl RecordProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            files: config.output.files.clone(),
            decoder: DocumentDecoder::new(),
            rules: TransformRules::new(&config.rules),
            classifier: RecordClassifier::new(&config.rules),
        }
    }

    pub fn process(&self, kind: RecordKind, path: &Path) -> Result<ProcessingResult> {
        info!("Processing {} from {}", kind, path.display());

        let content = self.read_file_content(path)?;
        match kind {
            RecordKind::Commands => self.process_commands(&content),
            RecordKind::Items => self.process_items(&content),
            RecordKind::Events => self.process_events(&content),
            RecordKind::Traits => self.process_traits(&content),
        }
    }

    pub fn process_commands(&self, json: &str) -> Result<ProcessingResult> {
        let raw = self.decoder.decode_commands(json)?;
        let records_read = raw.len();

        let transformed = self.rules.transform_commands(raw);
        let mut buckets = self.classifier.split_commands(transformed.records);

        let mut artifacts = Vec::new();
        for bucket in CommandBucket::iter() {
            let commands = buckets.get_mut(bucket);
            sorter::sort_commands(commands);
            debug!("{} command bucket holds {} commands", bucket, commands.len());

            let listing = CommandListing::new(std::mem::take(commands));
            artifacts.push(JsonExporter::render(self.command_file(bucket), &listing)?);
        }

        Ok(ProcessingResult {
            kind: RecordKind::Commands,
            records_read,
            records_dropped: transformed.dropped,
            artifacts,
        })
    }

    pub fn process_items(&self, json: &str) -> Result<ProcessingResult> {
        let raw = self.decoder.decode_items(json)?;
        let records_read = raw.len();

        let mut transformed = self.rules.transform_items(raw);
        sorter::sort_items(&mut transformed.records);

        let listing = ItemListing::new(transformed.records);
        let artifact = JsonExporter::render(&self.files.items, &listing)?;

        Ok(ProcessingResult {
            kind: RecordKind::Items,
            records_read,
            records_dropped: transformed.dropped,
            artifacts: vec![artifact],
        })
    }

    pub fn process_events(&self, json: &str) -> Result<ProcessingResult> {
        let raw = self.decoder.decode_events(json)?;
        let records_read = raw.len();

        let mut transformed = self.rules.transform_events(raw)?;
        sorter::sort_events(&mut transformed.records);

        let listing = EventListing::new(transformed.records);
        let artifact = JsonExporter::render(&self.files.events, &listing)?;

        Ok(ProcessingResult {
            kind: RecordKind::Events,
            records_read,
            records_dropped: transformed.dropped,
            artifacts: vec![artifact],
        })
    }

    pub fn process_traits(&self, json: &str) -> Result<ProcessingResult> {
        let document = self.decoder.decode_traits(json)?;
        let records_read = document.traits.len();

        let transformed = self.rules.transform_traits(document.traits);
        let mut buckets = self.classifier.split_traits(transformed.records);

        let mut artifacts = Vec::new();
        for bucket in TraitBucket::iter() {
            let traits = match bucket {
                TraitBucket::Vanilla => std::mem::take(&mut buckets.vanilla),
                TraitBucket::Magic => std::mem::take(&mut buckets.magic),
            };
            debug!("{} trait bucket holds {} traits", bucket, traits.len());

            let listing = TraitListing::new(traits);
            artifacts.push(JsonExporter::render(self.trait_file(bucket), &listing)?);
        }

        Ok(ProcessingResult {
            kind: RecordKind::Traits,
            records_read,
            records_dropped: transformed.dropped,
            artifacts,
        })
    }

    fn command_file(&self, bucket: CommandBucket) -> &str {
        match bucket {
            CommandBucket::Moderator => &self.files.commands_moderator,
            CommandBucket::Viewer => &self.files.commands_viewer,
            CommandBucket::Pawn => &self.files.commands_pawn,
        }
    }

    fn trait_file(&self, bucket: TraitBucket) -> &str {
        match bucket {
            TraitBucket::Vanilla => &self.files.traits_vanilla,
            TraitBucket::Magic => &self.files.traits_magic,
        }
    }

    fn read_file_content(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })
    }
}
