// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

pub mod classifier;
mod orchestrator;
mod processor;
mod progress;
pub mod rules;
pub mod sorter;

pub use classifier::{CommandBucket, CommandBuckets, RecordClassifier, TraitBucket, TraitBuckets};
pub use orchestrator::{InputFiles, PipelineOrchestrator, PipelineSummary, RunReport};
pub use processor::{ProcessingResult, RecordProcessor};
pub use progress::{PipelineStats, ProgressTracker};
pub use rules::{TransformRules, Transformed};
