// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod utils;

pub use config::{CategoryRule, Config, OutputConfig, OutputFiles, RulesConfig};
pub use error::{PipelineError, Result};
pub use exporter::{Artifact, ExportedFile, JsonExporter};
pub use models::{Listing, RecordKind};
pub use parser::DocumentDecoder;
pub use pipeline::{
    InputFiles, PipelineOrchestrator, PipelineStats, PipelineSummary, ProgressTracker,
    RecordClassifier, RecordProcessor, RunReport, TransformRules,
};
pub use utils::Validator;
