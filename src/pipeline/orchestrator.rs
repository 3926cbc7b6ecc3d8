// file: src/pipeline/orchestrator.rs
// description: runs the four record pipelines and writes their output
// reference: sequential pipelines with per-pipeline failure isolation

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::exporter::{ExportedFile, JsonExporter};
use crate::models::RecordKind;
use crate::pipeline::processor::RecordProcessor;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing::{error, info};

/// The four raw export documents, in command-line order.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFiles {
    pub commands: PathBuf,
    pub items: PathBuf,
    pub events: PathBuf,
    pub traits: PathBuf,
}

impl InputFiles {
    pub fn from_args(files: &[PathBuf]) -> Result<Self> {
        match files {
            [commands, items, events, traits] => Ok(Self {
                commands: commands.clone(),
                items: items.clone(),
                events: events.clone(),
                traits: traits.clone(),
            }),
            _ => Err(PipelineError::Validation(format!(
                "Expected 4 input files, got {}",
                files.len()
            ))),
        }
    }

    pub fn path(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Commands => &self.commands,
            RecordKind::Items => &self.items,
            RecordKind::Events => &self.events,
            RecordKind::Traits => &self.traits,
        }
    }

    pub fn all(&self) -> [&Path; 4] {
        [&self.commands, &self.items, &self.events, &self.traits]
    }

    /// Output lives next to the commands document.
    pub fn default_output_dir(&self, directory_name: &str) -> PathBuf {
        self.commands
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(directory_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub kind: RecordKind,
    pub records_read: usize,
    pub records_dropped: usize,
    pub files: Vec<ExportedFile>,
}

#[derive(Debug)]
pub struct RunReport {
    pub summaries: Vec<PipelineSummary>,
    pub failures: Vec<(RecordKind, PipelineError)>,
    pub stats: PipelineStats,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct PipelineOrchestrator {
    processor: RecordProcessor,
    exporter: JsonExporter,
}

impl PipelineOrchestrator {
    pub fn new(config: &Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            processor: RecordProcessor::new(config),
            exporter: JsonExporter::new(output_dir),
        }
    }

    pub fn output_dir(&self) -> &Path {
        self.exporter.output_dir()
    }

    /// Runs every pipeline. A failing pipeline writes nothing and does not
    /// stop the others.
    pub fn run(&self, inputs: &InputFiles, progress: &ProgressTracker) -> RunReport {
        info!(
            "Starting conversion into {}",
            self.exporter.output_dir().display()
        );

        let mut summaries = Vec::new();
        let mut failures = Vec::new();

        for kind in RecordKind::iter() {
            progress.start_pipeline(kind.as_ref());

            match self.run_pipeline(kind, inputs.path(kind)) {
                Ok(summary) => {
                    progress.add_records(
                        summary.records_read,
                        summary.records_dropped,
                        summary.files.iter().map(|f| f.total).sum(),
                    );
                    progress.add_files_written(summary.files.len());
                    progress.inc_pipelines_succeeded();
                    summaries.push(summary);
                }
                Err(e) => {
                    error!("The {} pipeline failed: {}", kind, e);
                    progress.inc_pipelines_failed();
                    failures.push((kind, e));
                }
            }
        }

        let stats = progress.get_stats();
        progress.finish();
        self.log_final_stats(&stats);

        RunReport {
            summaries,
            failures,
            stats,
        }
    }

    pub fn run_pipeline(&self, kind: RecordKind, path: &Path) -> Result<PipelineSummary> {
        let result = self.processor.process(kind, path)?;
        let files = self.exporter.write_all(&result.artifacts)?;

        info!(
            "The {} pipeline kept {} of {} records",
            kind,
            result.records_written(),
            result.records_read
        );

        Ok(PipelineSummary {
            kind,
            records_read: result.records_read,
            records_dropped: result.records_dropped,
            files,
        })
    }

    fn log_final_stats(&self, stats: &PipelineStats) {
        info!("Conversion finished in {} ms", stats.duration_ms);
        info!(
            "Pipelines: {} succeeded, {} failed ({:.0}% success)",
            stats.pipelines_succeeded,
            stats.pipelines_failed,
            stats.success_rate()
        );
        info!(
            "Records: {} read, {} dropped ({:.1}%), {} written to {} files",
            stats.records_read,
            stats.records_dropped,
            stats.drop_rate(),
            stats.records_written,
            stats.files_written
        );
    }
}
