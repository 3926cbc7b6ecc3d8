// file: src/exporter/json.rs
// description: renders published listings as indented json and writes them to disk
// reference: https://docs.rs/serde_json

use crate::error::{PipelineError, Result};
use crate::models::Listing;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

/// A rendered output document that has not been written yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub file_name: String,
    pub contents: String,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub total: usize,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Two-space indented json with a trailing newline.
    pub fn render<L: Listing>(file_name: &str, listing: &L) -> Result<Artifact> {
        let mut contents = serde_json::to_string_pretty(listing).map_err(|e| {
            PipelineError::Serialization(format!("Failed to serialize {}: {}", file_name, e))
        })?;
        contents.push('\n');

        Ok(Artifact {
            file_name: file_name.to_string(),
            contents,
            total: listing.total(),
        })
    }

    /// Writes every artifact of one pipeline, creating the output directory first.
    pub fn write_all(&self, artifacts: &[Artifact]) -> Result<Vec<ExportedFile>> {
        fs::create_dir_all(&self.output_dir).map_err(|source| PipelineError::FileOperation {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut exported = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.output_dir.join(&artifact.file_name);
            fs::write(&path, &artifact.contents).map_err(|source| {
                PipelineError::FileOperation {
                    path: path.clone(),
                    source,
                }
            })?;

            debug!("Wrote {} bytes to {}", artifact.contents.len(), path.display());
            info!("Exported {} records to {}", artifact.total, path.display());

            exported.push(ExportedFile {
                path,
                total: artifact.total,
            });
        }

        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemListing, ProcessedItem, TraitListing};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn listing() -> ItemListing {
        ItemListing::new(vec![ProcessedItem {
            name: "Parka".to_string(),
            price: 300,
            category: "Apparel".to_string(),
        }])
    }

    #[test]
    fn test_render_layout() {
        let artifact = JsonExporter::render("StoreItems.json", &listing()).unwrap();

        let expected = "{\n  \"items\": [\n    {\n      \"name\": \"Parka\",\n      \"price\": 300,\n      \"category\": \"Apparel\"\n    }\n  ],\n  \"total\": 1\n}\n";
        assert_eq!(artifact.contents, expected);
        assert_eq!(artifact.total, 1);
    }

    #[test]
    fn test_render_empty_listing() {
        let artifact =
            JsonExporter::render("StoreTraitsMagic.json", &TraitListing::new(vec![])).unwrap();

        assert_eq!(artifact.contents, "{\n  \"traits\": [],\n  \"total\": 0\n}\n");
    }

    #[test]
    fn test_write_all_creates_directory() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("Output");
        let exporter = JsonExporter::new(&output);

        let artifact = JsonExporter::render("StoreItems.json", &listing()).unwrap();
        let exported = exporter.write_all(&[artifact.clone()]).unwrap();

        assert_eq!(exported.len(), 1);
        assert_eq!(exported[0].path, output.join("StoreItems.json"));
        assert_eq!(fs::read_to_string(&exported[0].path).unwrap(), artifact.contents);
    }
}
