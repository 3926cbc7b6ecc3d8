// file: src/exporter/mod.rs
// description: output encoding module exports
// reference: internal module structure

pub mod json;

pub use json::{Artifact, ExportedFile, JsonExporter};
