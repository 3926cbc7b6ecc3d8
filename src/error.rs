// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use crate::models::RecordKind;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {document} document: {source}")]
    Decode {
        document: RecordKind,
        source: serde_json::Error,
    },

    #[error("Unrecognized enumeration value for {field}: {value:?}")]
    UnrecognizedValue { field: &'static str, value: String },

    #[error("Price {price:?} of event {name:?} is not an integer: {source}")]
    PriceParse {
        name: String,
        price: String,
        source: ParseIntError,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// True for errors raised while turning input text into records.
    pub fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            PipelineError::Decode { .. }
                | PipelineError::UnrecognizedValue { .. }
                | PipelineError::PriceParse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_value_message() {
        let err = PipelineError::UnrecognizedValue {
            field: "userLevel",
            value: "Superuser".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized enumeration value for userLevel: \"Superuser\""
        );
        assert!(err.is_decode_failure());
    }

    #[test]
    fn test_validation_is_not_decode_failure() {
        let err = PipelineError::Validation("bad".to_string());
        assert!(!err.is_decode_failure());
    }
}
