// file: src/utils/validation.rs
// description: input and output path validation helpers
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_input_file(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PipelineError::Validation(format!(
                "File '{}' doesn't exist",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(PipelineError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// The output directory may be missing, but must not be a file.
    pub fn validate_output_directory(path: &Path) -> Result<()> {
        if path.exists() && !path.is_dir() {
            return Err(PipelineError::Validation(format!(
                "Output path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_input_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("commands.json");
        fs::write(&file_path, "[]").unwrap();

        assert!(Validator::validate_input_file(&file_path).is_ok());
        assert!(Validator::validate_input_file(temp.path()).is_err());

        let err = Validator::validate_input_file(Path::new("/nonexistent.json")).unwrap_err();
        assert!(err.to_string().contains("doesn't exist"));
    }

    #[test]
    fn test_validate_output_directory() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("Output");

        assert!(Validator::validate_output_directory(&file_path).is_ok());
        assert!(Validator::validate_output_directory(temp.path()).is_ok());

        fs::write(&file_path, "").unwrap();
        assert!(Validator::validate_output_directory(&file_path).is_err());
    }
}
