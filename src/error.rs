//! Error handling

use std::path::PathBuf;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug)]
pub enum CoreError {
    /// Schema or classifier artifact absent at startup. Fatal, never retried.
    ArtifactMissing(PathBuf),

    /// Artifact present but unusable (duplicate columns, shape mismatch)
    ArtifactInvalid(String),

    /// Raw field outside its declared domain. Rejected at the input
    /// boundary, before the encoder runs.
    InvalidInput(String),

    /// Model execution failure at request time
    Inference(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::ArtifactMissing(path) => {
                write!(f, "Required artifact not found: {}", path.display())
            }
            CoreError::ArtifactInvalid(msg) => write!(f, "Invalid artifact: {}", msg),
            CoreError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CoreError::Inference(msg) => write!(f, "Inference failed: {}", msg),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<crate::logic::model::InferenceError> for CoreError {
    fn from(err: crate::logic::model::InferenceError) -> Self {
        CoreError::Inference(err.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_missing_display() {
        let err = CoreError::ArtifactMissing(PathBuf::from("model_columns.json"));
        assert!(err.to_string().contains("model_columns.json"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = CoreError::InvalidInput("tenure 90 out of range".to_string());
        assert!(err.to_string().contains("tenure 90"));
    }
}
