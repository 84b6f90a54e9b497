use tastebench_core::Error as CoreError;
use thiserror::Error;

/// Artifact-loading error types
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid contents in {path}: {message}")]
    Shape { path: String, message: String },
}

impl From<DatasetError> for CoreError {
    fn from(err: DatasetError) -> Self {
        match err {
            DatasetError::Parse { path, message } => CoreError::parse(path, message),
            other => CoreError::dataset(other.to_string()),
        }
    }
}
