//! Errors raised while recording a storage notification

use asset_storage::AssetRecordStorageError;
use thiserror::Error;

use crate::response::RecorderResponse;

/// Result type alias for recorder operations
pub type RecorderResult<T> = Result<T, RecorderError>;

/// Recorder error types
#[derive(Debug, Error)]
pub enum RecorderError {
    /// The queue envelope or the embedded storage event does not have the expected shape
    #[error("Malformed notification: {0}")]
    MalformedInput(String),

    /// The asset record could not be written to the table
    #[error("Failed to write asset record: {source}")]
    WriteFailure {
        /// Underlying storage error
        #[source]
        source: AssetRecordStorageError,
        /// Response the failure resolves to (status 500)
        response: RecorderResponse,
    },
}

impl RecorderError {
    /// Wraps a storage error together with its 500 response
    #[must_use]
    pub fn write_failure(source: AssetRecordStorageError) -> Self {
        Self::WriteFailure {
            source,
            response: RecorderResponse::write_failed(),
        }
    }

    /// Response attached to the error, if the failure maps to one
    ///
    /// Malformed input never produces a status code.
    #[must_use]
    pub const fn response(&self) -> Option<&RecorderResponse> {
        match self {
            Self::MalformedInput(_) => None,
            Self::WriteFailure { response, .. } => Some(response),
        }
    }
}

impl From<serde_json::Error> for RecorderError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}
