//! Error types for asset record storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{get_item::GetItemError, put_item::PutItemError};
use thiserror::Error;

/// Result type alias for storage operations
pub type AssetRecordStorageResult<T> = Result<T, AssetRecordStorageError>;

/// Storage error types for asset record operations
#[derive(Debug, Error)]
pub enum AssetRecordStorageError {
    /// Failed to insert asset record into `DynamoDB`
    #[error("Failed to insert asset record into DynamoDB: {0:?}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to get asset record from `DynamoDB`
    #[error("Failed to get asset record from DynamoDB: {0:?}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to convert an asset record to or from a `DynamoDB` item
    #[error("Failed to parse asset record: {0}")]
    SerializationError(String),
}

impl From<serde_dynamo::Error> for AssetRecordStorageError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
