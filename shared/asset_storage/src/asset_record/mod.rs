//! Asset record storage module for `DynamoDB` operations

mod error;

use std::sync::Arc;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
pub use error::{AssetRecordStorageError, AssetRecordStorageResult};
use serde::{Deserialize, Serialize};
use serde_dynamo::to_item;
use strum::Display;

/// Table that receives one record per uploaded asset
pub const ASSET_RECORDS_TABLE_NAME: &str = "mediaconvert-records";

/// `DynamoDB` item mapping a generated record ID to an uploaded object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Primary key - unique record ID (UUID v4)
    #[serde(rename = "RecordId")]
    pub record_id: String,
    /// S3 object key, exactly as reported by the creation event
    pub filename: String,
}

impl AssetRecord {
    /// Creates a record for `filename` under a freshly generated UUID v4
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            record_id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
        }
    }
}

/// `DynamoDB` attribute names for the asset records table
#[derive(Debug, Display)]
pub enum AssetRecordAttribute {
    /// Primary key - unique record ID
    #[strum(serialize = "RecordId")]
    RecordId,
    /// Source object key
    #[strum(serialize = "filename")]
    Filename,
}

/// Write side of the asset records table
///
/// The recorder only depends on this trait so tests can swap in an in-memory store.
#[async_trait::async_trait]
pub trait AssetRecordStore: Send + Sync {
    /// Persists a single asset record
    async fn put_record(&self, record: &AssetRecord) -> AssetRecordStorageResult<()>;
}

/// Storage client for asset record operations
pub struct AssetRecordStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl AssetRecordStorage {
    /// Creates a new storage instance
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured `DynamoDB` client
    /// * `table_name` - `DynamoDB` table name for asset records
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Inserts an asset record
    ///
    /// # Errors
    ///
    /// Returns `AssetRecordStorageError` if the record cannot be converted or the
    /// `DynamoDB` put operation fails
    pub async fn insert(&self, record: &AssetRecord) -> AssetRecordStorageResult<()> {
        let item = to_item(record)?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;

        tracing::debug!(
            record_id = %record.record_id,
            table = %self.table_name,
            "Inserted asset record"
        );

        Ok(())
    }

    /// Get a single asset record by ID
    ///
    /// # Errors
    ///
    /// Returns `AssetRecordStorageError` if the `DynamoDB` get operation fails
    pub async fn get_one(&self, record_id: &str) -> AssetRecordStorageResult<Option<AssetRecord>> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(
                AssetRecordAttribute::RecordId.to_string(),
                AttributeValue::S(record_id.to_string()),
            )
            .consistent_read(true)
            .send()
            .await?;

        response
            .item()
            .map(|item| {
                serde_dynamo::from_item(item.clone())
                    .map_err(|e| AssetRecordStorageError::SerializationError(e.to_string()))
            })
            .transpose()
    }
}

#[async_trait::async_trait]
impl AssetRecordStore for AssetRecordStorage {
    async fn put_record(&self, record: &AssetRecord) -> AssetRecordStorageResult<()> {
        self.insert(record).await
    }
}
