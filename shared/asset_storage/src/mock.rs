//! In-memory asset record store for tests

use aws_sdk_dynamodb::error::SdkError;
use tokio::sync::Mutex;

use crate::asset_record::{
    AssetRecord, AssetRecordStorageError, AssetRecordStorageResult, AssetRecordStore,
};

/// Records every write in memory, or rejects every write when configured to fail
#[derive(Default)]
pub struct MockAssetRecordStore {
    records: Mutex<Vec<AssetRecord>>,
    fail_writes: bool,
}

impl MockAssetRecordStore {
    /// Creates a store that accepts every write
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose writes fail as if `DynamoDB` were unreachable
    #[must_use]
    pub fn failing() -> Self {
        Self {
            records: Mutex::default(),
            fail_writes: true,
        }
    }

    /// Snapshot of the records written so far
    pub async fn records(&self) -> Vec<AssetRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl AssetRecordStore for MockAssetRecordStore {
    async fn put_record(&self, record: &AssetRecord) -> AssetRecordStorageResult<()> {
        if self.fail_writes {
            return Err(AssetRecordStorageError::DynamoDbPutError(
                SdkError::construction_failure("simulated DynamoDB outage"),
            ));
        }

        self.records.lock().await.push(record.clone());
        Ok(())
    }
}
