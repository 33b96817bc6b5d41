use asset_storage::AssetRecordAttribute;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Helper for creating and managing DynamoDB tables in tests
pub struct DynamoDbTestSetup {
    client: Arc<DynamoDbClient>,
    pub asset_records_table_name: String,
}

impl DynamoDbTestSetup {
    pub async fn new(client: Arc<DynamoDbClient>) -> Self {
        let asset_records_table_name = Self::create_asset_records_table(&client).await;

        Self {
            client,
            asset_records_table_name,
        }
    }

    /// Creates a test asset records table with a unique name
    async fn create_asset_records_table(client: &DynamoDbClient) -> String {
        let table_name = format!("test-asset-records-{}", Uuid::new_v4());

        client
            .create_table()
            .table_name(&table_name)
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(AssetRecordAttribute::RecordId.to_string())
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(AssetRecordAttribute::RecordId.to_string())
                    .key_type(KeyType::Hash)
                    .build()
                    .unwrap(),
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .expect("Failed to create test table");

        // Wait for table to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        table_name
    }

    /// Number of items currently in the asset records table
    pub async fn item_count(&self) -> usize {
        self.record_ids().await.len()
    }

    /// Record IDs of every item in the asset records table
    pub async fn record_ids(&self) -> Vec<String> {
        self.client
            .scan()
            .table_name(&self.asset_records_table_name)
            .send()
            .await
            .expect("Failed to scan test table")
            .items()
            .iter()
            .filter_map(|item| {
                item.get(&AssetRecordAttribute::RecordId.to_string())
                    .and_then(|value| value.as_s().ok())
                    .cloned()
            })
            .collect()
    }
}

impl Drop for DynamoDbTestSetup {
    fn drop(&mut self) {
        let client = self.client.clone();
        let table = self.asset_records_table_name.clone();

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = client.delete_table().table_name(&table).send().await;
            });
        }
    }
}
