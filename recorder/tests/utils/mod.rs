#![allow(dead_code)]

mod dynamodb_setup;

use std::sync::Arc;

use asset_storage::AssetRecordStorage;
use aws_lambda_events::event::sqs::SqsEvent;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use dynamodb_setup::DynamoDbTestSetup;
use lambda_runtime::{Context, LambdaEvent};
use recorder::types::Environment;
use serde_json::json;

/// Setup test environment variables with all the required configuration
fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.example").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Builds the queue event S3 delivers for a single created object
pub fn sqs_event(bucket: &str, key: &str) -> LambdaEvent<SqsEvent> {
    let body = json!({
        "Records": [{
            "eventVersion": "2.1",
            "eventSource": "aws:s3",
            "eventName": "ObjectCreated:Put",
            "s3": {
                "bucket": { "name": bucket, "arn": format!("arn:aws:s3:::{bucket}") },
                "object": { "key": key, "size": 1024 }
            }
        }]
    });

    let payload = json!({
        "Records": [{
            "messageId": uuid::Uuid::new_v4().to_string(),
            "eventSource": "aws:sqs",
            "body": body.to_string()
        }]
    });

    let event: SqsEvent = serde_json::from_value(payload).expect("Failed to build SQS event");

    LambdaEvent::new(event, Context::default())
}

/// Asset record storage backed by a fresh LocalStack table
pub struct TestContext {
    pub storage: Arc<AssetRecordStorage>,
    pub dynamodb_setup: DynamoDbTestSetup,
}

impl TestContext {
    pub async fn new() -> Self {
        setup_test_env();

        let environment = Environment::Development;

        let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
        let dynamodb_setup = DynamoDbTestSetup::new(dynamodb_client.clone()).await;
        let storage = Arc::new(AssetRecordStorage::new(
            dynamodb_client,
            dynamodb_setup.asset_records_table_name.clone(),
        ));

        Self {
            storage,
            dynamodb_setup,
        }
    }
}
