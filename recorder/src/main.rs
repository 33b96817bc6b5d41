use std::sync::Arc;

use asset_storage::{AssetRecordStorage, ASSET_RECORDS_TABLE_NAME};
use aws_lambda_events::event::sqs::SqsEvent;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use recorder::{handler::function_handler, types::Environment};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let environment = Environment::from_env();

    // JSON logs for CloudWatch in staging/production, plain text locally
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    tracing::info!("Starting asset recorder in {:?} environment", environment);

    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));
    let storage = Arc::new(AssetRecordStorage::new(
        dynamodb_client,
        ASSET_RECORDS_TABLE_NAME.to_string(),
    ));

    run(service_fn(move |event: LambdaEvent<SqsEvent>| {
        let storage = storage.clone();

        async move { function_handler(storage.as_ref(), event).await }
    }))
    .await
}
