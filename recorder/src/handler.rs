//! Lambda handler that records uploaded objects in the asset records table

use asset_storage::{AssetRecord, AssetRecordStore};
use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{Error, LambdaEvent};

use crate::event::ObjectLocation;
use crate::response::RecorderResponse;
use crate::types::{RecorderError, RecorderResult};

/// Handles a queue event carrying an S3 creation notification
///
/// Every error fails the invocation. A failed write additionally carries the
/// 500 response on the returned `RecorderError`.
///
/// # Errors
///
/// Returns `RecorderError::MalformedInput` for payloads that are not S3
/// notifications, or `RecorderError::WriteFailure` if the record cannot be stored
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler<S>(
    store: &S,
    event: LambdaEvent<SqsEvent>,
) -> Result<RecorderResponse, Error>
where
    S: AssetRecordStore + ?Sized,
{
    let location = ObjectLocation::from_sqs_event(&event.payload)
        .inspect_err(|e| tracing::warn!(error = %e, "Rejected notification"))?;

    Ok(record_notification(store, location).await?)
}

/// Stores a new asset record for the object and builds the success response
///
/// The bucket is only logged, the record keeps the object key alone.
///
/// # Errors
///
/// Returns `RecorderError::WriteFailure` if the store rejects the record
#[tracing::instrument(skip_all, fields(bucket = %location.bucket, key = %location.key, record_id))]
pub async fn record_notification<S>(
    store: &S,
    location: ObjectLocation,
) -> RecorderResult<RecorderResponse>
where
    S: AssetRecordStore + ?Sized,
{
    let record = AssetRecord::new(location.key);
    tracing::Span::current().record("record_id", record.record_id.as_str());

    if let Err(e) = store.put_record(&record).await {
        tracing::error!(error = %e, "Failed to store asset record");
        return Err(RecorderError::write_failure(e));
    }

    tracing::info!("Stored asset record");

    Ok(RecorderResponse::ok())
}
