//! Object location carried by a queue event
//!
//! The queue delivers an SQS event whose message bodies are S3 event
//! notifications. Only the first message and its first S3 record are read, the
//! rest of the batch is never inspected.

use aws_lambda_events::event::s3::S3Entity;
use aws_lambda_events::event::sqs::SqsEvent;
use serde::Deserialize;

use crate::types::{RecorderError, RecorderResult};

/// Location of the object that triggered the notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    /// Bucket name
    pub bucket: String,
    /// Object key, URL-encoded as S3 reports it
    pub key: String,
}

impl ObjectLocation {
    /// Extracts the object location from the first message of a queue event
    ///
    /// # Errors
    ///
    /// Returns `RecorderError::MalformedInput` if the event has no messages, the
    /// first message has no body, the body is not an S3 notification with at
    /// least one record, or the bucket name or object key is missing
    pub fn from_sqs_event(event: &SqsEvent) -> RecorderResult<Self> {
        let body = event
            .records
            .first()
            .ok_or_else(|| malformed("queue event has no records"))?
            .body
            .as_deref()
            .ok_or_else(|| malformed("queue message has no body"))?;

        let notification: serde_json::Value = serde_json::from_str(body)?;
        let s3 = notification
            .get("Records")
            .and_then(serde_json::Value::as_array)
            .and_then(|records| records.first())
            .ok_or_else(|| malformed("storage event has no records"))?
            .get("s3")
            .ok_or_else(|| malformed("storage record has no s3 entity"))?;

        let entity = S3Entity::deserialize(s3)?;

        Ok(Self {
            bucket: entity
                .bucket
                .name
                .ok_or_else(|| malformed("storage record has no bucket name"))?,
            key: entity
                .object
                .key
                .ok_or_else(|| malformed("storage record has no object key"))?,
        })
    }
}

fn malformed(reason: &str) -> RecorderError {
    RecorderError::MalformedInput(reason.to_string())
}
