//! Asset record storage for the media pipeline
//!
//! This crate owns the `DynamoDB` table that maps generated record IDs to the
//! S3 object keys of uploaded assets.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

pub mod asset_record;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use asset_record::{
    AssetRecord, AssetRecordAttribute, AssetRecordStorage, AssetRecordStorageError,
    AssetRecordStorageResult, AssetRecordStore, ASSET_RECORDS_TABLE_NAME,
};
