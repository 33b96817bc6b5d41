//! Lambda function that records S3 uploads in the asset records table

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Queue envelope and S3 event models
pub mod event;

/// Lambda handler
pub mod handler;

/// Response envelope
pub mod response;

/// Environment and error types
pub mod types;
