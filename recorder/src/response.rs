//! Response envelope returned to the Lambda invoker

use std::collections::BTreeMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Proxy-style response: status code, JSON body and fixed CORS headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecorderResponse {
    /// HTTP-style status code
    pub status_code: u16,
    /// JSON-encoded body
    pub body: String,
    /// Response headers
    pub headers: BTreeMap<String, String>,
}

impl RecorderResponse {
    /// Builds a response with an empty JSON object as body
    #[must_use]
    pub fn empty(status: StatusCode) -> Self {
        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
        ]);

        Self {
            status_code: status.as_u16(),
            body: serde_json::Value::Object(serde_json::Map::new()).to_string(),
            headers,
        }
    }

    /// Record was written
    #[must_use]
    pub fn ok() -> Self {
        Self::empty(StatusCode::OK)
    }

    /// Record could not be written
    #[must_use]
    pub fn write_failed() -> Self {
        Self::empty(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
