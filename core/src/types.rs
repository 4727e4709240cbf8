//! Response and configuration types for the API client.
//!
//! # Design
//! The remote API's response schemas are undocumented, so bodies stay as
//! opaque `serde_json::Value`s rather than typed DTOs. `ApiResponse` pairs
//! the decoded body with the observed HTTP status; `into_value()` recreates
//! the legacy mapping shape (status merged into the body under `http_code`)
//! for callers that still want a single JSON object.

use std::time::Duration;

use serde_json::Value;

/// Key under which the observed HTTP status lands in the legacy mapping.
pub const HTTP_CODE_KEY: &str = "http_code";

/// A completed API round-trip: decoded JSON body plus observed status code.
///
/// Any status the server returns — including 4xx and 5xx — produces an
/// `ApiResponse`; only transport failures and undecodable bodies surface as
/// `ClientError`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub body: Value,
    pub http_code: u16,
}

impl ApiResponse {
    /// Merge the status code into the body under [`HTTP_CODE_KEY`],
    /// reproducing the legacy wire-compatible mapping.
    ///
    /// Non-object bodies (the remote API is not known to send any) are
    /// wrapped as `{"http_code": .., "body": ..}` rather than dropped.
    pub fn into_value(self) -> Value {
        match self.body {
            Value::Object(mut map) => {
                map.insert(HTTP_CODE_KEY.to_string(), Value::from(self.http_code));
                Value::Object(map)
            }
            other => serde_json::json!({ HTTP_CODE_KEY: self.http_code, "body": other }),
        }
    }
}

/// Per-operation timeouts.
///
/// The defaults mirror the legacy client: uploads get 120 s (server-side PDF
/// processing is slow), questions 60 s, and the cheap probe endpoints
/// (health, status, reset) 10 s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeouts {
    pub upload: Duration,
    pub ask: Duration,
    pub probe: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            upload: Duration::from_secs(120),
            ask: Duration::from_secs(60),
            probe: Duration::from_secs(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_value_merges_http_code_into_object() {
        let response = ApiResponse {
            body: serde_json::json!({"status": "ok"}),
            http_code: 200,
        };
        assert_eq!(
            response.into_value(),
            serde_json::json!({"status": "ok", "http_code": 200})
        );
    }

    #[test]
    fn into_value_wraps_non_object_body() {
        let response = ApiResponse {
            body: serde_json::json!(["a", "b"]),
            http_code: 200,
        };
        assert_eq!(
            response.into_value(),
            serde_json::json!({"http_code": 200, "body": ["a", "b"]})
        );
    }

    #[test]
    fn default_timeouts_match_legacy_contract() {
        let timeouts = Timeouts::default();
        assert_eq!(timeouts.upload, Duration::from_secs(120));
        assert_eq!(timeouts.ask, Duration::from_secs(60));
        assert_eq!(timeouts.probe, Duration::from_secs(10));
    }
}
