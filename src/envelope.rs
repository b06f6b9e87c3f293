//! Response envelope handling.
//!
//! Every Freelancer API response wraps its payload in a JSON envelope:
//! `{"status": "success", "result": ...}` on success, and
//! `{"status": "error", "message": ..., "error_code": ..., "request_id": ...}`
//! on failure, with every field optional in practice. The success contract
//! used throughout this crate is uniform: an HTTP 2xx status plus a present
//! `result` field.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiFailure, UNKNOWN_ERROR};

/// The top-level JSON object returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// "success" or "error"; not reliably populated by the service.
    #[serde(default)]
    pub status: Option<String>,

    /// Response payload.
    #[serde(default)]
    pub result: Option<Value>,

    /// Error message (when the envelope signals failure).
    #[serde(default)]
    pub message: Option<String>,

    /// API error code (when the envelope signals failure).
    #[serde(default)]
    pub error_code: Option<String>,

    /// Request id assigned by the API.
    #[serde(default)]
    pub request_id: Option<String>,

    /// HTTP status of the response; filled in by the client after parsing.
    #[serde(skip)]
    pub http_status: u16,
}

impl Envelope {
    /// Unwrap the `result` payload.
    ///
    /// Succeeds when the HTTP status was 2xx and `result` is present;
    /// otherwise produces an [`ApiFailure`] built from the envelope's
    /// error fields, falling back to a generic message when absent.
    pub fn into_result(self) -> core::result::Result<Value, ApiFailure> {
        let http_ok = (200..300).contains(&self.http_status);
        match self.result {
            Some(result) if http_ok => Ok(result),
            _ => Err(self.into_failure()),
        }
    }

    /// Check for success on operations that return no payload (DELETE).
    ///
    /// Succeeds when the HTTP status was 2xx and the envelope does not
    /// declare `status: "error"`.
    pub fn into_ack(self) -> core::result::Result<(), ApiFailure> {
        let http_ok = (200..300).contains(&self.http_status);
        let declared_error = self.status.as_deref() == Some("error");
        if http_ok && !declared_error {
            Ok(())
        } else {
            Err(self.into_failure())
        }
    }

    fn into_failure(self) -> ApiFailure {
        ApiFailure {
            message: self.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            error_code: self.error_code,
            request_id: self.request_id,
            http_status: Some(self.http_status),
            source: None,
        }
    }
}
