//! Error types for Freelancer API operations.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Fallback message used when an error envelope carries no `message` field.
pub(crate) const UNKNOWN_ERROR: &str = "An unknown error has occurred.";

/// Failure details for a single API operation.
///
/// Carries the server-supplied `message`, `error_code`, and `request_id`
/// from the error envelope, plus the HTTP status and the underlying
/// transport or decode error when the request never produced a usable
/// envelope.
#[derive(Debug, Default)]
pub struct ApiFailure {
    /// Human-readable error message (server-supplied or fallback).
    pub message: String,
    /// API error code, e.g. `ExceptionCodes.UNKNOWN_ERROR`.
    pub error_code: Option<String>,
    /// Request id assigned by the API, for support escalation.
    pub request_id: Option<String>,
    /// HTTP status of the response, when one was received.
    pub http_status: Option<u16>,
    /// Underlying transport/decode error, when the failure was local.
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl ApiFailure {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    /// Failure caused by the HTTP layer (connection error, body read error).
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        Self {
            message: format!("request failed: {err}"),
            source: Some(Box::new(err)),
            ..Default::default()
        }
    }

    /// Failure caused by a response body that is not valid JSON.
    pub(crate) fn decode(err: serde_json::Error) -> Self {
        Self {
            message: "invalid API response".to_string(),
            source: Some(Box::new(err)),
            ..Default::default()
        }
    }

    /// Failure caused by an endpoint path that does not join onto the base URL.
    pub(crate) fn bad_url(err: url::ParseError) -> Self {
        Self {
            message: "invalid request URL".to_string(),
            source: Some(Box::new(err)),
            ..Default::default()
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for ApiFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Errors that can occur during Freelancer API operations.
///
/// Every resource operation fails with its own variant so callers can match
/// on the exact operation that went wrong; all variants except
/// [`ConfigMissing`](Self::ConfigMissing) wrap an [`ApiFailure`] with the
/// server's message, error code, and request id.
#[derive(Debug, Error)]
pub enum FreelancerError {
    /// Configuration is missing or incomplete.
    #[error("Freelancer configuration required: {0}")]
    ConfigMissing(String),

    // Project operations
    #[error("project could not be created: {0}")]
    ProjectNotCreated(#[source] ApiFailure),
    #[error("projects could not be retrieved: {0}")]
    ProjectsNotFound(#[source] ApiFailure),
    #[error("project could not be retrieved: {0}")]
    ProjectNotFound(#[source] ApiFailure),
    #[error("project could not be updated: {0}")]
    ProjectNotUpdated(#[source] ApiFailure),
    #[error("project could not be deleted: {0}")]
    ProjectNotDeleted(#[source] ApiFailure),
    #[error("jobs could not be retrieved: {0}")]
    JobsNotFound(#[source] ApiFailure),

    // Bid operations
    #[error("bid could not be placed: {0}")]
    BidNotPlaced(#[source] ApiFailure),
    #[error("bids could not be retrieved: {0}")]
    BidsNotFound(#[source] ApiFailure),
    #[error("bid could not be updated: {0}")]
    BidNotUpdated(#[source] ApiFailure),
    #[error("bid could not be retracted: {0}")]
    BidNotRetracted(#[source] ApiFailure),

    // Milestone operations
    #[error("milestone could not be created: {0}")]
    MilestoneNotCreated(#[source] ApiFailure),
    #[error("milestone request could not be created: {0}")]
    MilestoneRequestNotCreated(#[source] ApiFailure),
    #[error("milestone could not be released: {0}")]
    MilestoneNotReleased(#[source] ApiFailure),

    // Messaging operations
    #[error("thread could not be created: {0}")]
    ThreadNotCreated(#[source] ApiFailure),
    #[error("threads could not be retrieved: {0}")]
    ThreadsNotFound(#[source] ApiFailure),
    #[error("message could not be sent: {0}")]
    MessageNotSent(#[source] ApiFailure),
    #[error("messages could not be retrieved: {0}")]
    MessagesNotFound(#[source] ApiFailure),
    #[error("attachment could not be added: {0}")]
    AttachmentNotAdded(#[source] ApiFailure),

    // Contest operations
    #[error("contest could not be created: {0}")]
    ContestNotCreated(#[source] ApiFailure),

    // User operations
    #[error("user could not be retrieved: {0}")]
    UserNotFound(#[source] ApiFailure),
    #[error("users could not be retrieved: {0}")]
    UsersNotFound(#[source] ApiFailure),
}

impl FreelancerError {
    /// The failure details, for all operation variants.
    ///
    /// Returns `None` only for [`ConfigMissing`](Self::ConfigMissing).
    pub fn failure(&self) -> Option<&ApiFailure> {
        use FreelancerError::*;
        match self {
            ConfigMissing(_) => None,
            ProjectNotCreated(f)
            | ProjectsNotFound(f)
            | ProjectNotFound(f)
            | ProjectNotUpdated(f)
            | ProjectNotDeleted(f)
            | JobsNotFound(f)
            | BidNotPlaced(f)
            | BidsNotFound(f)
            | BidNotUpdated(f)
            | BidNotRetracted(f)
            | MilestoneNotCreated(f)
            | MilestoneRequestNotCreated(f)
            | MilestoneNotReleased(f)
            | ThreadNotCreated(f)
            | ThreadsNotFound(f)
            | MessageNotSent(f)
            | MessagesNotFound(f)
            | AttachmentNotAdded(f)
            | ContestNotCreated(f)
            | UserNotFound(f)
            | UsersNotFound(f) => Some(f),
        }
    }

    /// The human-readable error message from the API, if any.
    pub fn message(&self) -> Option<&str> {
        self.failure().map(|f| f.message.as_str())
    }

    /// The API error code, if the server supplied one.
    pub fn error_code(&self) -> Option<&str> {
        self.failure().and_then(|f| f.error_code.as_deref())
    }

    /// The API request id, if the server supplied one.
    pub fn request_id(&self) -> Option<&str> {
        self.failure().and_then(|f| f.request_id.as_deref())
    }
}

/// Result type alias for Freelancer API operations.
pub type Result<T> = core::result::Result<T, FreelancerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_expose_envelope_fields() {
        let err = FreelancerError::BidNotPlaced(ApiFailure {
            message: "An error has occurred.".to_string(),
            error_code: Some("ExceptionCodes.UNKNOWN_ERROR".to_string()),
            request_id: Some("3ab".to_string()),
            ..Default::default()
        });

        assert_eq!(err.message(), Some("An error has occurred."));
        assert_eq!(err.error_code(), Some("ExceptionCodes.UNKNOWN_ERROR"));
        assert_eq!(err.request_id(), Some("3ab"));
    }

    #[test]
    fn test_config_missing_has_no_failure() {
        let err = FreelancerError::ConfigMissing("token".to_string());
        assert!(err.failure().is_none());
        assert!(err.message().is_none());
    }

    #[test]
    fn test_decode_failure_preserves_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let failure = ApiFailure::decode(cause);
        assert_eq!(failure.message, "invalid API response");
        assert!(StdError::source(&failure).is_some());
    }

    #[test]
    fn test_display_includes_operation_and_message() {
        let err = FreelancerError::ProjectNotCreated(ApiFailure::new("budget too low"));
        assert_eq!(
            err.to_string(),
            "project could not be created: budget too low"
        );
    }
}
