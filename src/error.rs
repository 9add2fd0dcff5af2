//! Service-wide error type and its HTTP response mapping.
//!
//! Failures fall into two categories: business errors are caused by the
//! caller (invalid input, missing data, empty results) and map to 4xx or 204
//! responses; technical errors are unexpected internal failures and map to
//! 500. Every error is logged when it is created, so the HTTP boundary only
//! has to translate it into a response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Convenience alias for results produced by the service layers.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Coarse classification of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller-caused errors.
    Business,
    /// Unexpected internal errors.
    Technical,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Business => write!(f, "BUSINESS"),
            ErrorCategory::Technical => write!(f, "TECHNICAL"),
        }
    }
}

/// The specific error codes known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A caller-provided value failed validation or conflicts with stored data.
    InvalidArgument,
    /// A requested entity does not exist.
    NotFound,
    /// An entity with the same identity already exists.
    AlreadyExisting,
    /// A queried collection contains no elements.
    EmptyCollection,
    /// An unexpected internal failure.
    Internal,
}

impl ErrorKind {
    /// The category this kind belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::InvalidArgument
            | ErrorKind::NotFound
            | ErrorKind::AlreadyExisting
            | ErrorKind::EmptyCollection => ErrorCategory::Business,
            ErrorKind::Internal => ErrorCategory::Technical,
        }
    }

    /// Human readable description of this kind.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "Invalid Argument Error",
            ErrorKind::NotFound => "Not Found Error",
            ErrorKind::AlreadyExisting => "Already Existing Error",
            ErrorKind::EmptyCollection => "Empty Collection Error",
            ErrorKind::Internal => "Internal Error",
        }
    }
}

/// An error carrying its code and a human readable message.
///
/// Construct through the per-kind constructors ([`ServiceError::invalid_argument`]
/// and friends), which log the error once at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{}] {}: {}", .kind.category(), .kind.description(), .message)]
pub struct ServiceError {
    kind: ErrorKind,
    message: String,
}

impl ServiceError {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let err = Self {
            kind,
            message: message.into(),
        };
        error!("{err}");
        err
    }

    /// A caller-provided value failed validation or conflicts with stored data.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// A requested entity does not exist.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// An entity with the same identity already exists.
    pub fn already_existing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExisting, message)
    }

    /// A queried collection contains no elements.
    pub fn empty_collection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyCollection, message)
    }

    /// An unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the plain message without category and description prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self.kind {
            ErrorKind::EmptyCollection => StatusCode::NO_CONTENT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidArgument | ErrorKind::AlreadyExisting => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::NO_CONTENT {
            // 204 must not carry a body
            return status.into_response();
        }
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Category Tests ====================

    #[test]
    fn test_business_kinds_have_business_category() {
        assert_eq!(ErrorKind::InvalidArgument.category(), ErrorCategory::Business);
        assert_eq!(ErrorKind::NotFound.category(), ErrorCategory::Business);
        assert_eq!(ErrorKind::AlreadyExisting.category(), ErrorCategory::Business);
        assert_eq!(ErrorKind::EmptyCollection.category(), ErrorCategory::Business);
    }

    #[test]
    fn test_internal_kind_has_technical_category() {
        assert_eq!(ErrorKind::Internal.category(), ErrorCategory::Technical);
    }

    // ==================== Display Tests ====================

    #[test]
    fn test_display_contains_category_description_and_message() {
        let err = ServiceError::not_found("Language with short name xyz is not existing");
        assert_eq!(
            err.to_string(),
            "[BUSINESS] Not Found Error: Language with short name xyz is not existing"
        );
    }

    #[test]
    fn test_display_technical_error() {
        let err = ServiceError::internal("storage unavailable");
        assert_eq!(err.to_string(), "[TECHNICAL] Internal Error: storage unavailable");
    }

    #[test]
    fn test_message_accessor_has_no_prefix() {
        let err = ServiceError::invalid_argument("bad input");
        assert_eq!(err.message(), "bad input");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    // ==================== Status Mapping Tests ====================

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServiceError::empty_collection("nothing").status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(ServiceError::not_found("missing").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::invalid_argument("bad").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::already_existing("dup").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_keeps_status() {
        let response = ServiceError::not_found("missing").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_empty_collection_has_no_content_status() {
        let response = ServiceError::empty_collection("nothing").into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
