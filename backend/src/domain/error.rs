//! Domain error taxonomy.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses; the closed [`ErrorCode`] enum forces the dispatch site to
//! handle every kind exhaustively, so adding a kind is a compile-time event.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::ValidationErrors;

/// Closed set of failure categories used to decide the caller-visible
/// outcome, independent of the underlying technical cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    BadRequest,
    /// The request conflicts with existing state, e.g. a duplicate email.
    Conflict,
    /// The requested resource does not exist. Reserved for lookup-by-id
    /// operations; part of the closed taxonomy for completeness.
    NotFound,
    /// A storage or otherwise unexpected failure.
    Internal,
}

type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Classified domain failure.
///
/// Carries an end-user message and, optionally, the wrapped lower-level
/// cause. The cause exists for diagnostics only and is never serialized to
/// callers. Validation failures additionally carry the full field-level
/// list so adapters can report every violation.
#[derive(Debug, Clone)]
pub struct Error {
    code: ErrorCode,
    message: String,
    validation: Option<ValidationErrors>,
    source: Option<Cause>,
}

impl Error {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            validation: None,
            source: None,
        }
    }

    /// Construct a [`ErrorCode::BadRequest`] error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Construct a [`ErrorCode::Conflict`] error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Construct a [`ErrorCode::NotFound`] error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Construct an [`ErrorCode::Internal`] error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    /// Wrap aggregated validation failures as a [`ErrorCode::BadRequest`]
    /// error carrying the full field-level list.
    pub fn validation(errors: ValidationErrors) -> Self {
        let mut error = Self::new(ErrorCode::BadRequest, "validation failed");
        error.validation = Some(errors);
        error
    }

    /// Attach the lower-level cause for diagnostics.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    /// Failure category.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// End-user message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field-level violations, present only for validation failures.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        self.validation.as_ref()
    }
}

// The wrapped cause is diagnostic-only, so equality ignores it.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.message == other.message
            && self.validation == other.validation
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn std::error::Error + 'static))
    }
}
