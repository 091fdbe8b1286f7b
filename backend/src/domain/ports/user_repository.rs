//! Storage port abstracting user persistence.

use async_trait::async_trait;

use crate::domain::User;

/// Failures surfaced by user storage adapters.
///
/// `UniqueViolation` is kept distinct from other query failures so the
/// orchestrator can report a store-level duplicate as a conflict rather
/// than an internal fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Storage connection could not be established or was lost.
    #[error("user storage connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("user storage query failed: {message}")]
    Query { message: String },

    /// The store rejected a write because of its uniqueness constraint.
    #[error("user storage unique constraint violated: {message}")]
    UniqueViolation { message: String },
}

impl UserRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a unique-constraint violation error with the given message.
    pub fn unique_violation(message: impl Into<String>) -> Self {
        Self::UniqueViolation {
            message: message.into(),
        }
    }
}

/// Persistence operations the user orchestrator depends on.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All stored users, ascending by id.
    async fn list_all(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Insert a new record; the store assigns the id.
    async fn insert(&self, name: &str, email: &str) -> Result<User, UserRepositoryError>;

    /// Whether a user with this email exists, compared case-insensitively.
    async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError>;
}
