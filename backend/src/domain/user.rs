//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored user identity record.
///
/// ## Invariants
/// - `id` is assigned by the store and never changes once assigned.
/// - No two stored users share an email when compared case-insensitively.
///   The storage layer enforces this with a unique index; the orchestrator's
///   pre-check only provides a friendlier failure in the common case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, positive and immutable.
    #[schema(example = 1)]
    pub id: i32,
    /// Display name, non-empty and bounded in length.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Unique email address, compared case-insensitively.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl User {
    /// Build a user record from its parts.
    pub fn new(id: i32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}
