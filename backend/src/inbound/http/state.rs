//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain's driving port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserOperations;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User listing and creation operations.
    pub users: Arc<dyn UserOperations>,
}

impl HttpState {
    /// Construct state over the given user operations port.
    pub fn new(users: Arc<dyn UserOperations>) -> Self {
        Self { users }
    }
}
