//! Identity service library modules.
//!
//! The crate follows a hexagonal layout: `domain` holds the
//! transport-agnostic core (validation, error taxonomy, user orchestrator),
//! `inbound` exposes the HTTP adapter, and `outbound` provides the
//! PostgreSQL persistence adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::trace::{Trace, TraceId};
