//! Domain core: entities, validation, error taxonomy, and the user
//! orchestrator.
//!
//! Everything in this module is transport agnostic. Inbound adapters map
//! domain failures onto protocol envelopes; outbound adapters implement the
//! ports declared under [`ports`].

pub mod error;
pub mod ports;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::user::User;
pub use self::user_service::{UserOperations, UserService};
pub use self::validation::{ValidationError, ValidationErrors, ValidationPolicy, Validator};
