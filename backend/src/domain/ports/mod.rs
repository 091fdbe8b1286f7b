//! Ports consumed by the domain core and implemented by adapters.

pub mod user_repository;

pub use user_repository::{UserRepository, UserRepositoryError};
