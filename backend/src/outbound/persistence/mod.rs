//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Thin adapters only: the repository translates between Diesel rows and
//! domain types and maps database failures onto the storage port's error
//! type. Row structs and schema definitions stay internal to this module.
//! Connections come from a `bb8` pool with native async support through
//! `diesel-async`.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
