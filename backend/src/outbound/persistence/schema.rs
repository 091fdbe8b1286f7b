//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel
//! uses them for compile-time query validation. Regenerate with
//! `diesel print-schema` when migrations change.

diesel::table! {
    /// User identity records.
    ///
    /// A unique index on `lower(email)` enforces case-insensitive email
    /// uniqueness at write time.
    users (id) {
        /// Primary key, assigned by the `SERIAL` sequence.
        id -> Int4,
        /// Display name.
        #[max_length = 100]
        name -> Varchar,
        /// Email address, stored as submitted.
        #[max_length = 100]
        email -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
