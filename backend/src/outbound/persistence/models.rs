//! Diesel row models internal to the persistence layer.

use diesel::prelude::*;

use crate::domain::User;

use super::schema::users;

/// Row read back from the `users` table.
///
/// `created_at` is an audit column; the API surface omits it, so it is not
/// selected here.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Insertable row for a new user; the database assigns `id` and
/// `created_at`.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
        }
    }
}
