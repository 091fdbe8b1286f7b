//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! POST /api/users {"name":"Ada","email":"ada@example.com"}
//! ```

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Creation request body for `POST /api/users`.
///
/// Raw, untrusted input; the domain validator decides what is acceptable.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Requested display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    /// Requested email address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// List all users, ascending by id.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list_users().await?;
    Ok(web::Json(users))
}

/// Create a user from an untrusted name/email pair.
///
/// Validation failures report every offending field at once; a duplicate
/// email is a conflict whether caught by the pre-check or by the storage
/// layer's unique index.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already in use"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let CreateUserRequest { name, email } = payload.into_inner();
    let user = state.users.create_user(&name, &email).await?;
    Ok(HttpResponse::Created().json(user))
}
