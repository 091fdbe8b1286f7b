//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API: the
//! user endpoints, the health probes, and their request/response schemas.
//! Swagger UI serves the document at `/docs` in debug builds.

use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Identity service API",
        description = "HTTP interface for listing and creating user identity records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::User,
        crate::domain::ErrorCode,
        crate::inbound::http::users::CreateUserRequest,
    )),
    tags(
        (name = "users", description = "User identity records"),
        (name = "health", description = "Orchestration probes"),
    )
)]
pub struct ApiDoc;
