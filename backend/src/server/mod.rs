//! Server construction and route wiring.

mod config;

pub use config::AppConfig;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use identity_service::ApiDoc;
use identity_service::inbound::http::health::{live, ready, HealthState};
use identity_service::inbound::http::json_error_handler;
use identity_service::inbound::http::state::HttpState;
use identity_service::inbound::http::users::{create_user, list_users};
use identity_service::Trace;

/// Assemble the Actix application: user endpoints under `/api`, health
/// probes at the root, Swagger UI in debug builds.
pub fn build_app(
    http_state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api").service(list_users).service(create_user);

    let app = App::new()
        .app_data(http_state)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
