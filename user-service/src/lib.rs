pub mod config;
pub mod db;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod utils;

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::middleware::{
    security_headers::security_headers_middleware, tracing::request_id_middleware,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::UserServiceConfig;
use crate::db::Database;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::health,
        handlers::health::health1,
        handlers::user::create_user,
        handlers::user::get_user,
    ),
    components(
        schemas(
            dtos::user::CreateUserRequest,
            dtos::ErrorResponse,
            models::SanitizedUser,
        )
    ),
    tags(
        (name = "Users", description = "User registration and lookup"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: UserServiceConfig,
    pub db: Database,
}

/// Assemble the service router.
///
/// Swagger UI is mounted in `Dev`; in `Prod` only the OpenAPI JSON is
/// served for programmatic access.
pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health1", get(handlers::health::health1))
        .route("/users", post(handlers::user::create_user))
        .route("/users/:user_id", get(handlers::user::get_user));

    app = match state.config.environment {
        config::Environment::Dev => {
            app.merge(SwaggerUi::new("/docs").url("/.well-known/openapi.json", ApiDoc::openapi()))
        }
        config::Environment::Prod => app.route(
            "/.well-known/openapi.json",
            get(|| async { axum::Json(ApiDoc::openapi()) }),
        ),
    };

    app.with_state(state)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
