//! Route registration for the calculator API.

use axum::Json;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::rest::dto::{ErrorResponse, OperationRequest, OperationResponse};
use crate::api::rest::handlers;
use crate::bootstrap::config::ApiConfig;
use crate::domain::CalcService;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "A minimal calculator web service: four arithmetic operations over JSON."
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::health,
    ),
    components(schemas(OperationRequest, OperationResponse, ErrorResponse)),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "system", description = "Liveness and diagnostics"),
    )
)]
struct ApiDoc;

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the application router.
///
/// The domain service is passed in explicitly and carried as axum state; there
/// are no process-wide singletons.
pub fn router(service: CalcService, config: &ApiConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/add", post(handlers::add))
        .route("/subtract", post(handlers::subtract))
        .route("/multiply", post(handlers::multiply))
        .route("/divide", post(handlers::divide))
        .with_state(service);

    if config.enable_docs {
        router = router.route("/api-docs/openapi.json", get(openapi_spec));
    }
    if config.cors_enabled {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http())
}
