use axum::{
    routing::{get, MethodRouter},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Message, WELCOME};

use crate::openapi::ApiDoc;

pub mod patients;
pub mod doctors;
pub mod treatments;
pub mod appointments;

/// Shared handler state: the storage client every operation runs against.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message")))]
pub async fn root() -> Json<Message> {
    Json(Message::new(WELCOME))
}

/// Register `path` both with and without a trailing slash.
pub(crate) fn route_both<S>(router: Router<S>, path: &str, method_router: MethodRouter<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let trimmed = path.trim_end_matches('/');
    router
        .route(trimmed, method_router.clone())
        .route(&format!("{trimmed}/"), method_router)
}

/// Build the full application router: entity CRUD, health, and API docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    public
        .merge(patients::router())
        .merge(doctors::router())
        .merge(treatments::router())
        .merge(appointments::router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
