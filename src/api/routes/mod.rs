pub mod chat;
pub mod documents;
pub mod health;
pub mod sessions;
pub mod ui;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::{middleware::request_logger, state::AppState};

pub fn create_router(state: AppState) -> Router {
    let cors = build_cors(&state.config.server.allowed_origins);
    let assets = ServeDir::new(&state.config.documents.assets_dir);
    let body_limit = DefaultBodyLimit::max(state.config.documents.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api/v1", api_v1_routes().layer(body_limit))
        .nest_service("/assets", assets)
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/ui", get(ui::ui_strings))
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/{id}",
            get(sessions::get_session).delete(sessions::delete_session),
        )
        .route("/sessions/{id}/language", put(sessions::set_language))
        .route("/sessions/{id}/reset", post(sessions::reset_session))
        .route("/sessions/{id}/documents", post(documents::upload_documents))
        .route("/sessions/{id}/documents/scan", post(documents::scan_documents))
        .route("/sessions/{id}/chat", post(chat::chat))
}
