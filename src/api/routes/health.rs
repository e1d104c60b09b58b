use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub model: String,
    pub data_dir: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// The model credentials are validated at startup, so a running server is
/// ready. The data directory is reported for operators; a missing one only
/// means scans return nothing.
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let data_dir = &state.config.documents.data_dir;
    let data_dir_status = if tokio::fs::metadata(data_dir).await.is_ok_and(|m| m.is_dir()) {
        "present"
    } else {
        "missing"
    };

    Json(ReadinessResponse {
        status: "ready".into(),
        model: state.config.llm.model.clone(),
        data_dir: data_dir_status.into(),
    })
}
