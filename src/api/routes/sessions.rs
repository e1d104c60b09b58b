use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::api::{error::ApiError, state::AppState};
use crate::application::{LoadedDocument, SessionState, Workspace};
use crate::domain::{Language, Message, MessageId};

#[derive(Deserialize)]
pub struct CreateSessionQuery {
    pub language: Option<Language>,
}

#[derive(Deserialize)]
pub struct LanguageRequest {
    pub language: Language,
}

#[derive(Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub language: Language,
    pub state: SessionState,
    pub documents: Vec<LoadedDocument>,
    pub content_length: Option<usize>,
    pub transcript: Vec<Message>,
}

impl From<&Workspace> for SessionView {
    fn from(workspace: &Workspace) -> Self {
        Self {
            id: workspace.id(),
            language: workspace.language(),
            state: workspace.state(),
            documents: workspace.documents().to_vec(),
            content_length: workspace.grounding().map(|g| g.char_count()),
            transcript: workspace.transcript().messages().to_vec(),
        }
    }
}

#[derive(Serialize)]
pub struct LanguageResponse {
    pub language: Language,
    pub reset: bool,
}

#[derive(Serialize)]
pub struct ResetResponse {
    pub message: String,
}

pub async fn create_session(
    State(state): State<AppState>,
    Query(query): Query<CreateSessionQuery>,
) -> (StatusCode, Json<SessionView>) {
    let language = query.language.unwrap_or(state.config.default_language);
    let (_, workspace) = state.workspaces.create(language).await;
    let view = SessionView::from(&*workspace.lock().await);
    (StatusCode::CREATED, Json(view))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let workspace = state
        .workspaces
        .acquire(id)
        .await
        .map_err(|e| state.reject(&e))?;
    Ok(Json(SessionView::from(&*workspace)))
}

pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .workspaces
        .remove(id)
        .await
        .map_err(|e| state.reject(&e))?;
    info!(workspace = %id, "workspace deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Switching language discards the chat session and transcript.
pub async fn set_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<LanguageRequest>,
) -> Result<Json<LanguageResponse>, ApiError> {
    let mut workspace = state
        .workspaces
        .acquire(id)
        .await
        .map_err(|e| state.reject(&e))?;
    let reset = workspace.set_language(request.language);
    if reset {
        info!(workspace = %id, language = request.language.code(), "language changed");
    }
    Ok(Json(LanguageResponse {
        language: workspace.language(),
        reset,
    }))
}

pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResetResponse>, ApiError> {
    let mut workspace = state
        .workspaces
        .acquire(id)
        .await
        .map_err(|e| state.reject(&e))?;
    workspace.reset();
    Ok(Json(ResetResponse {
        message: state
            .locales
            .text(MessageId::ResetDone, workspace.language())
            .to_string(),
    }))
}
