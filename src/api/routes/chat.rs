use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

use crate::api::{error::ApiError, state::AppState};
use crate::application::ReplyEvent;
use crate::domain::MessageId;

const EVENT_BUFFER: usize = 64;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Streams the reply as server-sent events: `partial` events carry the text
/// so far with a typing marker, followed by one `done` or `error` event.
/// A blank message is ignored with `204 No Content`.
pub async fn chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, ApiError> {
    if request.message.trim().is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let mut workspace = state
        .workspaces
        .acquire(id)
        .await
        .map_err(|e| state.reject(&e))?;
    let lang = workspace.language();
    if workspace.grounding().is_none() {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "no_content",
            state.locales.text(MessageId::CannotStart, lang),
        ));
    }
    // Seeding failures surface as a plain error response, before any stream.
    state
        .sessions
        .start(&mut workspace)
        .map_err(|e| ApiError::from_domain(&state.locales, lang, &e))?;

    let (tx, rx) = mpsc::channel(EVENT_BUFFER);
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut workspace = workspace;
        if let Err(e) = sessions.ask(&mut workspace, &request.message, Some(&tx)).await {
            debug!(error = %e, "reply ended with failure event");
        }
    });

    let events = futures::stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|event| (event, rx))
    })
    .map(|event: ReplyEvent| Event::default().event(event.name()).json_data(&event));

    Ok(Sse::new(events)
        .keep_alive(KeepAlive::default())
        .into_response())
}
