use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tokio::sync::OwnedMutexGuard;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::api::{error::ApiError, state::AppState};
use crate::application::{LoadedDocument, Notice, Workspace};
use crate::domain::{DomainError, MessageId, SourceDocument};
use crate::infrastructure::sources;

#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub documents: Vec<LoadedDocument>,
    pub content_length: usize,
    pub chat_ready: bool,
    pub notices: Vec<Notice>,
}

/// Accepts any number of file parts. Parts without a file name are ignored.
#[instrument(skip(state, multipart))]
pub async fn upload_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<IngestResponse>, ApiError> {
    let workspace = state
        .workspaces
        .acquire(id)
        .await
        .map_err(|e| state.reject(&e))?;
    let lang = workspace.language();

    let mut documents = Vec::new();
    let mut notices = Vec::new();
    loop {
        let field = multipart.next_field().await.map_err(|e| {
            ApiError::from_domain(&state.locales, lang, &DomainError::validation(e.body_text()))
        })?;
        let Some(field) = field else { break };
        let Some(name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field.bytes().await.map_err(|e| {
            ApiError::from_domain(&state.locales, lang, &DomainError::validation(e.body_text()))
        })?;

        match SourceDocument::from_named_bytes(&name, bytes.to_vec()) {
            Some(doc) => documents.push(doc),
            None => notices.push(Notice::warning(state.locales.format(
                MessageId::UnsupportedFile,
                lang,
                &[("name", &name)],
            ))),
        }
    }

    load(&state, workspace, documents, notices).await
}

/// Loads every supported file from the configured data directory.
#[instrument(skip(state))]
pub async fn scan_documents(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<IngestResponse>, ApiError> {
    let workspace = state
        .workspaces
        .acquire(id)
        .await
        .map_err(|e| state.reject(&e))?;
    let documents = sources::scan_directory(&state.config.documents.data_dir)
        .await
        .map_err(|e| ApiError::from_domain(&state.locales, workspace.language(), &e))?;

    load(&state, workspace, documents, Vec::new()).await
}

async fn load(
    state: &AppState,
    mut workspace: OwnedMutexGuard<Workspace>,
    documents: Vec<SourceDocument>,
    mut notices: Vec<Notice>,
) -> Result<Json<IngestResponse>, ApiError> {
    let lang = workspace.language();
    if documents.is_empty() {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "no_documents",
            state.locales.text(MessageId::UploadPrompt, lang),
        )
        .with_notices(notices));
    }

    let report = state
        .documents
        .ingest(documents, lang)
        .await
        .map_err(|e| ApiError::from_domain(&state.locales, lang, &e))?;
    notices.extend(report.notices);

    let Some(context) = report.context else {
        workspace.set_documents(Vec::new(), None);
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "no_content",
            state.locales.text(MessageId::ProcessingFailed, lang),
        )
        .with_notices(notices));
    };

    let content_length = context.char_count();
    notices.push(Notice::info(
        state.locales.text(MessageId::ProcessingSucceeded, lang),
    ));
    for doc in &report.documents {
        notices.push(Notice::info(state.locales.format(
            MessageId::FileEntry,
            lang,
            &[("kind", &doc.kind.as_str()), ("name", &doc.name)],
        )));
    }

    let changed = workspace.set_documents(report.documents.clone(), Some(context));
    info!(
        workspace = %workspace.id(),
        documents = report.documents.len(),
        content_length,
        changed,
        "documents loaded"
    );

    let chat_ready = match state.sessions.start(&mut workspace) {
        Ok(ready) => {
            notices.extend(ready);
            true
        }
        Err(e) => {
            notices.push(Notice::error(state.locales.describe(&e, lang)));
            false
        }
    };

    Ok(Json(IngestResponse {
        documents: report.documents,
        content_length,
        chat_ready,
        notices,
    }))
}
