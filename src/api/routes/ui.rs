use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::api::state::AppState;
use crate::domain::{Language, MessageId};

/// Labels a client needs to render the interface.
const UI_MESSAGES: &[MessageId] = &[
    MessageId::AppTitle,
    MessageId::AppSubtitle,
    MessageId::LanguageSelector,
    MessageId::AboutHeader,
    MessageId::AboutBody,
    MessageId::TipsHeader,
    MessageId::TipsBody,
    MessageId::PdfUploadLabel,
    MessageId::DocxUploadLabel,
    MessageId::ChatPlaceholder,
    MessageId::ResetButton,
    MessageId::UploadPrompt,
    MessageId::Processing,
    MessageId::DetailsLabel,
];

#[derive(Deserialize)]
pub struct UiQuery {
    pub language: Option<Language>,
}

#[derive(Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Serialize)]
pub struct UiResponse {
    pub language: Language,
    pub languages: Vec<LanguageOption>,
    pub strings: BTreeMap<&'static str, String>,
}

pub async fn ui_strings(
    State(state): State<AppState>,
    Query(query): Query<UiQuery>,
) -> Json<UiResponse> {
    let language = query.language.unwrap_or(state.config.default_language);

    let strings = UI_MESSAGES
        .iter()
        .map(|id| (id.key(), state.locales.text(*id, language).to_string()))
        .collect();

    Json(UiResponse {
        language,
        languages: Language::ALL
            .iter()
            .map(|lang| LanguageOption {
                code: lang.code(),
                name: lang.display_name(),
            })
            .collect(),
        strings,
    })
}
