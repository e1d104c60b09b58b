//! Localization table keyed by (message id, language).
//!
//! Strings are loaded from `config/locales.yaml`, which is embedded in the
//! binary. Every message id must carry a translation for every [`Language`].

use std::collections::HashMap;
use std::fmt::Display;

use crate::domain::{DomainError, Language, Result};

macro_rules! message_ids {
    ($($variant:ident => $key:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageId {
            $($variant,)+
        }

        impl MessageId {
            pub const ALL: &'static [MessageId] = &[$(MessageId::$variant,)+];

            pub fn key(&self) -> &'static str {
                match self {
                    $(MessageId::$variant => $key,)+
                }
            }
        }
    };
}

message_ids! {
    AppTitle => "app_title",
    AppSubtitle => "app_subtitle",
    LanguageSelector => "language_selector",
    AboutHeader => "about_header",
    AboutBody => "about_body",
    TipsHeader => "tips_header",
    TipsBody => "tips_body",
    PdfUploadLabel => "pdf_upload_label",
    DocxUploadLabel => "docx_upload_label",
    ChatPlaceholder => "chat_placeholder",
    ResetButton => "reset_button",
    ResetDone => "reset_done",
    UploadPrompt => "upload_prompt",
    Processing => "processing",
    DetailsLabel => "details_label",
    ProcessingSucceeded => "processing_succeeded",
    TotalLength => "total_length",
    FileEntry => "file_entry",
    ExtractingFile => "extracting_file",
    PdfExtracted => "pdf_extracted",
    DocxExtracted => "docx_extracted",
    ExtractionFailed => "extraction_failed",
    UnsupportedFile => "unsupported_file",
    NoContentExtracted => "no_content_extracted",
    ProcessingFailed => "processing_failed",
    CannotStart => "cannot_start",
    ChatbotReady => "chatbot_ready",
    DocumentLength => "document_length",
    SystemInstruction => "system_instruction",
    DocumentMessage => "document_message",
    SeedAckRole => "seed_ack_role",
    SeedAckDocument => "seed_ack_document",
    NotAvailable => "not_available",
    GenerationError => "generation_error",
    ModelInitError => "model_init_error",
    SessionBusy => "session_busy",
    SessionNotFound => "session_not_found",
    InvalidRequest => "invalid_request",
    InternalError => "internal_error",
}

const EMBEDDED_LOCALES: &str = include_str!("../../config/locales.yaml");

#[derive(Debug, Clone)]
pub struct Localizer {
    table: HashMap<(MessageId, Language), String>,
}

impl Localizer {
    pub fn embedded() -> Result<Self> {
        Self::from_yaml(EMBEDDED_LOCALES)
    }

    pub fn from_yaml(source: &str) -> Result<Self> {
        let mut raw: HashMap<String, HashMap<String, String>> = serde_yaml::from_str(source)
            .map_err(|e| DomainError::config(format!("invalid locale table: {e}")))?;

        let mut table = HashMap::with_capacity(MessageId::ALL.len() * Language::ALL.len());
        for id in MessageId::ALL {
            let mut entry = raw
                .remove(id.key())
                .ok_or_else(|| DomainError::config(format!("missing locale entry: {}", id.key())))?;
            for lang in Language::ALL {
                let text = entry.remove(lang.code()).ok_or_else(|| {
                    DomainError::config(format!(
                        "missing locale entry: {}.{}",
                        id.key(),
                        lang.code()
                    ))
                })?;
                table.insert((*id, lang), text);
            }
        }

        if let Some(unknown) = raw.keys().next() {
            return Err(DomainError::config(format!(
                "unknown locale entry: {unknown}"
            )));
        }

        Ok(Self { table })
    }

    pub fn text(&self, id: MessageId, lang: Language) -> &str {
        self.table
            .get(&(id, lang))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Looks up `id` and substitutes each `{name}` placeholder.
    pub fn format(&self, id: MessageId, lang: Language, args: &[(&str, &dyn Display)]) -> String {
        args.iter()
            .fold(self.text(id, lang).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), &value.to_string())
            })
    }

    /// User-facing rendering of an error in the active language.
    pub fn describe(&self, err: &DomainError, lang: Language) -> String {
        match err {
            DomainError::Extraction { name, reason } => self.format(
                MessageId::ExtractionFailed,
                lang,
                &[("name", name), ("error", reason)],
            ),
            DomainError::NoContent => self.text(MessageId::ProcessingFailed, lang).to_string(),
            DomainError::ModelInit(e) => {
                self.format(MessageId::ModelInitError, lang, &[("error", e)])
            }
            DomainError::Stream(e) => {
                self.format(MessageId::GenerationError, lang, &[("error", e)])
            }
            DomainError::NotFound(e) => {
                self.format(MessageId::SessionNotFound, lang, &[("error", e)])
            }
            DomainError::Validation(e) => {
                self.format(MessageId::InvalidRequest, lang, &[("error", e)])
            }
            DomainError::Busy => self.text(MessageId::SessionBusy, lang).to_string(),
            DomainError::Config(e) | DomainError::Internal(e) => {
                self.format(MessageId::InternalError, lang, &[("error", e)])
            }
        }
    }
}
