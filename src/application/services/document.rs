use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::application::Notice;
use crate::domain::{
    aggregate, ports::TextExtractor, DocumentKind, DomainError, ExtractedText, GroundingContext,
    Language, Localizer, MessageId, SourceDocument,
};

pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 2_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedDocument {
    pub name: String,
    pub kind: DocumentKind,
}

/// Outcome of one ingestion batch. `context` is `None` when nothing usable
/// was extracted.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub context: Option<GroundingContext>,
    pub documents: Vec<LoadedDocument>,
    pub notices: Vec<Notice>,
}

pub struct DocumentService {
    extractor: Arc<dyn TextExtractor>,
    locales: Arc<Localizer>,
    max_context_chars: usize,
}

impl DocumentService {
    pub fn new(extractor: Arc<dyn TextExtractor>, locales: Arc<Localizer>) -> Self {
        Self {
            extractor,
            locales,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }

    pub fn with_max_context_chars(mut self, max_context_chars: usize) -> Self {
        self.max_context_chars = max_context_chars;
        self
    }

    /// Extracts every document and aggregates the results. PDFs come before
    /// DOCX files; within a kind the input order is kept. A failing document
    /// is reported and skipped.
    #[instrument(skip(self, documents), fields(count = documents.len()))]
    pub async fn ingest(
        &self,
        mut documents: Vec<SourceDocument>,
        lang: Language,
    ) -> Result<IngestReport, DomainError> {
        documents.sort_by_key(|d| d.kind);

        let extractor = self.extractor.clone();
        let results = tokio::task::spawn_blocking(move || {
            documents
                .into_iter()
                .map(|doc| {
                    let result = extractor.extract(&doc);
                    (LoadedDocument { name: doc.name, kind: doc.kind }, result)
                })
                .collect::<Vec<_>>()
        })
        .await
        .map_err(|e| DomainError::internal(format!("extraction task failed: {e}")))?;

        let mut notices = Vec::new();
        let mut loaded = Vec::new();
        let mut texts = Vec::with_capacity(results.len());

        for (doc, result) in results {
            notices.push(Notice::info(self.locales.format(
                MessageId::ExtractingFile,
                lang,
                &[("kind", &doc.kind.as_str()), ("name", &doc.name)],
            )));

            match result {
                Ok(text) => {
                    notices.push(Notice::info(self.extracted_notice(&text, lang)));
                    texts.push(Some(text.render()));
                    loaded.push(doc);
                }
                Err(e) => {
                    warn!(document = %doc.name, error = %e, "extraction failed");
                    notices.push(Notice::error(self.locales.describe(&e, lang)));
                    texts.push(None);
                }
            }
        }

        let context = aggregate(texts).and_then(|ctx| self.bound(ctx));
        match &context {
            Some(ctx) => {
                info!(
                    chars = ctx.char_count(),
                    fingerprint = %ctx.fingerprint(),
                    "grounding context assembled"
                );
                notices.push(Notice::info(self.locales.format(
                    MessageId::TotalLength,
                    lang,
                    &[("count", &ctx.char_count())],
                )));
            }
            None => {
                warn!("no content extracted from documents");
                notices.push(Notice::warning(
                    self.locales.text(MessageId::NoContentExtracted, lang),
                ));
            }
        }

        Ok(IngestReport {
            context,
            documents: loaded,
            notices,
        })
    }

    fn extracted_notice(&self, text: &ExtractedText, lang: Language) -> String {
        let id = match text.kind {
            DocumentKind::Pdf => MessageId::PdfExtracted,
            DocumentKind::Docx => MessageId::DocxExtracted,
        };
        self.locales
            .format(id, lang, &[("count", &text.len()), ("name", &text.source)])
    }

    fn bound(&self, ctx: GroundingContext) -> Option<GroundingContext> {
        let chars = ctx.char_count();
        if chars <= self.max_context_chars {
            return Some(ctx);
        }
        warn!(
            chars,
            limit = self.max_context_chars,
            "grounding context exceeds limit, truncating"
        );
        ctx.truncated(self.max_context_chars)
    }
}
