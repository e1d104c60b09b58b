//! Text extraction for the supported document formats.

mod docx;
mod pdf;

use tracing::instrument;

use crate::domain::{ports::TextExtractor, DocumentKind, DomainError, ExtractedText, SourceDocument};

/// Dispatches to the PDF or DOCX extractor by document kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocumentExtractor {
    #[instrument(skip(self, document), fields(name = %document.name, kind = document.kind.as_str()))]
    fn extract(&self, document: &SourceDocument) -> Result<ExtractedText, DomainError> {
        match document.kind {
            DocumentKind::Pdf => pdf::extract(&document.name, &document.bytes),
            DocumentKind::Docx => docx::extract(&document.name, &document.bytes),
        }
    }
}
