use lopdf::Document;
use tracing::debug;

use crate::domain::{DocumentKind, DomainError, ExtractedText, Fragment};

/// Extracts text page by page. Pages without extractable text are skipped;
/// only an unreadable document is an error.
pub fn extract(name: &str, bytes: &[u8]) -> Result<ExtractedText, DomainError> {
    let document = Document::load_mem(bytes).map_err(|e| DomainError::extraction(name, e))?;

    let fragments = document
        .get_pages()
        .into_keys()
        .filter_map(|number| match document.extract_text(&[number]) {
            Ok(text) => Some(Fragment::page(number as usize, text)),
            Err(e) => {
                debug!(document = name, page = number, error = %e, "page has no extractable text");
                None
            }
        })
        .collect();

    Ok(ExtractedText::new(name, DocumentKind::Pdf, fragments))
}
