use crate::domain::{errors::DomainError, ExtractedText, SourceDocument};

/// Converts one document into ordered text fragments.
///
/// Implementations are synchronous and CPU bound; callers run them on a
/// blocking thread.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &SourceDocument) -> Result<ExtractedText, DomainError>;
}
