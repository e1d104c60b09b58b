//! Document sources: uploaded files and the well-known data directory.

use std::path::Path;
use tracing::{info, warn};

use crate::domain::{DocumentKind, DomainError, SourceDocument};

/// Reads every `.pdf` / `.docx` file in `dir`, in directory listing order.
/// A missing directory yields no documents.
pub async fn scan_directory(dir: &Path) -> Result<Vec<SourceDocument>, DomainError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(dir = %dir.display(), "document directory not found");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(DomainError::internal(format!(
                "cannot read {}: {e}",
                dir.display()
            )))
        }
    };

    let mut documents = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DomainError::internal(e.to_string()))?
    {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(kind) = DocumentKind::from_file_name(name) else {
            continue;
        };
        if !entry.file_type().await.map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        match tokio::fs::read(&path).await {
            Ok(bytes) => documents.push(SourceDocument::new(name, kind, bytes)),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable document"),
        }
    }

    info!(dir = %dir.display(), count = documents.len(), "documents discovered");
    Ok(documents)
}
