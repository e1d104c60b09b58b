use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An image whose file stem is a label that may appear in replies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualAid {
    pub label: String,
    pub path: PathBuf,
}

impl VisualAid {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Candidate labels, in directory listing order.
#[derive(Debug, Clone, Default)]
pub struct VisualAidCatalog {
    entries: Vec<(String, VisualAid)>,
}

impl VisualAidCatalog {
    pub fn from_entries(aids: impl IntoIterator<Item = VisualAid>) -> Self {
        Self {
            entries: aids
                .into_iter()
                .filter(|aid| !aid.label.is_empty())
                .map(|aid| (aid.label.to_lowercase(), aid))
                .collect(),
        }
    }

    /// Lists the files in `dir`. A missing or unreadable directory yields an
    /// empty catalog.
    pub fn scan(dir: &Path) -> Self {
        let read_dir = match std::fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "no visual aid directory");
                return Self::default();
            }
        };

        let aids = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let label = path.file_stem()?.to_str()?.to_string();
                Some(VisualAid::new(label, path))
            });

        let catalog = Self::from_entries(aids);
        info!(dir = %dir.display(), count = catalog.len(), "visual aids loaded");
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First aid whose label occurs in `response`, ignoring case.
    pub fn find(&self, response: &str) -> Option<&VisualAid> {
        if self.entries.is_empty() {
            return None;
        }
        let haystack = response.to_lowercase();
        self.entries
            .iter()
            .find(|(label, _)| haystack.contains(label.as_str()))
            .map(|(_, aid)| aid)
    }
}
