use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the kind from a file name's extension, ignoring case.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("pdf") {
            Some(Self::Pdf)
        } else if ext.eq_ignore_ascii_case("docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        }
    }
}

/// A named binary blob awaiting extraction.
#[derive(Clone)]
pub struct SourceDocument {
    pub name: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            kind,
            bytes,
        }
    }

    /// Builds a document whose kind is inferred from `name`; `None` for
    /// unsupported extensions.
    pub fn from_named_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        let name = name.into();
        let kind = DocumentKind::from_file_name(&name)?;
        Some(Self::new(name, kind, bytes))
    }
}

impl std::fmt::Debug for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDocument")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// 1-based page number for PDF pages, `None` for paragraphs and cells.
    pub page: Option<usize>,
    pub text: String,
}

impl Fragment {
    pub fn page(page: usize, text: impl Into<String>) -> Self {
        Self {
            page: Some(page),
            text: text.into(),
        }
    }

    pub fn block(text: impl Into<String>) -> Self {
        Self {
            page: None,
            text: text.into(),
        }
    }

    fn render(&self) -> String {
        match self.page {
            Some(page) => format!("[Page {}]\n{}", page, self.text),
            None => self.text.clone(),
        }
    }
}

/// Ordered text fragments of one document. Whitespace-only fragments are
/// dropped on construction.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub source: String,
    pub kind: DocumentKind,
    fragments: Vec<Fragment>,
}

impl ExtractedText {
    pub fn new(source: impl Into<String>, kind: DocumentKind, fragments: Vec<Fragment>) -> Self {
        Self {
            source: source.into(),
            kind,
            fragments: fragments
                .into_iter()
                .filter(|f| !f.text.trim().is_empty())
                .collect(),
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn render(&self) -> String {
        self.fragments
            .iter()
            .map(Fragment::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
