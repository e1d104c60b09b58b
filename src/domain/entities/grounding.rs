use sha2::{Digest, Sha256};

pub const SECTION_SEPARATOR: &str = "\n\n--- End of Document Section ---\n\n";

/// Aggregated document text handed to the model. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundingContext {
    text: String,
    fingerprint: String,
}

impl GroundingContext {
    fn new(text: String) -> Self {
        let fingerprint = hex::encode(Sha256::digest(text.as_bytes()));
        Self { text, fingerprint }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Hex SHA-256 of the text; identifies the document set a session was
    /// seeded with.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Cuts the context to at most `max_chars` characters. Returns `None`
    /// when nothing usable remains.
    pub fn truncated(self, max_chars: usize) -> Option<Self> {
        match self.text.char_indices().nth(max_chars) {
            None => Some(self),
            Some((idx, _)) => {
                let text = &self.text[..idx];
                if text.trim().is_empty() {
                    None
                } else {
                    Some(Self::new(text.to_string()))
                }
            }
        }
    }
}

/// Joins the non-blank texts in order with [`SECTION_SEPARATOR`]. `None` is
/// the "no usable content" signal.
pub fn aggregate<I, S>(texts: I) -> Option<GroundingContext>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let sections: Vec<S> = texts
        .into_iter()
        .flatten()
        .filter(|t| !t.as_ref().trim().is_empty())
        .collect();

    let joined = sections
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(SECTION_SEPARATOR);

    if joined.trim().is_empty() {
        None
    } else {
        Some(GroundingContext::new(joined))
    }
}
