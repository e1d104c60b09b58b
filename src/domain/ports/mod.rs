mod extractor;
mod llm;

pub use extractor::TextExtractor;
pub use llm::{ChatHandle, LlmService, TextStream};
