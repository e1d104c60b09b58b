pub mod config;
pub mod extract;
pub mod llm;
pub mod sources;

pub use config::AppConfig;
pub use extract::DocumentExtractor;
pub use llm::GeminiLlm;
