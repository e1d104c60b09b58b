use std::env;
use std::path::PathBuf;

use crate::application::services::DEFAULT_MAX_CONTEXT_CHARS;
use crate::domain::{DomainError, Language};

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    pub documents: DocumentsConfig,
    pub default_language: Language,
}

#[derive(Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
}

impl std::fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DocumentsConfig {
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub max_context_chars: usize,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm: LlmConfig {
                api_key: String::new(),
                model: "gemini-1.5-pro".to_string(),
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                allowed_origins: Vec::new(),
            },
            documents: DocumentsConfig {
                data_dir: PathBuf::from("data_files"),
                assets_dir: PathBuf::from("meta_images"),
                max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            default_language: Language::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` and reads the process environment.
    pub fn from_env() -> Result<Self, DomainError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source. The API key is
    /// the only required value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                DomainError::config(format!(
                    "Please set the {API_KEY_VAR} environment variable."
                ))
            })?;

        let port = match lookup("SERVER_PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| DomainError::config(format!("invalid SERVER_PORT: {e}")))?,
            None => defaults.server.port,
        };

        let max_context_chars = match lookup("MAX_CONTEXT_CHARS") {
            Some(max) => max
                .parse()
                .map_err(|e| DomainError::config(format!("invalid MAX_CONTEXT_CHARS: {e}")))?,
            None => defaults.documents.max_context_chars,
        };

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(max) => max
                .parse()
                .map_err(|e| DomainError::config(format!("invalid MAX_UPLOAD_BYTES: {e}")))?,
            None => defaults.documents.max_upload_bytes,
        };

        let default_language = match lookup("DEFAULT_LANGUAGE") {
            Some(lang) => lang
                .parse()
                .map_err(|e: DomainError| DomainError::config(e.to_string()))?,
            None => defaults.default_language,
        };

        Ok(Self {
            llm: LlmConfig {
                api_key,
                model: lookup("GEMINI_MODEL").unwrap_or(defaults.llm.model),
            },
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port,
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            documents: DocumentsConfig {
                data_dir: lookup("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.documents.data_dir),
                assets_dir: lookup("ASSETS_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.documents.assets_dir),
                max_context_chars,
                max_upload_bytes,
            },
            default_language,
        })
    }
}
