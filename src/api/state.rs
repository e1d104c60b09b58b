use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::application::{DocumentService, SessionManager, Workspace};
use crate::domain::{DomainError, Language, Localizer};
use crate::infrastructure::AppConfig;

pub type SharedWorkspace = Arc<Mutex<Workspace>>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub locales: Arc<Localizer>,
    pub documents: Arc<DocumentService>,
    pub sessions: Arc<SessionManager>,
    pub workspaces: WorkspaceRegistry,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        locales: Arc<Localizer>,
        documents: Arc<DocumentService>,
        sessions: Arc<SessionManager>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            locales,
            documents,
            sessions,
            workspaces: WorkspaceRegistry::default(),
        }
    }

    /// Maps an error raised before a workspace is known, in the default language.
    pub fn reject(&self, err: &DomainError) -> ApiError {
        ApiError::from_domain(&self.locales, self.config.default_language, err)
    }
}

/// Independent chat workspaces, addressed by id.
#[derive(Clone, Default)]
pub struct WorkspaceRegistry {
    inner: Arc<RwLock<HashMap<Uuid, SharedWorkspace>>>,
}

impl WorkspaceRegistry {
    pub async fn create(&self, language: Language) -> (Uuid, SharedWorkspace) {
        let workspace = Workspace::new(language);
        let id = workspace.id();
        let shared = Arc::new(Mutex::new(workspace));
        self.inner.write().await.insert(id, shared.clone());
        tracing::info!(workspace = %id, language = language.code(), "workspace created");
        (id, shared)
    }

    pub async fn get(&self, id: Uuid) -> Result<SharedWorkspace, DomainError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(id.to_string()))
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), DomainError> {
        self.inner
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(id.to_string()))
    }

    /// Exclusive access for one request. A workspace already serving another
    /// request is reported as busy rather than waited on.
    pub async fn acquire(&self, id: Uuid) -> Result<OwnedMutexGuard<Workspace>, DomainError> {
        self.get(id)
            .await?
            .try_lock_owned()
            .map_err(|_| DomainError::Busy)
    }
}
