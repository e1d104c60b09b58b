use grounded_chat::api::{create_router, AppState};
use grounded_chat::application::{DocumentService, SessionManager, VisualAidCatalog};
use grounded_chat::domain::Localizer;
use grounded_chat::infrastructure::{AppConfig, DocumentExtractor, GeminiLlm};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=debug,grounded_chat=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Nothing is processed without model credentials.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return Err(e.into());
        }
    };
    info!(model = %config.llm.model, language = config.default_language.code(), "configuration loaded");

    let locales = Arc::new(Localizer::embedded()?);
    let documents = Arc::new(
        DocumentService::new(Arc::new(DocumentExtractor::new()), locales.clone())
            .with_max_context_chars(config.documents.max_context_chars),
    );
    let visual_aids = Arc::new(VisualAidCatalog::scan(&config.documents.assets_dir));
    let llm = Arc::new(GeminiLlm::new(&config.llm)?);
    let sessions = Arc::new(SessionManager::new(llm, locales.clone(), visual_aids));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let state = AppState::new(config, locales, documents, sessions);
    let app = create_router(state);

    info!("API server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
