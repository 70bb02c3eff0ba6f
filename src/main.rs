//! Mindspace server binary.
//!
//! Loads configuration, initialises logging, wires adapters into the
//! application handlers and serves the API until Ctrl-C.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, EnvFilter};

use mindspace::adapters::{
    api_router, AppState, FileRecordStore, InMemoryRecordStore, MockAIProvider, OpenAIConfig,
    OpenAIProvider,
};
use mindspace::application::Companion;
use mindspace::config::{AppConfig, ServerConfig, StorageBackend};
use mindspace::domain::cbt::DistortionScreen;
use mindspace::domain::safety::RiskScreen;
use mindspace::ports::{AIProvider, RecordStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let risk_screen = RiskScreen::load(config.safety.crisis_table_path.as_deref());
    let distortion_screen = DistortionScreen::load(config.safety.distortion_table_path.as_deref());
    if risk_screen.is_degraded() || distortion_screen.is_degraded() {
        tracing::warn!(
            risk_degraded = risk_screen.is_degraded(),
            distortion_degraded = distortion_screen.is_degraded(),
            "safety screens running in degraded mode"
        );
    }

    let provider = build_provider(&config)?;
    let info = provider.provider_info();
    tracing::info!(provider = %info.name, model = %info.model, "language model configured");

    let store = build_store(&config);
    let state = AppState::new(store, risk_screen, distortion_screen, Companion::new(provider))
        .with_history_window(config.ai.history_window);

    let app = api_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "mindspace listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

fn build_provider(config: &AppConfig) -> Result<Arc<dyn AIProvider>, Box<dyn Error>> {
    match config.ai.openai_api_key.clone() {
        Some(key) if config.ai.has_openai() => {
            let openai = OpenAIConfig::from_secret(key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_timeout(config.ai.timeout())
                .with_max_retries(config.ai.max_retries);
            Ok(Arc::new(OpenAIProvider::new(openai)?))
        }
        _ => {
            tracing::warn!("no OpenAI API key configured, replies come from the offline mock");
            Ok(Arc::new(MockAIProvider::offline()))
        }
    }
}

fn build_store(config: &AppConfig) -> Arc<dyn RecordStore> {
    match (config.storage.backend, config.storage.data_dir.as_ref()) {
        (StorageBackend::File, Some(dir)) => {
            tracing::info!(data_dir = %dir.display(), "using file record store");
            Arc::new(FileRecordStore::new(dir))
        }
        _ => {
            tracing::info!("using in-memory record store");
            Arc::new(InMemoryRecordStore::new())
        }
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    if origins.is_empty() && !server.is_production() {
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
