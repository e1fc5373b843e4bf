mod assist;
mod catalog;
mod config;
mod errors;
mod llm_client;
mod models;
mod routes;
mod scoring;
mod state;
mod stories;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assist::WritingAssistant;
use crate::catalog::CompetencyCatalog;
use crate::config::Config;
use crate::llm_client::{DisabledGenerator, LlmClient, TextGenerator};
use crate::routes::build_router;
use crate::scoring::ScoringEngine;
use crate::state::AppState;
use crate::stories::store::StoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting STAR Coach API v{}", env!("CARGO_PKG_VERSION"));

    // Competency catalog: JSON file when configured, built-in framework otherwise
    let catalog = match &config.competency_catalog_path {
        Some(path) => CompetencyCatalog::from_json_file(path)
            .with_context(|| format!("loading competency catalog {}", path.display()))?,
        None => {
            let catalog = CompetencyCatalog::builtin();
            info!("Using built-in competency catalog ({} entries)", catalog.len());
            catalog
        }
    };
    let catalog = Arc::new(catalog);
    let engine = ScoringEngine::new(catalog.clone());

    let store = StoryStore::new(&config.stories_dir);
    info!("Saving stories under {}", store.root().display());

    let generator: Arc<dyn TextGenerator> = match &config.anthropic_api_key {
        Some(key) => {
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmClient::new(
                key.clone(),
                Duration::from_secs(config.llm_timeout_secs),
            ))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; AI assists are disabled");
            Arc::new(DisabledGenerator)
        }
    };

    let state = AppState {
        catalog,
        engine,
        store,
        assistant: WritingAssistant::new(generator),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
