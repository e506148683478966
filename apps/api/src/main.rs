mod config;
mod errors;
mod extract;
mod nlp;
mod parse;
mod projects;
mod routes;
mod skills;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::nlp::TokenizerClient;
use crate::routes::build_router;
use crate::skills::{corpus::load_index, SkillIndexHandle};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resume_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill corpus and compile patterns once at startup
    let index = load_index(
        config.skill_corpus_path.as_deref(),
        &config.skill_corpus_mode,
        &config.corpus_dir,
    );
    let skills = SkillIndexHandle::new(index);

    // OCR capability is fixed per deployment
    let ocr = extract::ocr::from_config(config.ocr_service_url.as_deref());
    info!("OCR available: {}", ocr.available());

    let tokenizer = Arc::new(TokenizerClient::new(config.nlp_service_url.clone()));
    if tokenizer.available() {
        info!("Tokenizer sidecar configured");
    }

    let state = AppState {
        skills,
        ocr,
        tokenizer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
