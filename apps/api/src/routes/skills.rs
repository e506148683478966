use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::skills::corpus::load_index;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReloadParams {
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub reloaded: bool,
    pub catalog_size: usize,
    pub mode: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsResponse {
    pub corpus_size: usize,
    pub patterns_compiled: usize,
    pub ocr_available: bool,
    pub sample_labels: Vec<String>,
}

/// POST /api/skills/reload?mode=full|lean
/// Rebuilds the corpus/pattern snapshot and publishes it atomically.
/// In-flight requests keep the snapshot they started with.
pub async fn handle_reload(
    State(state): State<AppState>,
    Query(params): Query<ReloadParams>,
) -> Result<Json<ReloadResponse>, AppError> {
    let mode = params
        .mode
        .unwrap_or_else(|| state.config.skill_corpus_mode.clone());
    let index = load_index(
        state.config.skill_corpus_path.as_deref(),
        &mode,
        &state.config.corpus_dir,
    );
    let published = state.skills.replace(index);
    info!(
        mode = %published.mode,
        labels = published.labels.len(),
        fallback = published.fallback,
        "skill corpus reloaded"
    );
    Ok(Json(ReloadResponse {
        reloaded: true,
        catalog_size: published.labels.len(),
        mode: published.mode.clone(),
    }))
}

/// GET /api/skills/diagnostics
pub async fn handle_diagnostics(
    State(state): State<AppState>,
) -> Result<Json<DiagnosticsResponse>, AppError> {
    let index = state.skills.snapshot();
    Ok(Json(DiagnosticsResponse {
        corpus_size: index.labels.len(),
        patterns_compiled: index.patterns.len(),
        ocr_available: state.ocr.available(),
        sample_labels: index.labels.iter().take(5).cloned().collect(),
    }))
}
