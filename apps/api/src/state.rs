use std::sync::Arc;

use crate::config::Config;
use crate::extract::ocr::OcrEngine;
use crate::nlp::TokenizerClient;
use crate::skills::SkillIndexHandle;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Current skill corpus/pattern snapshot. Replaced wholesale on reload;
    /// handlers take one snapshot per request.
    pub skills: SkillIndexHandle,
    pub ocr: Arc<dyn OcrEngine>,
    pub tokenizer: Arc<TokenizerClient>,
    pub config: Config,
}
