use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a sensible default; the service boots with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicit corpus file override. Takes priority over `skill_corpus_mode`.
    pub skill_corpus_path: Option<String>,
    /// Named corpus mode: "full" or "lean". Defaults to "full".
    pub skill_corpus_mode: String,
    /// Directory holding the bundled corpus files (skills_full.txt, skills_lean.txt).
    pub corpus_dir: String,
    /// Base URL of the OCR sidecar. When unset, image uploads are rejected
    /// with an explicit unsupported-format error.
    pub ocr_service_url: Option<String>,
    /// Base URL of the optional tokenizer/NLP sidecar. When unset, the
    /// whitespace fallback is used.
    pub nlp_service_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            skill_corpus_path: optional_env("SKILL_CORPUS_PATH"),
            skill_corpus_mode: std::env::var("SKILL_CORPUS_MODE")
                .unwrap_or_else(|_| "full".to_string()),
            corpus_dir: std::env::var("SKILL_CORPUS_DIR")
                .unwrap_or_else(|_| concat!(env!("CARGO_MANIFEST_DIR"), "/data").to_string()),
            ocr_service_url: optional_env("OCR_SERVICE_URL"),
            nlp_service_url: optional_env("NLP_SERVICE_URL"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns `None` for unset or empty env vars.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
