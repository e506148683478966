use axum::extract::{Multipart, State};
use axum::Json;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extract;
use crate::parse::{parse_text, ParseResult};
use crate::state::AppState;

/// GET /api/resumes/upload
/// Guidance for browser GETs.
pub async fn handle_upload_guidance() -> AppError {
    AppError::MethodNotAllowed(
        "Use POST /api/resumes/upload with multipart/form-data and field name 'resume'".to_string(),
    )
}

/// POST /api/resumes/upload
/// Accepts a multipart upload (field name `resume`), extracts text, and
/// returns recognized skills plus segmented projects.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResult>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or("resume.txt").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, bytes.to_vec()));
            break;
        }
    }
    let Some((filename, bytes)) = upload else {
        return Err(AppError::Validation("No file uploaded".to_string()));
    };

    let text = extract::extract_text(&bytes, &filename, state.ocr.as_ref()).await?;

    // Tokenization is diagnostic only; skip the sidecar round trip unless
    // someone is actually watching debug logs.
    if state.tokenizer.available() && tracing::enabled!(tracing::Level::DEBUG) {
        let tokens = state.tokenizer.tokenize(&text).await;
        debug!(token_count = tokens.len(), "tokenized extracted text");
    }

    let index = state.skills.snapshot();
    let result = parse_text(&text, &index);
    info!(
        filename,
        bytes = bytes.len(),
        skills = result.skills.len(),
        projects = result.projects.len(),
        "parsed resume"
    );
    Ok(Json(result))
}
