//! Format detection and text extraction.
//!
//! Dispatch is by filename suffix. Every extractor-internal failure degrades
//! to empty text so a corrupt upload still produces an (empty) parse result.
//! The single exception is an image upload while OCR is disabled, which must
//! surface as an explicit unsupported-format error; an empty result there
//! would be indistinguishable from "the image contained no text".

pub mod docx;
pub mod ocr;
pub mod pdf;

use tracing::debug;

use crate::errors::AppError;
use crate::extract::ocr::OcrEngine;

/// Extracts plain text from `bytes` according to the filename suffix.
/// Unknown suffixes are treated as UTF-8 text with invalid sequences
/// replaced; decoding never fails.
pub async fn extract_text(
    bytes: &[u8],
    filename: &str,
    ocr: &dyn OcrEngine,
) -> Result<String, AppError> {
    let suffix = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let text = match suffix.as_str() {
        "pdf" => pdf::extract(bytes),
        "docx" => docx::extract(bytes),
        "jpg" | "jpeg" | "png" => {
            if !ocr.available() {
                return Err(AppError::UnsupportedFormat(format!(
                    "cannot extract text from '{filename}': OCR is not available at this deployment"
                )));
            }
            match ocr.recognize(bytes).await {
                Ok(text) => text,
                Err(e) => {
                    debug!("OCR recognition failed, degrading to empty text: {e}");
                    String::new()
                }
            }
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    Ok(text)
}
