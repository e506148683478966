//! PDF text extraction with quality arbitration between two strategies.
//!
//! Two independent extractors run on every PDF: a structural pass
//! (`pdf-extract`) and a page-ordered `lopdf` pass that reads content
//! streams directly. Real resumes defeat each of them in different ways,
//! so when both return text the higher-scoring result wins.
//!
//! The score is tuned, not derived: normalized length plus vowel density,
//! with a penalty when a rare-but-expected glyph is missing relative to a
//! common one (some extractors silently drop glyphs their font decoder
//! cannot map). Thresholds are preserved as observed; do not retune them
//! without a labeled corpus to measure against.

use tracing::debug;

/// Length contribution saturates here; beyond this, more text is not better.
const LENGTH_NORM_CAP: f64 = 4000.0;
/// Reference glyph ('e') must appear at least this often before the
/// rare-glyph ratio is meaningful.
const REFERENCE_MIN_COUNT: f64 = 100.0;
/// Expected floor for count('w') / count('e') in English prose.
const RARE_RATIO_FLOOR: f64 = 0.01;
const GLYPH_DROP_PENALTY: f64 = 0.5;

/// Extracts text from PDF bytes. Returns empty text when both strategies
/// fail; PDF extraction never raises to the caller.
pub fn extract(bytes: &[u8]) -> String {
    let structural = structural_text(bytes);
    let layout = layout_text(bytes);

    match (structural, layout) {
        (Some(s), None) => s,
        (None, Some(l)) => l,
        (Some(s), Some(l)) => {
            let (score_s, score_l) = (quality_score(&s), quality_score(&l));
            debug!(structural = score_s, layout = score_l, "PDF quality arbitration");
            // Ties favor the structural extractor.
            if score_l > score_s {
                l
            } else {
                s
            }
        }
        (None, None) => String::new(),
    }
}

fn structural_text(bytes: &[u8]) -> Option<String> {
    // pdf-extract panics on some malformed font programs; contain it.
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    non_empty(result.ok()?.ok()?)
}

fn layout_text(bytes: &[u8]) -> Option<String> {
    let doc = lopdf::Document::load_mem(bytes).ok()?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    non_empty(doc.extract_text(&pages).ok()?)
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Scores extracted text for the arbitration above. Higher is better.
fn quality_score(text: &str) -> f64 {
    let total = text.chars().count() as f64;
    if total == 0.0 {
        return 0.0;
    }
    let vowels = text
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count() as f64;

    let mut score = (total / LENGTH_NORM_CAP).min(1.0) + vowels / total;

    let reference = count_char(text, 'e');
    let rare = count_char(text, 'w');
    if reference >= REFERENCE_MIN_COUNT && rare / reference < RARE_RATIO_FLOOR {
        score *= GLYPH_DROP_PENALTY;
    }
    score
}

fn count_char(text: &str, target: char) -> f64 {
    text.chars()
        .filter(|c| c.to_ascii_lowercase() == target)
        .count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_degrade_to_empty() {
        assert_eq!(extract(b"not a pdf at all"), "");
        assert_eq!(extract(b""), "");
    }

    #[test]
    fn test_score_prefers_longer_vowel_dense_text() {
        let good = "Worked with a wide array of web services and data tooling. ".repeat(10);
        let thin = "xxxx qqqq zzzz";
        assert!(quality_score(&good) > quality_score(thin));
    }

    #[test]
    fn test_glyph_drop_penalty_halves_score() {
        // Plenty of 'e', no 'w' at all: the ratio floor trips.
        let degraded = "seen thereledge degree emerged test her ".repeat(10);
        assert!(degraded.matches('e').count() >= 100);
        assert_eq!(degraded.matches('w').count(), 0);

        let with_w = degraded.replace("test", "west");
        assert!(quality_score(&degraded) < quality_score(&with_w));
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(quality_score(""), 0.0);
    }
}
