//! Skills-section slicing and boundary-safe pattern matching.
//!
//! Matching runs on whitespace-normalized text so multi-word labels survive
//! arbitrary line wrapping, and is narrowed to the SKILLS section when one
//! exists. Without a SKILLS heading the whole text is searched; recall is
//! preferred over precision when the document has no usable structure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::skills::corpus::SkillIndex;

static SKILLS_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bSKILLS\b").expect("static regex"));

/// Headings that terminate a SKILLS search window.
static NEXT_SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(PROJECTS|EXPERIENCE|EDUCATION|CERTIFICATIONS?|ACHIEVEMENTS|INTERNSHIPS?|SUMMARY|OBJECTIVE|CONTACT|REFERENCES|INTERESTS|HOBBIES|LANGUAGES|DECLARATION)\b",
    )
    .expect("static regex")
});

/// Collapses every whitespace run to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Narrows `text` to the region after a SKILLS heading, ending at the next
/// recognized section heading (or end-of-text). Falls back to the whole text
/// when no SKILLS heading is present.
pub fn locate_skills_section(text: &str) -> &str {
    let Some(heading) = SKILLS_HEADING_RE.find(text) else {
        return text;
    };
    let window_start = heading.end();
    match NEXT_SECTION_RE.find_at(text, window_start) {
        Some(next) => &text[window_start..next.start()],
        None => &text[window_start..],
    }
}

/// Matches compiled patterns against the search window.
///
/// Patterns arrive pre-sorted longest-first; each match claims its span so a
/// shorter label can never re-report text already covered by a longer one
/// ("Machine Learning" suppresses "Learning"). Matches are boundary-checked
/// against alphanumeric neighbors only, deduplicated by lower-cased label
/// with the earliest occurrence winning, and returned in text order. Labels
/// are reported as they appear verbatim in the resume text.
pub fn match_skills(window: &str, index: &SkillIndex) -> Vec<String> {
    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut found: Vec<(usize, String)> = Vec::new();

    for pattern in &index.patterns {
        for m in pattern.regex.find_iter(window) {
            if claimed.iter().any(|&(s, e)| m.start() < e && s < m.end()) {
                continue;
            }
            if !boundary_ok(window, m.start(), m.end()) {
                continue;
            }
            claimed.push((m.start(), m.end()));
            found.push((m.start(), m.as_str().to_string()));
            break; // first valid occurrence per label
        }
    }

    found.sort_by_key(|(pos, _)| *pos);
    let mut seen = std::collections::HashSet::new();
    found
        .into_iter()
        .filter(|(_, label)| seen.insert(label.to_lowercase()))
        .map(|(_, label)| label)
        .collect()
}

/// A match may not be immediately preceded or followed by an alphanumeric
/// character. Punctuation neighbors are fine ("Java," still matches).
fn boundary_ok(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_alphanumeric()) && !after.is_some_and(|c| c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::corpus::SkillIndex;

    fn index(labels: &[&str]) -> SkillIndex {
        SkillIndex::from_labels(labels.iter().copied(), "full", false)
    }

    #[test]
    fn test_longest_match_precedence() {
        let ix = index(&["Learning", "Machine Learning"]);
        let skills = match_skills("Machine Learning", &ix);
        assert_eq!(skills, vec!["Machine Learning"]);
    }

    #[test]
    fn test_shorter_label_still_matches_elsewhere() {
        let ix = index(&["Learning", "Machine Learning"]);
        let skills = match_skills("Machine Learning and lifelong Learning", &ix);
        assert_eq!(skills, vec!["Machine Learning", "Learning"]);
    }

    #[test]
    fn test_word_boundary_rejects_embedded_match() {
        let ix = index(&["Java"]);
        assert!(match_skills("JavaScript developer", &ix).is_empty());
        assert_eq!(match_skills("Java and JavaScript", &ix), vec!["Java"]);
    }

    #[test]
    fn test_whitelisted_single_letter_respects_boundaries() {
        let ix = index(&["R"]);
        assert!(match_skills("Order processing", &ix).is_empty());
        assert_eq!(match_skills("Python, R, SQL", &ix), vec!["R"]);
    }

    #[test]
    fn test_punctuation_neighbors_allowed() {
        let ix = index(&["Python", "C++"]);
        let skills = match_skills("(Python), C++.", &ix);
        assert_eq!(skills, vec!["Python", "C++"]);
    }

    #[test]
    fn test_matches_reported_in_text_order_verbatim() {
        let ix = index(&["SQL", "Python"]);
        let skills = match_skills("knows sql and PYTHON", &ix);
        assert_eq!(skills, vec!["sql", "PYTHON"]);
    }

    #[test]
    fn test_duplicate_occurrences_deduplicated() {
        let ix = index(&["Python"]);
        let skills = match_skills("Python, more python, PYTHON again", &ix);
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn test_section_narrowing_excludes_later_sections() {
        let text = normalize_whitespace("SKILLS\nPython\nPROJECTS\nBuilt a thing in Java");
        let window = locate_skills_section(&text);
        let ix = index(&["Python", "Java"]);
        assert_eq!(match_skills(window, &ix), vec!["Python"]);
    }

    #[test]
    fn test_no_skills_heading_searches_whole_text() {
        let text = normalize_whitespace("I write Python and Java daily.");
        let window = locate_skills_section(&text);
        let ix = index(&["Python", "Java"]);
        assert_eq!(match_skills(window, &ix), vec!["Python", "Java"]);
    }

    #[test]
    fn test_normalization_repairs_wrapped_multiword_label() {
        let text = normalize_whitespace("SKILLS\nMachine\nLearning");
        let window = locate_skills_section(&text);
        let ix = index(&["Machine Learning"]);
        assert_eq!(match_skills(window, &ix), vec!["Machine Learning"]);
    }

    #[test]
    fn test_window_extends_to_end_without_following_heading() {
        let text = normalize_whitespace("SKILLS\nPython, SQL");
        let window = locate_skills_section(&text);
        let ix = index(&["Python", "SQL"]);
        assert_eq!(match_skills(window, &ix), vec!["Python", "SQL"]);
    }
}
