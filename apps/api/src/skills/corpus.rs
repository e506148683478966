//! Skill corpus loading and pattern compilation.
//!
//! The corpus is a line-delimited label file. Source resolution priority:
//! explicit path override, then named mode ("full" | "lean"), defaulting to
//! "full". A missing or unreadable file logs a warning and substitutes a
//! small built-in vocabulary; corpus-dependent requests never fail.
//!
//! Compiled patterns are an immutable snapshot (`SkillIndex`). Reload builds
//! a complete new snapshot and publishes it with a single reference swap, so
//! in-flight requests always see a corpus consistent with its patterns.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use regex::{Regex, RegexBuilder};
use tracing::{info, warn};

/// Single-character labels allowed through the short-label filter.
/// Everything else under 2 characters is dropped to avoid spurious matches.
const SHORT_LABEL_WHITELIST: &[&str] = &["C", "R"];

/// Minimal vocabulary used when no corpus file can be read.
const FALLBACK_LABELS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "JavaScript",
    "SQL",
    "HTML",
    "CSS",
    "React",
    "Node.js",
    "Machine Learning",
    "Data Analysis",
    "Communication",
    "Leadership",
    "Teamwork",
];

/// One corpus label paired with its boundary-safe, case-insensitive matcher.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub label: String,
    pub regex: Regex,
}

/// Immutable snapshot of the loaded corpus and its compiled patterns.
///
/// `patterns` is ordered by descending label length (stable, so corpus order
/// breaks ties) so that "Machine Learning" is tried before "Learning".
#[derive(Debug)]
pub struct SkillIndex {
    pub labels: Vec<String>,
    pub patterns: Vec<CompiledPattern>,
    /// Resolved source mode: "full", "lean", or "override".
    pub mode: String,
    /// True when the corpus file could not be read and the built-in
    /// fallback vocabulary is in effect.
    pub fallback: bool,
}

impl SkillIndex {
    /// Builds a snapshot from an already-loaded label list.
    pub fn from_labels<I, S>(labels: I, mode: &str, fallback: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let labels: Vec<String> = labels
            .into_iter()
            .map(Into::into)
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .filter(|l| l.chars().count() >= 2 || SHORT_LABEL_WHITELIST.contains(&l.as_str()))
            .filter(|l| seen.insert(l.to_lowercase()))
            .collect();

        let mut patterns: Vec<CompiledPattern> = labels
            .iter()
            .filter_map(|label| {
                let regex = RegexBuilder::new(&regex::escape(label))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| warn!("Skipping uncompilable skill label {label:?}: {e}"))
                    .ok()?;
                Some(CompiledPattern {
                    label: label.clone(),
                    regex,
                })
            })
            .collect();
        // Longest label first; stable sort keeps corpus order for equal lengths.
        patterns.sort_by_key(|p| std::cmp::Reverse(p.label.chars().count()));

        SkillIndex {
            labels,
            patterns,
            mode: mode.to_string(),
            fallback,
        }
    }
}

/// Loads and compiles a `SkillIndex` from the resolved corpus source.
/// Never fails: an unreadable source degrades to the built-in fallback.
pub fn load_index(path_override: Option<&str>, mode: &str, corpus_dir: &str) -> SkillIndex {
    let (path, resolved_mode) = resolve_source(path_override, mode, corpus_dir);

    match std::fs::read_to_string(&path) {
        Ok(contents) => {
            let index = SkillIndex::from_labels(contents.lines(), &resolved_mode, false);
            info!(
                path = %path.display(),
                mode = %index.mode,
                labels = index.labels.len(),
                "Skill corpus loaded"
            );
            index
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                "Skill corpus unreadable ({e}); using built-in fallback vocabulary"
            );
            SkillIndex::from_labels(FALLBACK_LABELS.iter().copied(), &resolved_mode, true)
        }
    }
}

fn resolve_source(
    path_override: Option<&str>,
    mode: &str,
    corpus_dir: &str,
) -> (PathBuf, String) {
    if let Some(path) = path_override {
        return (PathBuf::from(path), "override".to_string());
    }
    let mode = if mode.eq_ignore_ascii_case("lean") {
        "lean"
    } else {
        "full"
    };
    let file = format!("skills_{mode}.txt");
    (PathBuf::from(corpus_dir).join(file), mode.to_string())
}

/// Shared handle to the current `SkillIndex` snapshot.
///
/// Readers take a cheap `Arc` clone; reload publishes a fully-built
/// replacement with one pointer swap under a short write lock. No reader can
/// observe a half-updated corpus.
#[derive(Clone)]
pub struct SkillIndexHandle {
    inner: Arc<RwLock<Arc<SkillIndex>>>,
}

impl SkillIndexHandle {
    pub fn new(index: SkillIndex) -> Self {
        SkillIndexHandle {
            inner: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Returns the current snapshot. The snapshot stays valid for the whole
    /// request even if a reload lands mid-flight.
    pub fn snapshot(&self) -> Arc<SkillIndex> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Replaces the snapshot and returns the newly published one.
    pub fn replace(&self, index: SkillIndex) -> Arc<SkillIndex> {
        let fresh = Arc::new(index);
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = fresh.clone();
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_short_labels_dropped_unless_whitelisted() {
        let index = SkillIndex::from_labels(["C", "R", "X", "Go", "A"], "full", false);
        assert_eq!(index.labels, vec!["C", "R", "Go"]);
    }

    #[test]
    fn test_patterns_sorted_longest_first() {
        let index = SkillIndex::from_labels(["Learning", "Machine Learning", "ML"], "full", false);
        let order: Vec<&str> = index.patterns.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(order, vec!["Machine Learning", "Learning", "ML"]);
    }

    #[test]
    fn test_duplicate_labels_collapse_case_insensitively() {
        let index = SkillIndex::from_labels(["Python", "python", "PYTHON"], "full", false);
        assert_eq!(index.labels, vec!["Python"]);
    }

    #[test]
    fn test_special_characters_compile() {
        let index = SkillIndex::from_labels(["C++", "Node.js", "CI/CD"], "full", false);
        assert_eq!(index.patterns.len(), 3);
        let cpp = index.patterns.iter().find(|p| p.label == "C++").unwrap();
        assert!(cpp.regex.is_match("knows c++ well"));
        let node = index.patterns.iter().find(|p| p.label == "Node.js").unwrap();
        // The dot is escaped, not a wildcard.
        assert!(!node.regex.is_match("Nodexjs"));
    }

    #[test]
    fn test_missing_file_degrades_to_fallback() {
        let index = load_index(Some("/nonexistent/skills.txt"), "full", "/nonexistent");
        assert!(index.fallback);
        assert!(!index.labels.is_empty());
        assert!(index.labels.iter().any(|l| l == "Python"));
    }

    #[test]
    fn test_path_override_beats_mode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Rust\nKubernetes").unwrap();
        let index = load_index(Some(file.path().to_str().unwrap()), "lean", "/nonexistent");
        assert!(!index.fallback);
        assert_eq!(index.mode, "override");
        assert_eq!(index.labels, vec!["Rust", "Kubernetes"]);
    }

    #[test]
    fn test_reload_is_idempotent() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Python\nMachine Learning\nSQL").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let handle = SkillIndexHandle::new(load_index(Some(&path), "full", "."));
        let first = handle.snapshot();
        handle.replace(load_index(Some(&path), "full", "."));
        let second = handle.snapshot();

        assert_eq!(first.labels, second.labels);
        let order = |ix: &SkillIndex| {
            ix.patterns
                .iter()
                .map(|p| p.label.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(order(&first), order(&second));
    }

    #[test]
    fn test_replace_publishes_new_snapshot_atomically() {
        let handle = SkillIndexHandle::new(SkillIndex::from_labels(["Python"], "full", false));
        let old = handle.snapshot();
        handle.replace(SkillIndex::from_labels(["Rust", "Go"], "lean", false));
        let new = handle.snapshot();

        // Old snapshot is still internally consistent for in-flight readers.
        assert_eq!(old.labels, vec!["Python"]);
        assert_eq!(new.labels, vec!["Rust", "Go"]);
        assert_eq!(new.patterns.len(), 2);
        assert_eq!(new.mode, "lean");
    }
}
