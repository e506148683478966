//! Parse pipeline: extracted text in, `{skills, projects}` out.
//!
//! Skill matching and project segmentation are independent, read-only
//! consumers of the same text. Both are pure in-memory computations; the
//! only external inputs are the text and the corpus snapshot, so a result
//! is always consistent with exactly one corpus generation.

use serde::Serialize;

use crate::projects::{segment_projects, ProjectRecord};
use crate::skills::corpus::SkillIndex;
use crate::skills::matcher::{locate_skills_section, match_skills, normalize_whitespace};

/// One parse outcome. Empty lists mean "no evidence found", never failure.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    pub skills: Vec<String>,
    pub projects: Vec<ProjectRecord>,
}

/// Runs skill matching and project segmentation over extracted text.
pub fn parse_text(text: &str, index: &SkillIndex) -> ParseResult {
    let normalized = normalize_whitespace(text);
    let window = locate_skills_section(&normalized);
    ParseResult {
        skills: match_skills(window, index),
        projects: segment_projects(text),
    }
}
