//! Line-based heuristic segmentation of the PROJECTS section.
//!
//! This is a state machine over lines, not a grammar parser: resume project
//! sections are formatted too inconsistently for anything stricter. It finds
//! the section, walks it keeping a {title, description} accumulator, cleans
//! and caps each finished record, drops hackathon entries (tracked as a
//! separate category upstream), and deduplicates by normalized title.
//!
//! Title classification is an explicit ordered rule list (`TITLE_RULES`);
//! the order is load-bearing on ambiguous input, so new rules go at the end.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::trace;

/// Titles longer than this are truncated with an ellipsis.
pub const MAX_TITLE_CHARS: usize = 150;
/// Descriptions longer than this are truncated with an ellipsis.
pub const MAX_DESCRIPTION_CHARS: usize = 4000;

/// One segmented project entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
}

/// Known names for a projects section, matched after normalization
/// (trimmed, trailing colon stripped, whitespace collapsed, upper-cased).
const PROJECT_HEADINGS: &[&str] = &[
    "PROJECTS",
    "PROJECT",
    "PERSONAL PROJECTS",
    "ACADEMIC PROJECTS",
    "KEY PROJECTS",
    "MAJOR PROJECTS",
    "MINI PROJECTS",
    "TECHNICAL PROJECTS",
    "SELECTED PROJECTS",
    "RELEVANT PROJECTS",
    "PROJECT WORK",
    "PROJECT EXPERIENCE",
    "PROJECTS & ACHIEVEMENTS",
    "PROJECTS AND ACHIEVEMENTS",
    "PROJECTS UNDERTAKEN",
];

/// Headings that terminate the projects section.
const SECTION_ANCHORS: &[&str] = &[
    "EXPERIENCE",
    "WORK EXPERIENCE",
    "INTERNSHIP",
    "EDUCATION",
    "SKILLS",
    "TECHNICAL SKILLS",
    "CERTIFICATION",
    "ACHIEVEMENT",
    "AWARD",
    "PUBLICATION",
    "INTEREST",
    "HOBBIES",
    "LANGUAGES",
    "DECLARATION",
    "REFERENCE",
    "CONTACT",
    "SUMMARY",
    "OBJECTIVE",
    "EXTRACURRICULAR",
    "VOLUNTEER",
];

/// Metadata labels that never start a new record; they belong to the
/// description of the record in progress.
const GENERIC_LABELS: &[&str] = &[
    "TECH STACK",
    "TECHNOLOGIES",
    "TECHNOLOGIES USED",
    "TOOLS",
    "TOOLS USED",
    "ROLE",
    "DURATION",
    "TEAM SIZE",
    "DESCRIPTION",
    "FEATURES",
    "RESPONSIBILITIES",
    "LINK",
    "LINKS",
    "GITHUB",
    "DEMO",
];

const MONTHS: &str = "jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec";

static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:(?:{m})[a-z]*\.?\s*)?(?:19|20)\d{{2}}\s*(?:-|–|—|to)\s*(?:(?:(?:{m})[a-z]*\.?\s*)?(?:19|20)\d{{2}}|present|current|ongoing)\b",
        m = MONTHS
    ))
    .expect("static regex")
});

static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{MONTHS})[a-z]*\.?\s+(?:19|20)\d{{2}}\b"))
        .expect("static regex")
});

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").expect("static regex"));

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:bachelor|master|b\.?\s?tech|m\.?\s?tech|b\.?e\.|b\.?sc|m\.?sc|mba|bca|mca|ph\.?d|diploma)\b",
    )
    .expect("static regex")
});

/// Bullet or numbering marker at the start of a line.
static BULLET_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(?:[•●▪◦‣·*]+|-|\d{1,2}[.)])\s+").expect("static regex"));

/// "Project: ..." style label.
static PROJECT_LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^project\s*(?:#?\d+\s*)?[:.\-–—]").expect("static regex"));

/// "Short Title - longer description" on a single line.
static INLINE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.{3,60}?)\s+[-–—]\s+(.{10,})$").expect("static regex"));

/// Leading bullet/dash/colon/numbering decoration on a raw title.
static TITLE_DECOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[•●▪◦‣·*>:\-–—]+\s*|\d{1,2}[.)]\s+)+").expect("static regex"));

/// Trailing "GitHub ..." reference (bare word or full URL) on a title.
static GITHUB_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[\(\[]?\s*(?:https?://\S*)?\bgithub\b.*$").expect("static regex")
});

/// A GitHub link (bare or full URL), as opposed to "GitHub" as a word.
static GITHUB_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:https?://\S*)?(?:www\.)?github\.com\b").expect("static regex"));

/// A description line that is only a GitHub reference.
static GITHUB_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:github\b|https?://(?:www\.)?github\.com)").expect("static regex")
});

/// Bullet/numbering prefix on a description line, with its indentation.
static DESC_BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)(?:[•●▪◦‣·*]+|-|\d{1,2}[.)])\s+(.*)$").expect("static regex"));

/// Hackathon entries are a distinct category and excluded from projects.
static HACKATHON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)hack[\s_-]*a[\s_-]*thon|hackfest").expect("static regex"));

/// Segments the PROJECTS section of `text` into cleaned, deduplicated
/// records. Returns an empty list when no projects section can be located.
pub fn segment_projects(text: &str) -> Vec<ProjectRecord> {
    let lines: Vec<&str> = text.lines().collect();
    let Some(start) = find_section_start(&lines) else {
        return Vec::new();
    };
    let end = find_section_end(&lines, start + 1);

    let records = split_records(&lines[start + 1..end]);
    let records: Vec<ProjectRecord> = records
        .into_iter()
        .filter(|r| !HACKATHON_RE.is_match(&r.title) && !HACKATHON_RE.is_match(&r.description))
        .collect();
    dedup_by_title(records)
}

// ── Section boundaries ──────────────────────────────────────────────────────

fn normalize_heading(line: &str) -> String {
    let trimmed = line.trim().trim_end_matches(':');
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn find_section_start(lines: &[&str]) -> Option<usize> {
    if let Some(i) = lines
        .iter()
        .position(|l| PROJECT_HEADINGS.contains(&normalize_heading(l).as_str()))
    {
        return Some(i);
    }
    // Permissive fallback: the first short line mentioning PROJECT at all.
    lines.iter().position(|l| {
        let t = l.trim();
        !t.is_empty() && t.chars().count() <= 120 && t.to_uppercase().contains("PROJECT")
    })
}

fn find_section_end(lines: &[&str], from: usize) -> usize {
    (from..lines.len())
        .find(|&i| is_next_heading(lines[i]))
        .unwrap_or(lines.len())
}

/// Classifies a line as the heading of the section that follows projects.
fn is_next_heading(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    let norm = normalize_heading(trimmed);
    // Metadata labels are all-caps and short but live inside the section.
    if is_generic_label(trimmed) {
        return false;
    }
    let anchored = SECTION_ANCHORS.iter().any(|a| {
        norm == *a || norm.starts_with(a) || (norm.chars().count() <= 40 && norm.contains(a))
    });
    anchored
        || DEGREE_RE.is_match(trimmed)
        || is_horizontal_rule(trimmed)
        || has_heading_shape(trimmed)
}

fn is_horizontal_rule(trimmed: &str) -> bool {
    trimmed.chars().count() >= 3 && trimmed.chars().all(|c| "-_=*~–—".contains(c))
}

/// Short, alphabetic-majority, mostly upper-case lines read as headings.
fn has_heading_shape(trimmed: &str) -> bool {
    let len = trimmed.chars().count();
    if !(3..=60).contains(&len) {
        return false;
    }
    let non_space = trimmed.chars().filter(|c| !c.is_whitespace()).count();
    let alpha = trimmed.chars().filter(|c| c.is_alphabetic()).count();
    if alpha * 2 <= non_space {
        return false;
    }
    let upper = trimmed.chars().filter(|c| c.is_uppercase()).count();
    upper * 10 >= alpha * 8
}

// ── Record splitting state machine ──────────────────────────────────────────

struct LineCtx<'a> {
    line: &'a str,
    title_open: bool,
    after_blank: bool,
}

struct TitleRule {
    name: &'static str,
    applies: fn(&LineCtx) -> bool,
}

/// Ordered title-classification rules, evaluated short-circuit.
const TITLE_RULES: &[TitleRule] = &[
    TitleRule {
        name: "bullet-marker",
        applies: rule_bullet_marker,
    },
    TitleRule {
        name: "project-label",
        applies: rule_project_label,
    },
    TitleRule {
        name: "opening-long-line",
        applies: rule_opening_long_line,
    },
    TitleRule {
        name: "pipe-subtitle",
        applies: rule_pipe_subtitle,
    },
    TitleRule {
        name: "title-case-after-blank",
        applies: rule_title_case_after_blank,
    },
];

/// Bulleted or numbered lines enumerate projects in list-style sections.
fn rule_bullet_marker(ctx: &LineCtx) -> bool {
    BULLET_PREFIX_RE.is_match(ctx.line)
}

/// An explicit "Project: ..." label always starts a record.
fn rule_project_label(ctx: &LineCtx) -> bool {
    PROJECT_LABEL_RE.is_match(ctx.line)
}

/// With no record open yet, a reasonably long multi-word line is the most
/// likely candidate for the first project's title.
fn rule_opening_long_line(ctx: &LineCtx) -> bool {
    if ctx.title_open {
        return false;
    }
    let len = ctx.line.chars().count();
    (12..=120).contains(&len) && ctx.line.split_whitespace().count() >= 2
}

/// "Title | subtitle" lines carry the title left of the pipe.
fn rule_pipe_subtitle(ctx: &LineCtx) -> bool {
    match ctx.line.split_once('|') {
        Some((left, right)) => {
            let left_len = left.trim().chars().count();
            (3..=60).contains(&left_len) && !right.trim().is_empty()
        }
        None => false,
    }
}

/// After a paragraph break, a Title-Case line starts the next record.
fn rule_title_case_after_blank(ctx: &LineCtx) -> bool {
    if !ctx.after_blank {
        return false;
    }
    let words: Vec<&str> = ctx.line.split_whitespace().collect();
    if words.is_empty() || words.len() > 10 || ctx.line.ends_with('.') {
        return false;
    }
    if ctx.line.chars().count() > 80 {
        return false;
    }
    let capitalized = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(|c| c.is_uppercase()))
        .count();
    capitalized * 10 >= words.len() * 7
}

fn classify_title(ctx: &LineCtx) -> Option<&'static str> {
    if is_pure_date_line(ctx.line) || is_generic_label(ctx.line) {
        return None;
    }
    if ctx.title_open && ctx.line.chars().count() < 10 {
        return None;
    }
    TITLE_RULES
        .iter()
        .find(|rule| (rule.applies)(ctx))
        .map(|rule| rule.name)
}

fn split_records(lines: &[&str]) -> Vec<ProjectRecord> {
    let mut records = Vec::new();
    let mut title: Option<String> = None;
    let mut desc: Vec<String> = Vec::new();
    let mut prev_blank = false;

    for raw in lines {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            // Soft separator: keep one paragraph break, never end the record.
            if title.is_some() && desc.last().map_or(false, |l| !l.is_empty()) {
                desc.push(String::new());
            }
            prev_blank = true;
            continue;
        }

        if let Some((inline_title, inline_desc)) = split_inline(trimmed) {
            // A bullet marker is a hard item separator even mid-record;
            // otherwise an in-progress multi-line block is not re-split.
            if title.is_none() || prev_blank || BULLET_PREFIX_RE.is_match(trimmed) {
                flush(&mut records, &mut title, &mut desc);
                title = Some(inline_title);
                desc = vec![inline_desc];
            } else {
                desc.push(raw.trim_end().to_string());
            }
            prev_blank = false;
            continue;
        }

        let ctx = LineCtx {
            line: trimmed,
            title_open: title.is_some(),
            after_blank: prev_blank,
        };
        if let Some(rule) = classify_title(&ctx) {
            trace!(rule, line = trimmed, "classified as project title");
            flush(&mut records, &mut title, &mut desc);
            title = Some(trimmed.to_string());
        } else {
            desc.push(raw.trim_end().to_string());
        }
        prev_blank = false;
    }

    flush(&mut records, &mut title, &mut desc);
    records
}

/// Splits a "Short Title - longer description" line. The prefix must not be
/// a date range, a metadata label, or itself look like running description.
fn split_inline(trimmed: &str) -> Option<(String, String)> {
    let caps = INLINE_SPLIT_RE.captures(trimmed)?;
    let prefix = caps.get(1)?.as_str().trim();
    let suffix = caps.get(2)?.as_str().trim();
    if is_pure_date_line(prefix) || is_generic_label(prefix) {
        return None;
    }
    Some((prefix.to_string(), suffix.to_string()))
}

fn flush(records: &mut Vec<ProjectRecord>, title: &mut Option<String>, desc: &mut Vec<String>) {
    let raw_title = title.take().unwrap_or_default();
    let lines = std::mem::take(desc);
    if raw_title.is_empty() && lines.iter().all(|l| l.trim().is_empty()) {
        return;
    }
    if let Some(record) = finalize(raw_title, lines) {
        records.push(record);
    }
}

// ── Record finalization ─────────────────────────────────────────────────────

fn finalize(raw_title: String, mut desc: Vec<String>) -> Option<ProjectRecord> {
    let mut title = clean_title(&raw_title);

    // A very short title with a lower-case continuation line usually means
    // the real title wrapped; glue the first description line back on.
    if title.chars().count() < 10 {
        if let Some(first) = desc.first() {
            let candidate = first.trim();
            if candidate.chars().next().is_some_and(|c| c.is_lowercase()) {
                title = format!("{title} {candidate}").trim().to_string();
                desc.remove(0);
            }
        }
    }
    while title.is_empty() && !desc.is_empty() {
        let promoted = clean_title(&desc.remove(0));
        title = promoted;
    }
    if title.is_empty() {
        return None;
    }

    let mut cleaned: Vec<String> = desc
        .into_iter()
        .filter(|l| {
            let t = l.trim();
            t.is_empty() || (!is_pure_date_line(t) && !GITHUB_LINE_RE.is_match(t))
        })
        .map(|l| normalize_desc_bullet(&l))
        .collect();

    while cleaned.first().is_some_and(|l| l.trim().is_empty()) {
        cleaned.remove(0);
    }
    while cleaned.last().is_some_and(|l| l.trim().is_empty()) {
        cleaned.pop();
    }

    Some(ProjectRecord {
        title: truncate_with_ellipsis(&title, MAX_TITLE_CHARS),
        description: truncate_with_ellipsis(&cleaned.join("\n"), MAX_DESCRIPTION_CHARS),
    })
}

fn clean_title(raw: &str) -> String {
    let mut t = TITLE_DECOR_RE.replace(raw.trim(), "").into_owned();
    if let Some(ix) = t.find('|') {
        t.truncate(ix);
    }
    if let Some(m) = GITHUB_SUFFIX_RE.find(&t) {
        // Strip a trailing reference, but a title that merely starts with the
        // word "GitHub" is a name, not a link, and stays intact.
        if !t[..m.start()].trim().is_empty() || GITHUB_LINK_RE.is_match(t.trim_start()) {
            t.truncate(m.start());
        }
    }
    t = DATE_RANGE_RE.replace_all(&t, "").into_owned();
    t = MONTH_YEAR_RE.replace_all(&t, "").into_owned();
    let collapsed = t.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_matches(|c: char| matches!(c, '-' | '–' | '—' | ':' | ',' | '(' | ')' | '['))
        .trim()
        .to_string()
}

/// A line that is nothing but a date range, month-year token, or bare year.
fn is_pure_date_line(trimmed: &str) -> bool {
    if !trimmed.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    let stripped = DATE_RANGE_RE.replace_all(trimmed, "");
    let stripped = MONTH_YEAR_RE.replace_all(&stripped, "");
    let stripped = YEAR_RE.replace_all(&stripped, "");
    !stripped.chars().any(|c| c.is_alphanumeric())
}

/// Checks the pre-colon prefix of a line against the metadata label set.
fn is_generic_label(trimmed: &str) -> bool {
    let prefix = trimmed.split(':').next().unwrap_or(trimmed);
    GENERIC_LABELS.contains(&normalize_heading(prefix).as_str())
}

/// Rewrites any bullet/numbering prefix to a single "• " marker, keeping
/// the original indentation.
fn normalize_desc_bullet(line: &str) -> String {
    match DESC_BULLET_RE.captures(line) {
        Some(caps) => format!("{}• {}", &caps[1], &caps[2]),
        None => line.to_string(),
    }
}

fn truncate_with_ellipsis(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Collapses records whose normalized title (non-word characters stripped,
/// case-folded) collides; the first occurrence wins.
fn dedup_by_title(records: Vec<ProjectRecord>) -> Vec<ProjectRecord> {
    let mut seen = std::collections::HashSet::new();
    records
        .into_iter()
        .filter(|r| {
            let key: String = r
                .title
                .to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect();
            seen.insert(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(records: &[ProjectRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_single_inline_record() {
        let text = "SKILLS\nPython, SQL\nPROJECTS\nInventory Tracker - Built with Python and SQL.\n";
        let records = segment_projects(text);
        assert_eq!(
            records,
            vec![ProjectRecord {
                title: "Inventory Tracker".to_string(),
                description: "Built with Python and SQL.".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_projects_heading_yields_empty() {
        let text = "SKILLS\nPython\nEDUCATION\nB.Sc in CS";
        assert!(segment_projects(text).is_empty());
    }

    #[test]
    fn test_fallback_heading_contains_project() {
        let text = "Things I built (projects)\nChat Server - An async chat server in Rust.\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Chat Server"]);
    }

    #[test]
    fn test_section_ends_at_education_heading() {
        let text = "PROJECTS\nPortfolio Site - Static site built with React and CSS.\nEDUCATION\nUniversity Timetable - not a project, lives under education\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Portfolio Site"]);
    }

    #[test]
    fn test_section_ends_at_degree_line() {
        let text =
            "PROJECTS\nLog Analyzer - Parses and aggregates server logs.\nB.Tech in Computer Science\nStray line\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Log Analyzer"]);
    }

    #[test]
    fn test_section_ends_at_horizontal_rule() {
        let text = "PROJECTS\nUrl Shortener - Tiny link service with Redis.\n--------\nOrphan line after rule\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Url Shortener"]);
    }

    #[test]
    fn test_section_ends_at_upper_case_heading_shape() {
        let text = "PROJECTS\nWiki Crawler - Crawls and indexes wiki pages.\nPOSITIONS HELD\nClass representative\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Wiki Crawler"]);
    }

    #[test]
    fn test_bulleted_list_produces_one_record_per_bullet() {
        let text = "PROJECTS\n• Expense Splitter - Splits group expenses fairly.\n• Recipe Finder - Search recipes by ingredients on hand.\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Expense Splitter", "Recipe Finder"]);
        assert_eq!(records[1].description, "Search recipes by ingredients on hand.");
    }

    #[test]
    fn test_description_lines_accumulate_under_title() {
        let text = "PROJECTS\nTraffic Simulator | Rust\nSimulates intersections with per-car agents.\nVisualizes congestion as a heatmap.\n";
        let records = segment_projects(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Traffic Simulator");
        assert_eq!(
            records[0].description,
            "Simulates intersections with per-car agents.\nVisualizes congestion as a heatmap."
        );
    }

    #[test]
    fn test_blank_line_preserved_as_paragraph_break() {
        let text = "PROJECTS\nNote Taking App | Flutter\nSyncs notes across devices.\n\nsupports offline editing with conflict resolution.\n";
        let records = segment_projects(text);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].description,
            "Syncs notes across devices.\n\nsupports offline editing with conflict resolution."
        );
    }

    #[test]
    fn test_title_case_line_after_blank_starts_new_record() {
        let text = "PROJECTS\nImage Resizer | Go\nBatch resizes images from the CLI.\n\nWeather Dashboard App\nShows hourly forecasts with charts.\n";
        let records = segment_projects(text);
        assert_eq!(
            titles(&records),
            vec!["Image Resizer", "Weather Dashboard App"]
        );
    }

    #[test]
    fn test_inline_pattern_mid_record_is_not_resplit() {
        let text = "PROJECTS\nCompiler Playground | Rust\nParses a toy language into an AST.\nBackend - emits stack machine bytecode for the VM.\n";
        let records = segment_projects(text);
        assert_eq!(records.len(), 1);
        assert!(records[0]
            .description
            .contains("Backend - emits stack machine bytecode for the VM."));
    }

    #[test]
    fn test_title_cleaning_strips_decoration_pipe_github_and_dates() {
        let text =
            "PROJECTS\n• Chat App | React GitHub: github.com/me/chat Jan 2022 - May 2022\nRealtime rooms over websockets.\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Chat App"]);
    }

    #[test]
    fn test_pure_date_and_github_description_lines_dropped() {
        let text = "PROJECTS\nStock Screener | Python\nJan 2023 - Jun 2023\ngithub.com/me/screener\nFilters tickers by fundamentals.\n";
        let records = segment_projects(text);
        assert_eq!(records[0].description, "Filters tickers by fundamentals.");
    }

    #[test]
    fn test_generic_label_stays_in_description() {
        let text = "PROJECTS\nFood Delivery Clone\nTech Stack: React, Node.js, MongoDB\nOrders flow from cart to live tracking.\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Food Delivery Clone"]);
        assert!(records[0].description.contains("Tech Stack: React"));
    }

    #[test]
    fn test_short_title_merges_lowercase_continuation() {
        let text = "PROJECTS\n1. Realtime\nchat platform with presence indicators\nHandles 10k concurrent connections.\n";
        let records = segment_projects(text);
        assert_eq!(
            titles(&records),
            vec!["Realtime chat platform with presence indicators"]
        );
        assert_eq!(records[0].description, "Handles 10k concurrent connections.");
    }

    #[test]
    fn test_empty_title_promotes_first_description_line() {
        let text = "PROJECTS\n1) https://github.com/me/scraper\nBuilt a concurrent web scraper in Rust.\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Built a concurrent web scraper in Rust."]);
    }

    #[test]
    fn test_hackathon_records_excluded() {
        let text = "PROJECTS\n• Smart Parking - Won first place at the campus hackathon.\n• Bus Tracker - Live GPS positions for campus buses.\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Bus Tracker"]);
    }

    #[test]
    fn test_hackathon_title_excluded_even_when_segmented() {
        let text = "PROJECTS\nHack-a-thon Entry 2023\nA submission we shipped in 24 hours.\n• Bus Tracker - Live GPS positions for campus buses.\n";
        let records = segment_projects(text);
        assert_eq!(titles(&records), vec!["Bus Tracker"]);
    }

    #[test]
    fn test_dedup_is_case_and_punctuation_insensitive() {
        let text = "PROJECTS\n• My App - First description of the app.\n• my app! - Second description that should be dropped.\n";
        let records = segment_projects(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "My App");
        assert_eq!(records[0].description, "First description of the app.");
    }

    #[test]
    fn test_long_title_truncated_with_ellipsis() {
        let long = "Very ".repeat(40) + "Long Project";
        let text = format!("PROJECTS\n• {long} - A project with an absurdly long name.\n");
        let records = segment_projects(&text);
        assert_eq!(records[0].title.chars().count(), MAX_TITLE_CHARS);
        assert!(records[0].title.ends_with('…'));
    }

    #[test]
    fn test_long_description_truncated_with_ellipsis() {
        let body = "data and metrics ".repeat(300);
        let text = format!("PROJECTS\nTelemetry Collector\n{body}\n");
        let records = segment_projects(&text);
        assert_eq!(records[0].title, "Telemetry Collector");
        assert_eq!(
            records[0].description.chars().count(),
            MAX_DESCRIPTION_CHARS
        );
        assert!(records[0].description.ends_with('…'));
    }

    #[test]
    fn test_title_starting_with_github_word_survives_cleaning() {
        let text = "PROJECTS\nGitHub Clone - A mini version control hosting service.\n";
        let records = segment_projects(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "GitHub Clone");
        assert_eq!(
            records[0].description,
            "A mini version control hosting service."
        );
    }

    #[test]
    fn test_short_description_bullets_normalized_to_single_marker() {
        // Short bulleted lines stay in the description and get a uniform marker.
        let text = "PROJECTS\nHome Automation Hub\nRuns on a Pi in the hallway.\n* Flask\n2) Redis\n";
        let records = segment_projects(text);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].description,
            "Runs on a Pi in the hallway.\n• Flask\n• Redis"
        );
    }

    #[test]
    fn test_empty_input_yields_empty() {
        assert!(segment_projects("").is_empty());
    }
}
