//! Past-paper listing classifier.
//!
//! Turns one scraped anchor (label text + href) into a structured
//! [`PaperRecord`]. The extraction heuristics are tuned to the label formats
//! used by the gsebeservice.com question-paper page; this is best-effort
//! classification of one specific source, not a general text parser.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{PaperRecord, RawListing};

/// Classifier for scraped past-paper listings.
///
/// Stateless apart from the base origin used to absolutize relative hrefs.
/// All pattern tables are compiled once per process and only read afterwards,
/// so `classify` is safe to call concurrently.
pub struct PaperClassifier {
    base_url: String,
}

impl PaperClassifier {
    /// Create a classifier that resolves relative hrefs against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Classify one listing.
    pub fn classify_listing(&self, listing: &RawListing) -> Result<PaperRecord> {
        self.classify(&listing.text, &listing.href)
    }

    /// Classify one anchor's text and href into a complete record.
    ///
    /// Missing year/month/board come back as empty strings, an unresolved
    /// subject as `"Unknown"` and a missing grade as `"10"`; none of those
    /// are errors. `Err` means the listing should be dropped.
    pub fn classify(&self, text: &str, href: &str) -> Result<PaperRecord> {
        let text = text.trim();
        let href = href.trim();
        if text.is_empty() || href.is_empty() {
            return Err(AppError::parse("classify", "blank listing text or href"));
        }

        // Only the first ordinal prefix (e.g. "12) ") is removed.
        let title = ordinal_prefix_re().replace(text, "").into_owned();

        Ok(PaperRecord {
            url: self.resolve_url(href),
            year: Self::extract_year(&title),
            month: Self::extract_month(&title),
            board: Self::extract_board(&title),
            subject: Self::extract_subject(&title),
            grade: Self::extract_grade(&title),
            title,
        })
    }

    /// Year extraction, strict priority order: parenthesized four digits,
    /// then any 2000-2039 run, then four digits after a dash.
    fn extract_year(text: &str) -> String {
        for re in year_patterns() {
            if let Some(found) = re.captures(text).and_then(|caps| caps.get(1)) {
                return found.as_str().to_string();
            }
        }
        String::new()
    }

    /// First month name or abbreviation in the text, as matched.
    ///
    /// Abbreviations are listed before full names, so "January" yields
    /// "Jan". That mirrors how the source labels are written.
    fn extract_month(text: &str) -> String {
        month_re()
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn extract_board(text: &str) -> String {
        for (re, board) in board_table() {
            if re.is_match(text) {
                return (*board).to_string();
            }
        }

        // Grade-10 papers on this page are Gujarat board unless marked.
        if text.to_lowercase().contains("10th") {
            return "Gujarat".to_string();
        }

        String::new()
    }

    fn extract_subject(text: &str) -> String {
        // Known keywords first. Table order is the tie-break: more specific
        // keys (e.g. "Sc. & Tech") come before generic ones ("Science").
        let lowered = text.to_lowercase();
        for (keyword, subject) in subject_keywords() {
            if lowered.contains(keyword.as_str()) {
                return (*subject).to_string();
            }
        }

        // Positional fallback: each pattern gets one attempt, first
        // plausible capture wins.
        for re in subject_patterns() {
            let Some(found) = re.captures(text).and_then(|caps| caps.get(1)) else {
                continue;
            };
            let cleaned = normalize_candidate(found.as_str());
            if is_plausible_subject(&cleaned) {
                return cleaned;
            }
        }

        "Unknown".to_string()
    }

    /// Grade digits before "th" or after "Class"/"Grade", defaulting to 10.
    fn extract_grade(text: &str) -> String {
        if let Some(caps) = grade_re().captures(text) {
            // The three alternation groups are concatenated; at most one
            // participates per match (see tests).
            let digits: String = (1..=3)
                .filter_map(|i| caps.get(i))
                .map(|m| m.as_str())
                .collect();
            if !digits.is_empty() {
                return digits;
            }
        }
        "10".to_string()
    }

    fn resolve_url(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{}{}", self.base_url, href)
        }
    }
}

/// Trim, strip one surrounding parenthesis pair and collapse whitespace.
fn normalize_candidate(raw: &str) -> String {
    let stripped = paren_edge_re().replace_all(raw.trim(), "");
    whitespace_re()
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}

/// Reject captures that are too short, all digits, or just a medium marker.
fn is_plausible_subject(candidate: &str) -> bool {
    candidate.len() > 2 && !subject_reject_re().is_match(candidate)
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static pattern must compile")
}

fn ordinal_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| pattern(r"^\d+\)\s*"))
}

fn year_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // Four digits inside a parenthesized group
            r"\(.*?(\d{4})\)",
            // Any four-digit run in the 2000-2039 range
            r"(20[0-3]\d)",
            // Four digits after a dash/en-dash/em-dash
            r"[-\u{2013}\u{2014}]\s*(\d{4})",
        ]
        .iter()
        .map(|p| pattern(p))
        .collect()
    })
}

fn month_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        pattern(
            r"(?i)Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|January|February|March|April|June|July|August|September|October|November|December",
        )
    })
}

/// Ordered (pattern, canonical board) table. Match order is a documented
/// tie-break, so this stays an ordered list rather than a map.
fn board_table() -> &'static [(Regex, &'static str)] {
    static TABLE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            (r"(?i)Guj\s*MED", "Gujarat"),
            (r"(?i)ENG\s*MED", "English"),
            (r"(?i)Hindi\s*MED", "Hindi"),
            (r"(?i)English\s*Medium", "English"),
            (r"(?i)Gujarati\s*Medium", "Gujarat"),
            (r"(?i)Hindi\s*Medium", "Hindi"),
            (r"(?i)GSEB", "Gujarat"),
            (r"(?i)Gujarat", "Gujarat"),
            (r"(?i)Gujarati", "Gujarat"),
            (r"(?i)English", "English"),
        ]
        .into_iter()
        .map(|(p, board)| (pattern(p), board))
        .collect()
    })
}

/// Ordered (lowercased keyword, canonical subject) table.
fn subject_keywords() -> &'static [(String, &'static str)] {
    static TABLE: OnceLock<Vec<(String, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        [
            ("Gujarati", "Gujarati"),
            ("Guj F.L", "Gujarati"),
            ("Guj FL", "Gujarati"),
            ("English", "English"),
            ("English F.L", "English"),
            ("English FL", "English"),
            ("Social Science", "Social Science"),
            ("Sc. & Tech", "Science and Technology"),
            ("Science & Technology", "Science and Technology"),
            ("Science", "Science"),
            ("Mathematics", "Mathematics"),
            ("Maths", "Mathematics"),
            ("Math", "Mathematics"),
            ("Hindi", "Hindi"),
            ("Sanskrit", "Sanskrit"),
            ("Computer", "Computer Science"),
            ("Physics", "Physics"),
            ("Chemistry", "Chemistry"),
            ("Biology", "Biology"),
        ]
        .into_iter()
        .map(|(key, subject)| (key.to_lowercase(), subject))
        .collect()
    })
}

/// Positional subject extraction patterns, in priority order. These encode
/// overlapping heuristics over inconsistently formatted labels; do not
/// reorder or generalize them.
fn subject_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            // After a parenthesized year and optional paper number
            r"(?i)\d{4}\)\s*\d*[-\s]*([A-Za-z\s&.]+?)(?:\s*\(|\s*10th|\s*$)",
            // After a medium/board marker
            r"(?i)(?:MED|Medium)\s+([A-Za-z\s&.]+?)(?:\s*\(|\s*$)",
            // After grade plus medium markers
            r"(?i)10th\s+(?:Guj|ENG|Hindi)?\s*(?:MED)?\s*([A-Za-z\s&.]+?)(?:\s*\(|\s*$)",
            // Between a closing parenthesis and a later grade marker
            r"(?i)\)\s*([A-Za-z\s&.]+?)(?:\s*10th|\s*\(|\s*$)",
            // After any bare number
            r"(?i)\d+\s*[-)]?\s*([A-Za-z\s&.]{3,})(?:\s*\(|\s*10th|\s*$)",
        ]
        .iter()
        .map(|p| pattern(p))
        .collect()
    })
}

fn subject_reject_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| pattern(r"(?i)^\d+$|^MED$|^Medium$"))
}

fn paren_edge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| pattern(r"^\(|\)$"))
}

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| pattern(r"\s+"))
}

fn grade_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| pattern(r"(?i)(\d{1,2})th|Class\s*(\d{1,2})|Grade\s*(\d{1,2})"))
}
