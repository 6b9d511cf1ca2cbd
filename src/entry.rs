// 📋 Event Entry - the normalized report record
// Shared by both pipelines: one entry per recognized event

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// CSV LAYOUT
// ============================================================================

/// Header row of the generated report, in output order
pub const HEADERS: [&str; 4] = ["Fecha", "Autor", "Colectivo", "Texto"];

/// Código de colectivo: a parenthesized 6-digit run inside the event text,
/// e.g. "(123456)". Longer digit runs do not qualify.
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((\d{6})\)").unwrap());

// ============================================================================
// ENTRY
// ============================================================================

/// One normalized event: date, author, optional colectivo code, text.
///
/// Entries carry no identity beyond their position in the output; they are
/// produced by a parser, serialized once and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEntry {
    /// ISO-8601 timestamp, seconds precision (or the invalid-date sentinel)
    pub date: String,
    pub author: String,
    /// Event text, already trimmed of surrounding whitespace
    pub text: String,
    /// First parenthesized 6-digit code found in `text`, if any
    pub code: Option<String>,
}

impl EventEntry {
    /// Build an entry, extracting the optional code from the text.
    pub fn new(date: String, author: String, text: String) -> Self {
        let code = extract_code(&text);
        EventEntry {
            date,
            author,
            text,
            code,
        }
    }

    /// Fields in CSV output order: Fecha, Autor, Colectivo, Texto.
    /// A missing code serializes as an empty Colectivo field.
    pub fn to_record(&self) -> [&str; 4] {
        [
            &self.date,
            &self.author,
            self.code.as_deref().unwrap_or(""),
            &self.text,
        ]
    }
}

/// Extract the colectivo code from event text. First match wins.
pub fn extract_code(text: &str) -> Option<String> {
    CODE_RE.captures(text).map(|caps| caps[1].to_string())
}

// ============================================================================
// TESTS
// ============================================================================
