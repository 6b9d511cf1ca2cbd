// 📅 Date parsing and reformatting
// Both source formats are normalized to ISO-8601, seconds precision

use chrono::NaiveDateTime;

/// Transcript marker format: day/month/2-digit-year hour:minute ("1/2/20 10:30").
/// Unpadded day and month are accepted.
const TRANSCRIPT_FORMAT: &str = "%d/%m/%y %H:%M";

/// Database export format: "20200101103000.000" (fractional seconds included)
const EXPORT_FORMAT: &str = "%Y%m%d%H%M%S%.3f";

/// ISO-8601 output, seconds precision
const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sentinel emitted when a source date cannot be parsed.
/// NOTA: compatibilidad con el generador anterior - los consumidores del
/// informe buscan este literal, so an unparseable date never aborts the run.
pub const INVALID_DATE: &str = "Invalid Date";

/// Reformat a transcript date ("1/2/20 10:30" → "2020-02-01T10:30:00").
pub fn from_transcript(text: &str) -> String {
    reformat(text.trim(), TRANSCRIPT_FORMAT)
}

/// Reformat an export date ("20200101103000.000" → "2020-01-01T10:30:00").
pub fn from_export(text: &str) -> String {
    reformat(text.trim(), EXPORT_FORMAT)
}

fn reformat(text: &str, format: &str) -> String {
    match NaiveDateTime::parse_from_str(text, format) {
        Ok(date) => date.format(OUTPUT_FORMAT).to_string(),
        Err(_) => INVALID_DATE.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
