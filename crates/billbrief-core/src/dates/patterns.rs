//! Regex patterns and keywords for due-date extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Phrases that mark a line as likely to contain the payment due date.
/// Matched case-insensitively as substrings. English-only on purpose; see
/// the known-limitation note in DESIGN.md.
pub const DUE_KEYWORDS: [&str; 5] = ["due date", "pay by", "payment due", "bill due", "date due"];

lazy_static! {
    /// ISO format: 2024-03-15
    pub static ref DATE_ISO: Regex = Regex::new(r"(\d{4}-\d{2}-\d{2})").unwrap();

    /// US slash format: 03/15/2024
    pub static ref DATE_SLASH: Regex = Regex::new(r"(\d{2}/\d{2}/\d{4})").unwrap();

    /// US dashed format: 03-15-2024
    pub static ref DATE_DASHED: Regex = Regex::new(r"(\d{2}-\d{2}-\d{4})").unwrap();

    /// Long format: March 15, 2024
    pub static ref DATE_LONG: Regex = Regex::new(r"([A-Za-z]+ \d{1,2}, \d{4})").unwrap();

    /// Day-first long format: 15 March 2024
    pub static ref DATE_DAY_FIRST: Regex = Regex::new(r"(\d{1,2} [A-Za-z]+ \d{4})").unwrap();

    /// All date patterns in priority order. Within a single scan the first
    /// pattern with a semantically valid match wins, so ISO beats slash
    /// regardless of position in the text.
    pub static ref DATE_PATTERNS: [&'static Regex; 5] = [
        &DATE_ISO,
        &DATE_SLASH,
        &DATE_DASHED,
        &DATE_LONG,
        &DATE_DAY_FIRST,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_does_not_match_us_dashed() {
        assert!(DATE_ISO.is_match("2024-03-15"));
        assert!(!DATE_ISO.is_match("03-15-2024"));
    }

    #[test]
    fn dashed_does_not_match_iso() {
        assert!(DATE_DASHED.is_match("03-15-2024"));
        assert!(!DATE_DASHED.is_match("2024-03-15"));
    }

    #[test]
    fn long_forms_capture_whole_date() {
        let caps = DATE_LONG.captures("Payment due by March 15, 2024 at noon").unwrap();
        assert_eq!(&caps[1], "March 15, 2024");

        let caps = DATE_DAY_FIRST.captures("pay before 5 March 2024 please").unwrap();
        assert_eq!(&caps[1], "5 March 2024");
    }
}
