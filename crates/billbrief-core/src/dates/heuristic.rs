//! Keyword-driven heuristic due-date extraction.

use chrono::NaiveDate;
use tracing::debug;

use super::parse::parse_fuzzy;
use super::patterns::{DATE_PATTERNS, DUE_KEYWORDS};

/// A due-date extraction strategy over plain text.
///
/// The pipeline consults strategies in a fixed order and stops at the first
/// one that yields a date, so tier ordering stays declarative and each tier
/// is testable in isolation.
pub trait DueDateExtractor: Send + Sync {
    fn find_date(&self, text: &str) -> Option<NaiveDate>;
}

/// Regex-and-keyword due-date extractor.
///
/// Keyword proximity is the primary signal: a date on a "due date" / "pay by"
/// line is almost certainly the payment due date, while dates elsewhere may
/// be invoice dates or billing periods. The whole-text fallback trades that
/// precision for recall when no keyword line exists.
pub struct HeuristicDateExtractor;

impl HeuristicDateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Try each pattern in priority order against one piece of text.
    ///
    /// Per pattern only the first syntactic match is considered; a match
    /// that fails calendar validation is skipped, not fatal.
    fn scan(text: &str) -> Option<NaiveDate> {
        for pattern in DATE_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(text) {
                if let Ok(date) = parse_fuzzy(&caps[1]) {
                    return Some(date);
                }
            }
        }
        None
    }
}

impl Default for HeuristicDateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DueDateExtractor for HeuristicDateExtractor {
    fn find_date(&self, text: &str) -> Option<NaiveDate> {
        for line in text.lines() {
            let lower = line.to_lowercase();
            if DUE_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
                if let Some(date) = Self::scan(line) {
                    debug!("due date {date} found on keyword line");
                    return Some(date);
                }
            }
        }

        // No keyword line produced a date; scan the unrestricted text.
        if let Some(date) = Self::scan(text) {
            debug!("due date {date} found by whole-text scan");
            return Some(date);
        }

        None
    }
}
