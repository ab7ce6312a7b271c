//! Fuzzy date parsing.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::DATE_PATTERNS;
use crate::error::DateError;

lazy_static! {
    static ref LONG_PARTS: Regex = Regex::new(r"^([A-Za-z]+) (\d{1,2}), (\d{4})$").unwrap();
    static ref DAY_FIRST_PARTS: Regex = Regex::new(r"^(\d{1,2}) ([A-Za-z]+) (\d{4})$").unwrap();
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse a free-text date expression, tolerating surrounding words.
///
/// Patterns are tried in the same priority order the heuristic extractor
/// uses; per pattern only the first syntactic match is considered, and a
/// match that fails calendar validation (month 13, Feb 30) falls through to
/// the next pattern. All accepted shapes carry a full year/month/day, so
/// resolution is deterministic with no defaulting.
pub fn parse_fuzzy(text: &str) -> Result<NaiveDate, DateError> {
    for pattern in DATE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(date) = parse_candidate(&caps[1]) {
                return Ok(date);
            }
        }
    }
    Err(DateError::Unparseable(text.to_string()))
}

/// Parse a candidate string already isolated by one of the date patterns.
fn parse_candidate(candidate: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(candidate, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(candidate, "%m/%d/%Y") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(candidate, "%m-%d-%Y") {
        return Some(date);
    }
    if let Some(caps) = LONG_PARTS.captures(candidate) {
        return from_parts(&caps[3], &caps[1], &caps[2]);
    }
    if let Some(caps) = DAY_FIRST_PARTS.captures(candidate) {
        return from_parts(&caps[3], &caps[2], &caps[1]);
    }
    None
}

fn from_parts(year: &str, month_name: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month = month_number(month_name)?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// English month name to number; accepts full names and prefixes of at
/// least three letters ("Mar", "Sept").
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_ascii_lowercase();
    if name.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|month| month.starts_with(name.as_str()))
        .map(|index| index as u32 + 1)
}
