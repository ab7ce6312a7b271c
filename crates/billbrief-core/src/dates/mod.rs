//! Due-date inference rules.

mod heuristic;
mod parse;
pub mod patterns;

pub use heuristic::{DueDateExtractor, HeuristicDateExtractor};
pub use parse::parse_fuzzy;
