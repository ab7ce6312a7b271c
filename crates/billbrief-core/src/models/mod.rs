//! Data models for bill processing.

pub mod config;
pub mod report;

pub use config::{BillbriefConfig, OcrConfig, ReportConfig};
pub use report::{Document, MediaKind, ReportResult};
