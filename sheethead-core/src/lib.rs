//! sheethead-core: header row reporting for spreadsheet templates
//!
//! Reads the first row of each configured template workbook and renders it as a
//! labelled, comma-separated report line.

pub mod config;
pub mod error;
pub mod headers;
pub mod reader;
pub mod report;

pub use config::ReporterConfig;
pub use error::HeaderError;
pub use headers::{HeaderSet, SourceLabel};
pub use reader::{CalamineSource, HeaderSource};
pub use report::{HeaderReporter, ReportLine, RunOutcome};
