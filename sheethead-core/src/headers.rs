//! Header sets extracted from template workbooks

use std::fmt;

/// Which template a header set was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLabel {
    Extraction,
    Tinting,
}

impl SourceLabel {
    /// Prefix printed in front of the joined column names
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLabel::Extraction => "EXTRACTION_HEADERS",
            SourceLabel::Tinting => "TINTING_HEADERS",
        }
    }
}

impl fmt::Display for SourceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered column names from the first row of one workbook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSet {
    pub source_label: SourceLabel,
    /// Left-to-right column order, duplicates kept
    pub columns: Vec<String>,
}

impl HeaderSet {
    pub fn new(source_label: SourceLabel, columns: Vec<String>) -> Self {
        Self {
            source_label,
            columns,
        }
    }
}

impl fmt::Display for HeaderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source_label, self.columns.join(","))
    }
}
