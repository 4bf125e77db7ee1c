//! Errors raised while pulling a header row out of a workbook

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeaderError {
    /// calamine could not open or recognise the file
    #[error("Failed to open workbook {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Workbook {} contains no worksheets", .path.display())]
    NoWorksheet { path: PathBuf },

    /// The first worksheet exists but could not be decoded
    #[error("Failed to read worksheet '{sheet}' in {}", .path.display())]
    Worksheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}
