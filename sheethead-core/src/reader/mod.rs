//! Header row reader using calamine

use anyhow::Result;
use calamine::{Reader, open_workbook_auto};
use std::path::Path;
use tracing::debug;

use crate::error::HeaderError;

pub mod header_row;

pub use header_row::header_row;

/// Anything that can open a spreadsheet and yield its header row
pub trait HeaderSource {
    fn read_headers(&mut self, path: &Path) -> Result<Vec<String>>;
}

/// Reads the first row of the first worksheet through calamine
///
/// The format is picked from the file extension, so `.xlsx`, `.xlsm`, `.xlsb`,
/// `.xls` and `.ods` are all accepted.
#[derive(Debug, Default, Clone, Copy)]
pub struct CalamineSource;

impl HeaderSource for CalamineSource {
    fn read_headers(&mut self, path: &Path) -> Result<Vec<String>> {
        Ok(read_first_sheet_headers(path)?)
    }
}

/// Open a workbook and extract the header row of its first worksheet
///
/// The workbook handle is dropped before returning.
pub fn read_first_sheet_headers(path: &Path) -> Result<Vec<String>, HeaderError> {
    let mut workbook = open_workbook_auto(path).map_err(|source| HeaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    let Some(sheet) = sheet_names.first() else {
        return Err(HeaderError::NoWorksheet {
            path: path.to_path_buf(),
        });
    };

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|source| HeaderError::Worksheet {
            path: path.to_path_buf(),
            sheet: sheet.clone(),
            source,
        })?;

    let columns = header_row(&range);
    debug!(
        path = %path.display(),
        sheet = %sheet,
        columns = columns.len(),
        "Read header row"
    );
    Ok(columns)
}
