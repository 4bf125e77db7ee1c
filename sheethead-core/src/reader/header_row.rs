//! Turning the top of a calamine range into column names

use calamine::{Data, Range};

/// Extract the header row from a worksheet range
///
/// The first row holding any non-blank cell is the header row. Columns are
/// counted from column A, even when the range starts further right, and every
/// blank cell is named `Unnamed: <index>` after its absolute column index.
/// An empty range yields no columns.
pub fn header_row(range: &Range<Data>) -> Vec<String> {
    let Some(row) = range.rows().find(|row| row.iter().any(|cell| !is_blank(cell))) else {
        return Vec::new();
    };
    let first_col = range.start().map_or(0, |(_, col)| col as usize);

    let leading = (0..first_col).map(unnamed);
    let cells = row.iter().enumerate().map(|(offset, cell)| {
        if is_blank(cell) {
            unnamed(first_col + offset)
        } else {
            cell_text(cell)
        }
    });
    leading.chain(cells).collect()
}

fn unnamed(index: usize) -> String {
    format!("Unnamed: {}", index)
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        // f64 Display already drops a zero fraction (1.0 -> "1")
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        // Serial numbers become `YYYY-MM-DD HH:MM:SS`; durations keep the raw value
        Data::DateTime(dt) if dt.is_datetime() => dt
            .as_datetime()
            .map_or_else(|| dt.as_f64().to_string(), |value| value.to_string()),
        other => other.to_string(),
    }
}
