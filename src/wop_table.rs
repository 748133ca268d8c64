//! Reader for the pipe-separated mark-composite write operation table.
//!
//! ```text
//! | n                       | Sieve-Eratosthenes      | Sieve-iZ                | Sieve-iZm
//! | 1000                    | 902                     | 197                     | 86
//! ```

use tracing::debug;

use crate::error::{ReportError, Result};
use crate::schema::{Cell, Column, WOpTable};
use crate::text;

pub const FIELD_DELIMITER: char = '|';

/// Strips at most one delimiter on each end, then splits and trims.
fn split_fields(line: &str) -> Vec<&str> {
    let line = line.strip_prefix(FIELD_DELIMITER).unwrap_or(line);
    let line = line.strip_suffix(FIELD_DELIMITER).unwrap_or(line);
    line.split(FIELD_DELIMITER)
        .map(str::trim)
        .collect()
}

fn cell(field: &str) -> Cell {
    match text::all_digits(field) {
        Some(v) => Cell::Int(v),
        None => Cell::Text(field.to_string()),
    }
}

/// Parse a pipe table into columns.
///
/// The first non-blank line is the header. Rows whose field count differs
/// from the header are skipped. A header naming the same column twice is
/// rejected.
pub fn parse_wop_table(input: &str) -> Result<WOpTable> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let Some((_, header)) = lines.next() else {
        return Ok(WOpTable::default());
    };

    let mut columns: Vec<Column> = Vec::new();
    for (position, name) in split_fields(header).into_iter().enumerate() {
        if columns.iter().any(|c| c.name == name) {
            return Err(ReportError::DuplicateColumn {
                name: name.to_string(),
                position,
            });
        }
        columns.push(Column {
            name: name.to_string(),
            values: Vec::new(),
        });
    }

    for (line_no, line) in lines {
        let fields = split_fields(line);
        if fields.len() != columns.len() {
            debug!(
                line = line_no,
                expected = columns.len(),
                found = fields.len(),
                "skipping row with mismatched field count"
            );
            continue;
        }
        for (column, field) in columns.iter_mut().zip(fields) {
            column.values.push(cell(field));
        }
    }

    Ok(WOpTable { columns })
}
