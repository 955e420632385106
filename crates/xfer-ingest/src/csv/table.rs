//! Whole-document parsing into mapped rows.

use xfer_model::{HeaderMapping, Row};

use crate::error::{IngestError, Result};

use super::line::parse_csv_line;

/// Parsed CSV document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Canonical keys in header order, ignored columns removed.
    pub columns: Vec<String>,
    /// One row per non-blank data line.
    pub rows: Vec<Row>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parses CSV text into rows keyed by canonical field key.
pub fn parse_csv(text: &str, mapping: &HeaderMapping) -> Result<Vec<Row>> {
    parse_csv_table(text, mapping).map(|table| table.rows)
}

/// Parses CSV text and keeps the column order of the header line.
///
/// Text with fewer than two lines yields an empty table. Headers without a
/// mapping are dropped; if none map at all the header line is rejected.
/// Short data lines are padded with empty values, surplus values are ignored.
pub fn parse_csv_table(text: &str, mapping: &HeaderMapping) -> Result<CsvTable> {
    let text = text.trim_start_matches('\u{feff}').trim();
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.len() < 2 {
        tracing::debug!(lines = lines.len(), "no data lines in CSV text");
        return Ok(CsvTable::default());
    }

    let raw_headers = parse_csv_line(lines[0]);
    let keys: Vec<Option<&str>> = raw_headers
        .iter()
        .map(|header| mapping.resolve(header))
        .collect();

    if keys.iter().all(Option::is_none) {
        return Err(IngestError::HeaderMapping {
            headers: raw_headers,
        });
    }

    for (header, key) in raw_headers.iter().zip(&keys) {
        if key.is_none() {
            tracing::debug!(header = %header, "ignoring unmapped column");
        }
    }

    let mut columns: Vec<String> = Vec::new();
    for key in keys.iter().flatten() {
        if !columns.iter().any(|column| column == key) {
            columns.push((*key).to_string());
        }
    }

    let mut rows = Vec::with_capacity(lines.len() - 1);
    for line in &lines[1..] {
        if line.trim().is_empty() {
            continue;
        }
        let values = parse_csv_line(line);
        let mut row = Row::new();
        for (idx, key) in keys.iter().enumerate() {
            if let Some(key) = key {
                let value = values.get(idx).map(String::as_str).unwrap_or("");
                row.insert(*key, value);
            }
        }
        rows.push(row);
    }

    tracing::info!(
        rows = rows.len(),
        columns = columns.len(),
        ignored = keys.iter().filter(|key| key.is_none()).count(),
        "parsed CSV"
    );
    Ok(CsvTable { columns, rows })
}
