//! Reading CSV files from disk.

use std::path::Path;

use xfer_model::HeaderMapping;

use crate::csv::{CsvTable, parse_csv_table};
use crate::error::{IngestError, Result};

/// Reads a UTF-8 CSV file and parses it with `mapping`.
pub fn read_csv_file(path: &Path, mapping: &HeaderMapping) -> Result<CsvTable> {
    let text = read_csv_text(path)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read CSV file");
    parse_csv_table(&text, mapping)
}

/// Reads a file as UTF-8 text.
pub fn read_csv_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    String::from_utf8(bytes).map_err(|_| IngestError::InvalidEncoding {
        path: path.to_path_buf(),
    })
}
