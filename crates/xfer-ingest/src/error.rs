//! Error types for CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning CSV input into rows.
#[derive(Debug, Error)]
pub enum IngestError {
    /// None of the header cells matched the header mapping.
    ///
    /// Usually the wrong file was chosen, or the text was decoded with the
    /// wrong character set so the Japanese titles came out garbled.
    #[error(
        "no valid headers found (saw: {}); check the CSV header names, or whether the file is a Japanese Excel (Shift-JIS) export that must be converted to UTF-8 first",
        .headers.join(", ")
    )]
    HeaderMapping { headers: Vec<String> },

    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8.
    #[error(
        "{path} is not valid UTF-8; Japanese Excel exports are usually Shift-JIS and must be converted first"
    )]
    InvalidEncoding { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/file.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/file.csv");
    }

    #[test]
    fn test_header_mapping_lists_seen_headers() {
        let err = IngestError::HeaderMapping {
            headers: vec!["a".to_string(), "b".to_string()],
        };
        let message = err.to_string();
        assert!(message.starts_with("no valid headers found (saw: a, b)"));
        assert!(message.contains("Shift-JIS"));
    }
}
