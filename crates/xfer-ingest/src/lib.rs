//! CSV ingestion for contract-transfer imports.
//!
//! Turns the text of a spreadsheet export into [`Row`](xfer_model::Row)s keyed
//! by canonical field keys.
//!
//! # Example
//!
//! ```
//! use xfer_ingest::parse_csv;
//! use xfer_model::HeaderMapping;
//!
//! let text = "#通番,顧客名\nA-1,\"山田, 太郎\"\n";
//! let rows = parse_csv(text, &HeaderMapping::default())?;
//! assert_eq!(rows[0].get("customer_name"), "山田, 太郎");
//! # Ok::<(), xfer_ingest::IngestError>(())
//! ```

mod csv;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use csv::{CsvTable, parse_csv, parse_csv_line, parse_csv_table, unescape_value};

// === File Reading ===
pub use reader::{read_csv_file, read_csv_text};
