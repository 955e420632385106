//! CSV parsing.

mod line;
mod table;

pub use line::{parse_csv_line, unescape_value};
pub use table::{CsvTable, parse_csv, parse_csv_table};
