//! Data model shared by the import crates.

pub mod config;
pub mod fields;
pub mod labels;
pub mod mapping;
pub mod row;

pub use config::ValidationConfig;
pub use labels::LabelMap;
pub use mapping::HeaderMapping;
pub use row::Row;
