//! Application configuration file.
//!
//! ```toml
//! [validation]
//! past_limit_months = 3
//!
//! [headers]
//! "管理番号" = "serial_number"
//!
//! [labels]
//! serial_number = "通番"
//!
//! [store]
//! collection = "contracts"
//! max_in_flight = 16
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use xfer_model::{HeaderMapping, LabelMap, ValidationConfig};

/// Settings read from the optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub validation: ValidationConfig,
    /// Entries added to (or replacing) the standard header mapping.
    pub headers: HeaderMapping,
    /// Label overrides applied on top of the labels derived from headers.
    pub labels: LabelMap,
    pub store: StoreConfig,
}

/// Record-store lookup settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    pub collection: Option<String>,
    pub max_in_flight: Option<usize>,
}

/// Collection queried when neither the file nor the command line names one.
pub const DEFAULT_COLLECTION: &str = "contracts";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            validation: ValidationConfig::default(),
            headers: HeaderMapping::empty(),
            labels: LabelMap::new(),
            store: StoreConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).context("parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("load config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Standard mapping with the file's `[headers]` applied.
    pub fn header_mapping(&self) -> HeaderMapping {
        let mut mapping = HeaderMapping::default();
        mapping.merge(self.headers.clone());
        mapping
    }

    /// Labels derived from the effective header mapping plus `[labels]`.
    pub fn label_map(&self) -> LabelMap {
        let mut labels = LabelMap::from_header_mapping(&self.header_mapping());
        labels.merge(self.labels.clone());
        labels
    }

    pub fn collection(&self) -> &str {
        self.store.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }
}
