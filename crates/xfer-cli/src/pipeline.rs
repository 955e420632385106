//! Import pipeline: parse, look up registered serials, validate.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info_span;

use xfer_ingest::{parse_csv_table, read_csv_text};
use xfer_model::{HeaderMapping, LabelMap, Row, ValidationConfig};
use xfer_store::{CheckStats, DuplicateChecker, MemoryStore, RecordStore};
use xfer_validate::{ValidationEngine, ValidationReport};

use crate::config::AppConfig;

/// Everything one pipeline run needs.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub mapping: HeaderMapping,
    pub labels: LabelMap,
    pub validation: ValidationConfig,
    pub checker: DuplicateChecker,
    /// Fixed reference time; the clock is read when unset.
    pub now: Option<NaiveDateTime>,
}

impl PipelineOptions {
    /// Options from a loaded configuration, without a record store.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            mapping: config.header_mapping(),
            labels: config.label_map(),
            validation: config.validation.clone(),
            checker: DuplicateChecker::disabled(),
            now: None,
        }
    }

    #[must_use]
    pub fn with_store(
        mut self,
        store: Arc<dyn RecordStore>,
        collection: &str,
        max_in_flight: Option<usize>,
    ) -> Self {
        let checker = DuplicateChecker::new(store, collection);
        self.checker = match max_in_flight {
            Some(limit) => checker.with_max_in_flight(limit),
            None => checker,
        };
        self
    }

    #[must_use]
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    fn engine(&self) -> ValidationEngine {
        let engine = ValidationEngine::new(self.validation.clone(), self.labels.clone());
        match self.now {
            Some(now) => engine.with_now(now),
            None => engine,
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Canonical keys in CSV column order.
    pub columns: Vec<String>,
    /// Annotated rows in input order.
    pub rows: Vec<Row>,
    pub report: ValidationReport,
    pub store_stats: CheckStats,
}

impl PipelineOutput {
    pub fn has_failures(&self) -> bool {
        self.report.has_failures()
    }

    /// Annotated rows together with the typed per-row issues, as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        let document = JsonDocument {
            rows: &self.rows,
            report: &self.report,
        };
        serde_json::to_string_pretty(&document).context("serialize report")
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    rows: &'a [Row],
    report: &'a ValidationReport,
}

/// Runs the whole import over CSV text.
///
/// Only a header line without any known column is an error; rule violations
/// and failed store lookups end up in the output.
pub async fn run_pipeline(text: &str, options: &PipelineOptions) -> Result<PipelineOutput> {
    let table = info_span!("parse")
        .in_scope(|| parse_csv_table(text, &options.mapping))
        .context("parse CSV")?;

    let (rows, store_stats) = options.checker.check_with_stats(table.rows).await;

    let (rows, report) =
        info_span!("validate").in_scope(|| options.engine().validate_with_report(&rows));

    Ok(PipelineOutput {
        columns: table.columns,
        rows,
        report,
        store_stats,
    })
}

/// Reads `path` and runs the import over it.
pub async fn run_pipeline_file(path: &Path, options: &PipelineOptions) -> Result<PipelineOutput> {
    let text = read_csv_text(path).with_context(|| format!("read {}", path.display()))?;
    run_pipeline(&text, options)
        .await
        .with_context(|| format!("import {}", path.display()))
}

/// Registered records from a JSON export, for `--registered`.
pub fn load_registered(path: &Path, collection: &str) -> Result<Arc<dyn RecordStore>> {
    let store = MemoryStore::load_json(path, collection)
        .with_context(|| format!("load registered records {}", path.display()))?;
    Ok(Arc::new(store))
}
