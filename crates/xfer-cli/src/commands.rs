use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use xfer_cli::config::AppConfig;
use xfer_cli::pipeline::{PipelineOptions, PipelineOutput, load_registered, run_pipeline_file};

use crate::cli::{CheckArgs, HeadersArgs, ReportFormatArg};
use crate::summary::{apply_table_style, print_json, print_summary};

/// Outcome of `xfer check`.
pub struct CheckOutcome {
    pub csv: PathBuf,
    pub output: PipelineOutput,
}

impl CheckOutcome {
    pub fn has_failures(&self) -> bool {
        self.output.has_failures()
    }
}

pub async fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let config = AppConfig::load_optional(args.config.as_deref())?;
    let mut options = PipelineOptions::from_config(&config);

    if let Some(path) = &args.registered {
        let collection = args
            .collection
            .as_deref()
            .unwrap_or_else(|| config.collection());
        let store = load_registered(path, collection)?;
        let max_in_flight = args.max_in_flight.or(config.store.max_in_flight);
        options = options.with_store(store, collection, max_in_flight);
    } else {
        tracing::info!("no registered records given; skipping store lookup");
    }

    let output = run_pipeline_file(&args.csv, &options).await?;

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&output.rows).context("serialize rows")?;
        fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        tracing::info!(path = %path.display(), rows = output.rows.len(), "wrote annotated rows");
    }

    let outcome = CheckOutcome {
        csv: args.csv.clone(),
        output,
    };
    match args.format {
        ReportFormatArg::Table => print_summary(&outcome, &options.labels),
        ReportFormatArg::Json => print_json(&outcome.output)?,
    }
    Ok(outcome)
}

pub fn run_headers(args: &HeadersArgs) -> Result<()> {
    let config = AppConfig::load_optional(args.config.as_deref())?;
    let mapping = config.header_mapping();

    let mut table = Table::new();
    table.set_header(vec!["Header", "Field"]);
    apply_table_style(&mut table);
    for (header, key) in mapping.entries() {
        let key = if key.is_empty() { "(ignored)" } else { key };
        table.add_row(vec![header, key]);
    }
    println!("{table}");
    Ok(())
}
