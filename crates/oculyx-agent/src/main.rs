//! Oculyx: ophthalmic cohort statistics and explainability tables.
//! Entry point: ingest the configured workbook, aggregate it and print the
//! cohort summary plus the selected disease's feature tables as JSON.

mod config;
mod report;

use anyhow::Context;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::{Config, SourceKind};
use oculyx_ingestion::sources::{FileSource, HttpSource, WorkbookSource};
use report::{ExplainView, Report};

fn build_source(config: &Config) -> anyhow::Result<Box<dyn WorkbookSource>> {
    let source: Box<dyn WorkbookSource> = match config.source.kind {
        SourceKind::Http => Box::new(HttpSource::with_timeout(
            config.source.url.clone(),
            Duration::from_secs(config.source.timeout_secs),
        )?),
        SourceKind::File => Box::new(FileSource::new(config.source.path.clone())),
    };
    Ok(source)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Could not load oculyx.toml")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Oculyx starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Resolve the disease selection first so a bad code fails before any I/O.
    let entry = oculyx_explain::lookup_str(&config.explain.disease)
        .with_context(|| format!("explain.disease = {:?}", config.explain.disease))?;

    let source = build_source(&config)?;
    let ingested = match oculyx_ingestion::ingest(source.as_ref()).await {
        Ok(ingested) => ingested,
        Err(e) => {
            if e.is_transient() {
                warn!("Workbook source unavailable; re-run to retry");
            }
            return Err(e).context("Cohort ingestion failed");
        }
    };

    let cohort = oculyx_cohort::aggregate(&ingested.records);
    match cohort.summary() {
        Some(s) => info!(sample_size = s.sample_size, mean_age = s.mean_age, "Cohort summary ready"),
        None => warn!(rows = ingested.rows_read(), "Insufficient data: no valid records in workbook"),
    }

    let report = Report {
        rows_read: ingested.rows_read(),
        sheet: ingested.sheet,
        cohort,
        catalogue: report::catalogue(),
        explain: ExplainView::new(entry),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
