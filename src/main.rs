use crate::config::Config;
use crate::domain::storage::Ledger;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{get_extractor, CsvLedger, ImageClient};
use crate::services::{ExportService, ExtractionOptions, ExtractionService};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, Level};

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    let level = Level::from_str(&config.args.log_level)
        .map_err(|e| ScrapeError::Parse(e.to_string()))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    config.ensure_directories()?;

    let html = std::fs::read_to_string(&config.args.html_file)?;

    let ledger: Arc<dyn Ledger> = Arc::new(CsvLedger::new(&config.args.ledger_file));

    let extraction = ExtractionService::new(
        get_extractor(config.args.strategy)?,
        ImageClient::new(config.http_client.clone()),
        Arc::clone(&ledger),
        ExtractionOptions {
            images_dir: config.args.images_dir.clone(),
            fetch_images: !config.args.skip_images,
            incremental: config.args.incremental,
            limit: config.args.limit,
        },
    );

    let added = extraction.run(&html).await?;
    info!("Extraction completed: {} new records", added);

    ExportService::new(ledger).export(&config.args.json_file)?;

    info!("Run completed successfully!");
    Ok(())
}
