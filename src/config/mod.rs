use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub use cli::Strategy;

pub struct Config {
    pub args: Args,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self { args, http_client })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.images_dir.exists() {
            std::fs::create_dir_all(&self.args.images_dir)?;
        }

        info!("Images dir exists");
        Ok(())
    }
}
