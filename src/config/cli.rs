use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Saved HTML snapshot of the game listing page
    #[arg(default_value = "games.html")]
    pub html_file: PathBuf,

    /// CSV ledger the extracted games are appended to
    #[arg(default_value = "games.csv")]
    pub ledger_file: PathBuf,

    /// JSON export regenerated from the ledger after each run
    #[arg(long, default_value = "games.json")]
    pub json_file: PathBuf,

    /// Directory for downloaded game images
    #[arg(long, default_value = "images")]
    pub images_dir: PathBuf,

    /// Maximum number of entries to process, 0 means unlimited
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    /// Skip entries whose URL is already in the ledger
    #[arg(long)]
    pub incremental: bool,

    /// How title and provider are derived for each entry
    #[arg(long, value_enum, default_value_t = Strategy::Markup)]
    pub strategy: Strategy,

    /// Record entries without fetching their images
    #[arg(long)]
    pub skip_images: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Read title and provider from the entry markup
    Markup,
    /// Derive title and provider from the URL slug
    Slug,
}
