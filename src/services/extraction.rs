use crate::domain::storage::Ledger;
use crate::domain::{absolute_url, slug_of, GameRecord, NO_IMAGE};
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{scan_candidates, FieldExtractor, ImageClient};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

pub struct ExtractionOptions {
    pub images_dir: PathBuf,
    pub fetch_images: bool,
    /// Skip entries whose URL the ledger already knows.
    pub incremental: bool,
    /// Maximum number of entries to process, 0 means unlimited.
    pub limit: usize,
}

/// Walks the listing snapshot and appends one ledger row per newly
/// discovered game, flushing record by record so an interrupted run
/// leaves a valid, resumable ledger behind.
pub struct ExtractionService {
    extractor: Box<dyn FieldExtractor>,
    images: ImageClient,
    ledger: Arc<dyn Ledger>,
    options: ExtractionOptions,
}

impl ExtractionService {
    pub fn new(
        extractor: Box<dyn FieldExtractor>,
        images: ImageClient,
        ledger: Arc<dyn Ledger>,
        options: ExtractionOptions,
    ) -> Self {
        Self {
            extractor,
            images,
            ledger,
            options,
        }
    }

    pub async fn run(&self, html: &str) -> Result<usize> {
        let known = self.ledger.load_known_urls()?;

        let mut candidates = scan_candidates(html);
        info!("Found {} game anchors in source document", candidates.len());

        if self.options.incremental {
            candidates.retain(|c| !known.contains(&absolute_url(&c.href)));
        }
        if self.options.limit > 0 {
            candidates.truncate(self.options.limit);
        }

        if candidates.is_empty() {
            info!("No new entries, ledger left untouched");
            return Ok(0);
        }

        let total = candidates.len();
        info!("Processing {} games", total);

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| ScrapeError::Other(e.to_string()))?,
        );

        // The write-time guard covers both duplicate anchors within
        // this scan and, in full mode, URLs the ledger already holds.
        let mut seen = known;
        let mut added = 0;
        let mut fetched = 0;

        for (index, candidate) in candidates.iter().enumerate() {
            pb.set_message(format!("Processing {}", slug_of(&candidate.href)));

            let url = absolute_url(&candidate.href);
            if !seen.insert(url.clone()) {
                pb.inc(1);
                continue;
            }

            let fields = self.extractor.extract(candidate);

            let image_path = match fields.image_url.as_deref() {
                Some(image_url) if self.options.fetch_images => {
                    if index % 10 == 0 {
                        info!("Downloading image {}/{}: {}", index + 1, total, fields.title);
                    }
                    // Courtesy pause after every fifth fetch.
                    if fetched > 0 && fetched % 5 == 0 {
                        sleep(Duration::from_millis(500)).await;
                    }
                    fetched += 1;

                    let path = self
                        .images
                        .local_path(&self.options.images_dir, &candidate.href);
                    match self.images.download(image_url, &path).await {
                        Ok(()) => path.to_string_lossy().into_owned(),
                        Err(e) => {
                            warn!("Failed to download image for {}: {}", fields.title, e);
                            NO_IMAGE.to_string()
                        }
                    }
                }
                _ => NO_IMAGE.to_string(),
            };

            let record = GameRecord {
                url,
                title: fields.title,
                provider: fields.provider,
                image_path,
            };
            self.ledger.append(std::slice::from_ref(&record))?;
            info!("Added {} ({})", record.title, record.url);

            added += 1;
            pb.inc(1);
        }

        pb.finish_with_message(format!("{} new records", added));
        Ok(added)
    }
}
