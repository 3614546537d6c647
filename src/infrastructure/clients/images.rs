use crate::domain::slug_of;
use crate::error::Result;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Downloads entry artwork over the shared HTTP client.
pub struct ImageClient {
    client: Client,
}

impl ImageClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Local target for a game's image, keyed by the game URL's last
    /// path segment.
    pub fn local_path(&self, images_dir: &Path, game_href: &str) -> PathBuf {
        images_dir.join(format!("{}.jpg", slug_of(game_href)))
    }

    pub async fn download(&self, url: &str, path: &Path) -> Result<()> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        let mut file = tokio::fs::File::create(path).await?;
        file.write_all(&bytes).await?;

        Ok(())
    }
}
