use anyhow::{Context, Result, bail};
use reqwest::Client;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::models::ModVersion;

const MODRINTH_API_URL: &str = "https://api.modrinth.com/v2";

#[derive(Clone)]
pub struct ModrinthClient {
    client: Client,
}

impl ModrinthClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .user_agent("fabrikit/0.3.0 (fabrikit@gmail.com)") // fake email. just for modrinth
                .build()
                .context("Failed to build HTTP client")?,
        })
    }

    /// Releases of a project compatible with the fabric loader and the given
    /// game version, best match first. A `null` body counts as no releases.
    pub async fn get_versions(&self, slug: &str, game_version: &str) -> Result<Vec<ModVersion>> {
        let url = format!("{}/project/{}/version", MODRINTH_API_URL, slug);

        let params = [
            ("loaders", "[\"fabric\"]".to_string()),
            ("game_versions", format!("[\"{}\"]", game_version)),
        ];

        let response = self.client.get(&url).query(&params).send().await?;

        if !response.status().is_success() {
            bail!("Modrinth API error: {}", response.status());
        }

        let versions: Option<Vec<ModVersion>> = response.json().await?;
        Ok(versions.unwrap_or_default())
    }

    pub async fn download_file(&self, url: &str, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            bail!("Download failed: {}", response.status());
        }
        let bytes = response.bytes().await?;

        let mut file = fs::File::create(destination).await?;
        file.write_all(&bytes).await?;

        Ok(())
    }
}
