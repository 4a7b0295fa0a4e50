use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use std::path::PathBuf;

use crate::data::feed::{CreateCoinViews, parse_feed_document};
use crate::domain::CoinView;

/// Feed documents read from local JSON files.
///
/// Every path must load; coins from all files are concatenated in path order.
pub struct JsonFileVersion {
    pub paths: Vec<PathBuf>,
}

impl JsonFileVersion {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

#[async_trait]
impl CreateCoinViews for JsonFileVersion {
    async fn create_coin_views(&self) -> Result<Vec<CoinView>> {
        if self.paths.is_empty() {
            bail!("No feed files given");
        }

        let mut coins = Vec::new();
        for path in &self.paths {
            let text = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read feed file {:?}", path))?;
            let parsed = parse_feed_document(&text)
                .with_context(|| format!("Failed to parse feed file {:?}", path))?;
            log::info!("Loaded {} coin(s) from {:?}", parsed.len(), path);
            coins.extend(parsed);
        }
        Ok(coins)
    }

    fn signature(&self) -> &'static str {
        "JSON Feed File"
    }
}
