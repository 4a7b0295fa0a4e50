pub mod demo_version;
pub mod ingest;
pub mod json_version;
pub mod wire;

use crate::config::DEBUG_FLAGS;
use crate::domain::CoinView;
use anyhow::{Result, anyhow};
use async_trait::async_trait;

pub use ingest::{FeedError, parse_feed_document};

#[async_trait]
pub trait CreateCoinViews {
    // Either produce at least one coin OR return an anyhow::error
    async fn create_coin_views(&self) -> Result<Vec<CoinView>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Tries each provider in turn; the first one yielding coins wins.
pub async fn get_coin_views_async(
    implementations: &[Box<dyn CreateCoinViews>],
) -> Result<(Vec<CoinView>, &'static str)> {
    for imp in implementations {
        if DEBUG_FLAGS.print_feed_providers {
            log::info!("Trying feed provider: {}", imp.signature());
        }
        match imp.create_coin_views().await {
            Ok(coins) if !coins.is_empty() => {
                return Ok((coins, imp.signature()));
            }
            Ok(_) => {
                log::info!("Feed provider {} returned no coins", imp.signature());
            }
            Err(e) => {
                log::info!("Error with feed provider {}: {:#}", imp.signature(), e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All feed providers failed to create coin data"))
}
