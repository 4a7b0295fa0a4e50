// Async feed loading, run in main before any analysis happens

use anyhow::Result;

use crate::Cli;
use crate::config::DEBUG_FLAGS;
use crate::data::feed::demo_version::DemoVersion;
use crate::data::feed::json_version::JsonFileVersion;
use crate::data::feed::{CreateCoinViews, get_coin_views_async};
use crate::domain::CoinView;

/// Provider order: feed files first, the bundled demo as fallback (or alone when no file is given).
pub fn feed_providers(args: &Cli) -> Vec<Box<dyn CreateCoinViews>> {
    let mut providers: Vec<Box<dyn CreateCoinViews>> = Vec::new();
    if !args.feed.is_empty() {
        providers.push(Box::new(JsonFileVersion::new(args.feed.clone())));
    }
    if args.demo || args.feed.is_empty() {
        providers.push(Box::new(DemoVersion));
    }
    providers
}

pub async fn fetch_coin_views(args: &Cli) -> Result<(Vec<CoinView>, &'static str)> {
    let providers = feed_providers(args);
    let (coins, signature) = get_coin_views_async(&providers).await?;

    if DEBUG_FLAGS.print_feed_providers {
        log::info!(
            "Successfully retrieved {} coin(s) using: {}.",
            coins.len(),
            signature
        );
        for coin in &coins {
            log::info!("  {}", coin);
        }
    }
    Ok((coins, signature))
}
