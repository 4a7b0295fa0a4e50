#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

use std::path::PathBuf;

// Re-export commonly used types
pub use analysis::{ArbitrageMonitor, FeeSchedule, analyse_coin};
pub use config::{ArbitrageSettings, SettingsError, SortBy};
pub use data::fetch_coin_views;
pub use domain::{CoinView, ExchangeQuote, MarketSnapshot};
pub use models::{ArbitrageReport, FeedStatus, PriceDifference, SummaryStatistics};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Cross-exchange price comparison and arbitrage ranking",
    long_about = None
)]
pub struct Cli {
    /// Feed document to load (repeatable). Without any, the bundled demo feed is used
    #[arg(long, value_name = "PATH")]
    pub feed: Vec<PathBuf>,

    /// Fall back to the bundled demo feed if the feed files fail to load
    #[arg(long, default_value_t = false)]
    pub demo: bool,

    /// Ranking key (always descending)
    #[arg(long, value_enum, default_value_t = config::ARBITRAGE.sort_by)]
    pub sort_by: SortBy,

    /// Only list pairs above the opportunity threshold
    #[arg(long, default_value_t = false)]
    pub opportunities_only: bool,

    /// Opportunity threshold in percent
    #[arg(
        long,
        value_name = "PCT",
        allow_hyphen_values = true,
        default_value_t = config::ARBITRAGE.opportunity.threshold_pct
    )]
    pub threshold: f64,

    /// Taker fee per leg in percent
    #[arg(
        long,
        value_name = "PCT",
        allow_hyphen_values = true,
        default_value_t = config::ARBITRAGE.fees.taker_fee_pct
    )]
    pub fee_pct: f64,

    /// Print reports as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also print the per-candle close comparison series
    #[arg(long, default_value_t = false)]
    pub series: bool,
}

impl Cli {
    pub fn settings(&self) -> Result<ArbitrageSettings, SettingsError> {
        ArbitrageSettings::new(
            self.sort_by,
            self.opportunities_only,
            self.threshold,
            FeeSchedule::new(self.fee_pct),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_config() {
        let args = Cli::parse_from(["spread-sniper"]);
        assert_eq!(args.settings().unwrap(), ArbitrageSettings::default());
        assert!(args.feed.is_empty());
        assert!(!args.json);
    }

    #[test]
    fn test_cli_overrides() {
        let args = Cli::parse_from([
            "spread-sniper",
            "--sort-by",
            "absolute",
            "--opportunities-only",
            "--threshold",
            "0.5",
            "--fee-pct",
            "0.1",
        ]);
        let settings = args.settings().unwrap();
        assert_eq!(settings.sort_by, SortBy::Absolute);
        assert!(settings.opportunities_only);
        assert_eq!(settings.opportunity_threshold_pct, 0.5);
        assert_eq!(settings.fees.taker_fee_pct, 0.1);
    }

    #[test]
    fn test_cli_rejects_negative_threshold() {
        let args = Cli::parse_from(["spread-sniper", "--threshold", "-1"]);
        assert_eq!(
            args.settings(),
            Err(SettingsError::InvalidThreshold(-1.0))
        );
    }
}
