use std::collections::BTreeMap;

use crate::analysis::pipeline::build_report;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{ArbitrageSettings, SettingsError};
use crate::domain::CoinView;
use crate::models::ArbitrageReport;

struct MonitoredCoin {
    feed: CoinView,
    report: ArbitrageReport,
}

/// Multi-coin monitoring: one report per coin symbol.
/// A coin is only recomputed when its feed content actually changes.
pub struct ArbitrageMonitor {
    settings: ArbitrageSettings,
    coins: BTreeMap<String, MonitoredCoin>,
}

impl ArbitrageMonitor {
    /// Create a new empty monitor
    pub fn new(settings: ArbitrageSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            coins: BTreeMap::new(),
        })
    }

    pub fn settings(&self) -> &ArbitrageSettings {
        &self.settings
    }

    /// Feed a fresh document for one coin.
    /// Returns true if the report was (re)computed, false if the feed was unchanged.
    pub fn process_feed(&mut self, feed: CoinView, now_ms: i64) -> bool {
        if let Some(existing) = self.coins.get(&feed.symbol) {
            if existing.feed == feed {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_monitor_progress {
                    log::info!("{}: feed unchanged, keeping report", feed.symbol);
                }
                return false;
            }
        }

        let report = build_report(&feed, &self.settings, now_ms);
        self.coins
            .insert(feed.symbol.clone(), MonitoredCoin { feed, report });
        true
    }

    /// Swap the sort/filter/threshold knobs. Every coin is recomputed.
    pub fn set_settings(
        &mut self,
        settings: ArbitrageSettings,
        now_ms: i64,
    ) -> Result<(), SettingsError> {
        settings.validate()?;
        self.settings = settings;
        for coin in self.coins.values_mut() {
            coin.report = build_report(&coin.feed, &self.settings, now_ms);
        }
        Ok(())
    }

    /// The feed the current report of `symbol` was computed from
    pub fn feed(&self, symbol: &str) -> Option<&CoinView> {
        self.coins.get(symbol).map(|c| &c.feed)
    }

    /// Get the report for a specific coin
    pub fn report(&self, symbol: &str) -> Option<&ArbitrageReport> {
        self.coins.get(symbol).map(|c| &c.report)
    }

    /// All reports, ordered by symbol
    pub fn reports(&self) -> Vec<&ArbitrageReport> {
        self.coins.values().map(|c| &c.report).collect()
    }

    pub fn reports_with_opportunities(&self) -> Vec<&ArbitrageReport> {
        self.coins
            .values()
            .map(|c| &c.report)
            .filter(|r| r.has_opportunities())
            .collect()
    }

    /// Drop a coin from monitoring. Returns whether it was present.
    pub fn remove(&mut self, symbol: &str) -> bool {
        self.coins.remove(symbol).is_some()
    }

    /// Get count of monitored coins
    pub fn coin_count(&self) -> usize {
        self.coins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::fees::FeeSchedule;
    use crate::config::SortBy;
    use crate::domain::{ExchangeQuote, MarketSnapshot};
    use crate::models::FeedStatus;

    fn coin(symbol: &str, prices: &[(&str, f64)]) -> CoinView {
        prices
            .iter()
            .fold(CoinView::new(symbol, symbol, symbol), |coin, (name, price)| {
                coin.with_exchange(ExchangeQuote::new(
                    *name,
                    symbol,
                    "",
                    vec![MarketSnapshot::flat(*price, 0, Some(60_000))],
                ))
            })
    }

    #[test]
    fn test_recompute_only_on_change() {
        let mut monitor = ArbitrageMonitor::new(ArbitrageSettings::default()).unwrap();
        assert!(monitor.process_feed(coin("BTC", &[("a", 100.0), ("b", 101.0)]), 0));
        assert!(!monitor.process_feed(coin("BTC", &[("a", 100.0), ("b", 101.0)]), 10));
        assert_eq!(monitor.report("BTC").unwrap().computed_at_ms, 0);

        assert!(monitor.process_feed(coin("BTC", &[("a", 100.0), ("b", 105.0)]), 20));
        let report = monitor.report("BTC").unwrap();
        assert_eq!(report.computed_at_ms, 20);
        assert_eq!(report.best().unwrap().difference, 5.0);
        assert_eq!(monitor.coin_count(), 1);
    }

    #[test]
    fn test_opportunity_listing_and_order() {
        let mut monitor = ArbitrageMonitor::new(ArbitrageSettings::default()).unwrap();
        monitor.process_feed(coin("SOL", &[("a", 10.0), ("b", 10.0)]), 0);
        monitor.process_feed(coin("BTC", &[("a", 100.0), ("b", 101.0)]), 0);
        monitor.process_feed(coin("ETH", &[("a", 0.0)]), 0);

        let symbols: Vec<&str> = monitor.reports().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BTC", "ETH", "SOL"]);
        assert_eq!(monitor.report("ETH").unwrap().status, FeedStatus::NoData);
        assert_eq!(monitor.report("SOL").unwrap().status, FeedStatus::NoOpportunities);

        let hot: Vec<&str> = monitor
            .reports_with_opportunities()
            .iter()
            .map(|r| r.symbol.as_str())
            .collect();
        assert_eq!(hot, vec!["BTC"]);

        assert!(monitor.remove("SOL"));
        assert!(!monitor.remove("SOL"));
        assert_eq!(monitor.coin_count(), 2);
    }

    #[test]
    fn test_settings_change_recomputes() {
        let mut monitor = ArbitrageMonitor::new(ArbitrageSettings::default()).unwrap();
        monitor.process_feed(coin("BTC", &[("a", 100.0), ("b", 100.05), ("c", 101.0)]), 0);
        assert_eq!(monitor.report("BTC").unwrap().ranked.len(), 3);

        let only_hot =
            ArbitrageSettings::new(SortBy::Absolute, true, 0.1, FeeSchedule::default()).unwrap();
        monitor.set_settings(only_hot, 5).unwrap();
        let report = monitor.report("BTC").unwrap();
        assert_eq!(report.ranked.len(), 2);
        assert_eq!(report.computed_at_ms, 5);

        let mut bad = only_hot;
        bad.fees.taker_fee_pct = -0.1;
        assert!(monitor.set_settings(bad, 6).is_err());
        assert_eq!(monitor.settings(), &only_hot);
    }
}
