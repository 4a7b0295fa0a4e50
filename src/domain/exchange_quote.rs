use serde::{Deserialize, Serialize};

use crate::domain::candle::MarketSnapshot;

/// One exchange's participation in a coin's price comparison.
///
/// Snapshots are kept ascending by open time, so the latest candle is always the last one.
/// The ingestion layer establishes this ordering; `new` re-sorts to keep the invariant for
/// hand-built and deserialized quotes too.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "QuoteFields")]
pub struct ExchangeQuote {
    pub exchange: String,
    pub coin_symbol: String,
    pub color: String,
    snapshots: Vec<MarketSnapshot>,
}

// Deserialization goes through `new`
#[derive(Deserialize)]
struct QuoteFields {
    exchange: String,
    coin_symbol: String,
    #[serde(default)]
    color: String,
    #[serde(default)]
    snapshots: Vec<MarketSnapshot>,
}

impl From<QuoteFields> for ExchangeQuote {
    fn from(fields: QuoteFields) -> Self {
        ExchangeQuote::new(
            fields.exchange,
            fields.coin_symbol,
            fields.color,
            fields.snapshots,
        )
    }
}

impl ExchangeQuote {
    pub fn new(
        exchange: impl Into<String>,
        coin_symbol: impl Into<String>,
        color: impl Into<String>,
        mut snapshots: Vec<MarketSnapshot>,
    ) -> Self {
        // Stable sort: equal open times keep their feed order
        snapshots.sort_by_key(|s| s.open_time_ms);
        Self {
            exchange: exchange.into(),
            coin_symbol: coin_symbol.into(),
            color: color.into(),
            snapshots,
        }
    }

    pub fn snapshots(&self) -> &[MarketSnapshot] {
        &self.snapshots
    }

    /// The most recent completed candle, if any.
    pub fn latest_snapshot(&self) -> Option<&MarketSnapshot> {
        self.snapshots.last()
    }

    /// Close of the latest candle. `None` when the exchange has no candles.
    pub fn current_price(&self) -> Option<f64> {
        self.latest_snapshot().map(|s| s.close_price)
    }

    pub fn klines(&self) -> usize {
        self.snapshots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_is_last_after_sort() {
        let quote = ExchangeQuote::new(
            "binance",
            "BTCUSDT",
            "#AF2AE9",
            vec![
                MarketSnapshot::flat(102.0, 120_000, None),
                MarketSnapshot::flat(100.0, 0, None),
                MarketSnapshot::flat(101.0, 60_000, None),
            ],
        );
        assert_eq!(quote.klines(), 3);
        assert_eq!(quote.current_price(), Some(102.0));
        assert_eq!(quote.snapshots()[0].open_time_ms, 0);
    }

    #[test]
    fn test_deserialized_quote_is_sorted() {
        let newest_first = vec![
            MarketSnapshot::flat(200.0, 60_000, None),
            MarketSnapshot::flat(100.0, 0, None),
        ];
        let value = serde_json::json!({
            "exchange": "binance",
            "coin_symbol": "BTCUSDT",
            "color": "",
            "snapshots": newest_first,
        });
        let quote: ExchangeQuote = serde_json::from_value(value).unwrap();
        assert_eq!(quote.current_price(), Some(200.0));
        assert_eq!(quote.snapshots()[0].open_time_ms, 0);
    }

    #[test]
    fn test_empty_quote_has_no_price() {
        let quote = ExchangeQuote::new("kucoin", "BTC-USDT", "", Vec::new());
        assert!(quote.current_price().is_none());
        assert!(quote.latest_snapshot().is_none());
    }
}
