//! Close prices of several exchanges lined up on a shared time axis, for comparison charts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ARBITRAGE;
use crate::domain::{CandleType, CoinView};
use crate::utils::maths_utils::{is_usable_price, mean_or_zero};

/// One time bucket on the comparison chart.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComparisonPoint {
    pub open_time_ms: i64,
    /// Close price per exchange. Exchanges without a candle in this bucket are absent.
    pub closes: BTreeMap<String, f64>,
    pub volumes: BTreeMap<String, f64>,
    /// Up/down per exchange, for colouring
    pub candle_types: BTreeMap<String, CandleType>,
}

/// Aligns candles from the selected exchanges by open time (ascending).
/// An empty `selected` slice means every exchange of the coin.
pub fn build_comparison_series(coin: &CoinView, selected: &[&str]) -> Vec<ComparisonPoint> {
    let mut buckets: BTreeMap<i64, ComparisonPoint> = BTreeMap::new();

    let quotes = coin
        .exchanges()
        .iter()
        .filter(|q| selected.is_empty() || selected.contains(&q.exchange.as_str()));

    for quote in quotes {
        for snapshot in quote.snapshots() {
            if !is_usable_price(snapshot.close_price) {
                continue;
            }
            let point = buckets
                .entry(snapshot.open_time_ms)
                .or_insert_with(|| ComparisonPoint {
                    open_time_ms: snapshot.open_time_ms,
                    closes: BTreeMap::new(),
                    volumes: BTreeMap::new(),
                    candle_types: BTreeMap::new(),
                });
            point
                .closes
                .insert(quote.exchange.clone(), snapshot.close_price);
            point
                .volumes
                .insert(quote.exchange.clone(), snapshot.base_volume);
            point
                .candle_types
                .insert(quote.exchange.clone(), snapshot.get_type());
        }
    }

    buckets.into_values().collect()
}

/// Y-axis range centred on the average close across all points and exchanges.
/// Falls back to `(0, 100)` when there is nothing to plot.
pub fn price_axis_domain(points: &[ComparisonPoint]) -> (f64, f64) {
    let closes: Vec<f64> = points
        .iter()
        .flat_map(|p| p.closes.values().copied())
        .collect();

    if closes.is_empty() {
        return (0.0, 100.0);
    }

    let average = mean_or_zero(&closes);
    let half_width = average * ARBITRAGE.price_axis_half_width;
    (average - half_width, average + half_width)
}
