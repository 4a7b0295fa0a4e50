//! Plain-text rendering of arbitrage reports.

use std::fmt::Write;

use crate::config::ArbitrageSettings;
use crate::domain::{CandleType, CoinView};
use crate::models::{ArbitrageReport, ComparisonPoint};
use crate::ui::palette::{candle_colors, display_color};
use crate::utils::format::{format_percent, format_price};
use crate::utils::time_utils::epoch_ms_to_utc;

const RULE_WIDTH: usize = 100;

/// Latest prices, the ranked pair table and the summary for one coin.
pub fn render_report(report: &ArbitrageReport, settings: &ArbitrageSettings) -> String {
    let threshold_pct = settings.opportunity_threshold_pct;
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", report.coin_name, report.symbol);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    if report.latest_prices.is_empty() {
        let _ = writeln!(out, "{}", report.status);
        return out;
    }

    for (idx, latest) in report.latest_prices.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:<12} {:>16}  {}  as of {}",
            latest.exchange,
            format_price(latest.price),
            display_color(&latest.color, idx),
            epoch_ms_to_utc(latest.timestamp_ms)
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    let _ = writeln!(
        out,
        "Ranked by {}{}",
        settings.sort_by,
        if settings.opportunities_only {
            ", opportunities only"
        } else {
            ""
        }
    );
    let _ = writeln!(
        out,
        "  {:<12} {:>14} {:<12} {:>14} {:>12} {:>11} {:>12}",
        "BUY", "PRICE", "SELL", "PRICE", "DIFF", "DIFF %", "NET"
    );
    for diff in &report.ranked {
        let marker = if diff.is_opportunity(threshold_pct) {
            "*"
        } else {
            " "
        };
        let _ = writeln!(
            out,
            "{} {:<12} {:>14} {:<12} {:>14} {:>12} {:>11} {:>12}",
            marker,
            diff.buy_from,
            format_price(diff.buy_price),
            diff.sell_to,
            format_price(diff.sell_price),
            format_price(diff.difference),
            format_percent(diff.percent_difference),
            format_price(settings.fees.net_profit(diff))
        );
    }
    if report.ranked.is_empty() {
        let _ = writeln!(out, "  (no pairs to show)");
    }

    let summary = &report.summary;
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(
        out,
        "Exchanges: {}   Pairs: {}   Opportunities (> {}): {}   Profitable after fees: {}",
        summary.exchange_count,
        summary.pair_count,
        format_percent(threshold_pct),
        summary.opportunity_count,
        summary.profitable_after_fees_count
    );
    let _ = writeln!(
        out,
        "Highest: {}   Average: {}   Largest spread: {}",
        format_percent(summary.highest_percent_difference),
        format_percent(summary.average_percent_difference),
        format_price(summary.highest_absolute_difference)
    );
    let _ = writeln!(out, "{}", report.status);
    out
}

/// Per-candle closes (▲ up / ▼ down), one column per exchange, plus the chart price axis.
pub fn render_series(coin: &CoinView, points: &[ComparisonPoint], domain: (f64, f64)) -> String {
    let exchanges = coin.exchange_names();
    let mut out = String::new();
    let _ = write!(out, "{:<20}", "OPEN (UTC)");
    for name in &exchanges {
        let _ = write!(out, " {:>16}", name);
    }
    out.push('\n');

    for point in points {
        let _ = write!(out, "{:<20}", epoch_ms_to_utc(point.open_time_ms));
        for name in &exchanges {
            let cell = match (point.closes.get(*name), point.candle_types.get(*name)) {
                (Some(close), Some(CandleType::Bullish)) => format!("{} ▲", format_price(*close)),
                (Some(close), _) => format!("{} ▼", format_price(*close)),
                (None, _) => "-".to_string(),
            };
            let _ = write!(out, " {:>16}", cell);
        }
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "Price axis: {} .. {}",
        format_price(domain.0),
        format_price(domain.1)
    );
    for (idx, quote) in coin.exchanges().iter().enumerate() {
        let (up, down) = candle_colors(&quote.color, idx);
        let _ = writeln!(out, "  {} ▲ {} ▼ {}", quote.exchange, up, down);
    }
    out
}
