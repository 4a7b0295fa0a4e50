//! Composes normalizer, pairwise engine, ranker and statistics into one report.

use crate::analysis::normalizer::normalize_quote;
use crate::analysis::pairwise::pairwise_differences;
use crate::analysis::ranking::rank_with_settings;
use crate::analysis::statistics::summarize;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::{ArbitrageSettings, SettingsError};
use crate::domain::CoinView;
use crate::models::{ArbitrageReport, FeedStatus, LatestPrice};

/// Runs the full pipeline for one coin.
///
/// Fails only when `settings` break their contract (negative threshold or fee);
/// data-quality problems degrade to an empty report instead.
pub fn analyse_coin(
    coin: &CoinView,
    settings: &ArbitrageSettings,
    now_ms: i64,
) -> Result<ArbitrageReport, SettingsError> {
    settings.validate()?;
    Ok(build_report(coin, settings, now_ms))
}

/// Same as [`analyse_coin`] for callers that already validated `settings`.
pub(crate) fn build_report(
    coin: &CoinView,
    settings: &ArbitrageSettings,
    now_ms: i64,
) -> ArbitrageReport {
    let mut latest_prices: Vec<LatestPrice> = Vec::with_capacity(coin.exchanges().len());
    for quote in coin.exchanges() {
        match normalize_quote(quote, now_ms) {
            Ok(latest) => latest_prices.push(latest),
            Err(reason) => log::warn!(
                "{}: excluding {} from comparison ({})",
                coin.symbol,
                quote.exchange,
                reason
            ),
        }
    }

    if latest_prices.is_empty() {
        return ArbitrageReport::no_data(coin.symbol.clone(), coin.coin_name.clone(), now_ms);
    }

    let diffs = pairwise_differences(&latest_prices);
    let ranked = rank_with_settings(&diffs, settings);
    let summary = summarize(
        &latest_prices,
        &diffs,
        settings.opportunity_threshold_pct,
        &settings.fees,
    );

    let status = match summary.opportunity_count {
        0 => FeedStatus::NoOpportunities,
        n => FeedStatus::Opportunities(n),
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_pipeline_summary {
        log::info!(
            "{}: {} exchanges, {} pairs, {} shown, {}",
            coin.symbol,
            summary.exchange_count,
            summary.pair_count,
            ranked.len(),
            status
        );
    }

    ArbitrageReport {
        symbol: coin.symbol.clone(),
        coin_name: coin.coin_name.clone(),
        computed_at_ms: now_ms,
        latest_prices,
        ranked,
        summary,
        status,
    }
}
