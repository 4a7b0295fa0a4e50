use std::collections::BTreeSet;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tokio::runtime::Runtime;

use spread_sniper::models::{ComparisonPoint, build_comparison_series, price_axis_domain};
use spread_sniper::ui::{render_report, render_series};
use spread_sniper::utils::time_utils::utc_now_as_timestamp_ms;
use spread_sniper::{ArbitrageMonitor, ArbitrageReport, Cli, fetch_coin_views};

/// One coin in `--json` output
#[derive(Serialize)]
struct CoinOutput<'a> {
    report: &'a ArbitrageReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<Vec<ComparisonPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    price_axis: Option<(f64, f64)>,
}

fn main() -> Result<()> {
    // A. Init Logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env() // RUST_LOG still wins
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    let settings = args.settings().context("Invalid arbitrage settings")?;

    // C. Data Loading (Blocking)
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let (coins, signature) = rt
        .block_on(fetch_coin_views(&args))
        .context("Failed to load any feed data")?;
    log::info!("Loaded {} coin(s) from {}", coins.len(), signature);

    // D. Analysis
    let now_ms = utc_now_as_timestamp_ms();
    let mut monitor = ArbitrageMonitor::new(settings)?;
    let mut seen = BTreeSet::new();
    for coin in coins {
        if !seen.insert(coin.symbol.clone()) {
            log::warn!("{}: repeated in feed input, first occurrence kept", coin.symbol);
            continue;
        }
        monitor.process_feed(coin, now_ms);
    }

    // E. Output
    let mut outputs = Vec::with_capacity(monitor.coin_count());
    for report in monitor.reports() {
        let series = if args.series {
            monitor
                .feed(&report.symbol)
                .map(|feed| build_comparison_series(feed, &[]))
        } else {
            None
        };

        if args.json {
            outputs.push(CoinOutput {
                report,
                price_axis: series.as_deref().map(price_axis_domain),
                series,
            });
            continue;
        }

        if report.has_opportunities() {
            if let Some(best) = report.best() {
                log::info!("{}: best pair {}", report.symbol, best);
            }
        }
        println!("{}", render_report(report, &settings));
        if let (Some(points), Some(feed)) = (series, monitor.feed(&report.symbol)) {
            println!("{}", render_series(feed, &points, price_axis_domain(&points)));
        }
    }

    if args.json {
        let text = serde_json::to_string_pretty(&outputs).context("Failed to serialize reports")?;
        println!("{}", text);
    }
    Ok(())
}
