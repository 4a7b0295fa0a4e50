//! Built-in demo feed, generated from `config::DEMO`.
//!
//! The documents go through the same ingestion path as real feed files.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::DEMO;
use crate::config::demo::{DemoCoin, DemoExchange};
use crate::data::feed::CreateCoinViews;
use crate::data::feed::ingest::coin_from_envelope;
use crate::data::feed::wire::{ArbitrageFeedList, CoinData};
use crate::domain::CoinView;
use crate::utils::TimeUtils;
use crate::utils::time_utils::epoch_ms_to_rfc3339;

/// Small deterministic wobble around the final close so charts are not flat lines.
fn demo_close(exchange: &DemoExchange, idx: usize, count: usize) -> f64 {
    let steps_back = (count - 1 - idx) as f64;
    let wobble = ((idx * 7 + exchange.name.len()) % 5) as f64 - 2.0;
    let drift = exchange.last_close * 0.0002 * steps_back;
    if steps_back == 0.0 {
        exchange.last_close
    } else {
        exchange.last_close - drift + wobble * exchange.last_close * 0.0001
    }
}

/// One exchange record in wire form.
fn demo_exchange(exchange: &DemoExchange, interval_ms: i64) -> Value {
    let count = DEMO.klines_per_exchange;
    let snapshots: Vec<Value> = (0..count)
        .map(|idx| {
            let open_time = DEMO.anchor_ms + idx as i64 * interval_ms;
            let close = demo_close(exchange, idx, count);
            let open = if idx == 0 {
                close
            } else {
                demo_close(exchange, idx - 1, count)
            };
            let volume = 10.0 + (idx % 4) as f64;
            json!({
                "id": format!("{}-{}-{}", exchange.name, exchange.coin_symbol, idx),
                "open": open,
                "high": open.max(close) * 1.0001,
                "low": open.min(close) * 0.9999,
                "close": close,
                "volume": volume,
                "quoteVolume": volume * close,
                "openTime": epoch_ms_to_rfc3339(open_time),
                "closeTime": epoch_ms_to_rfc3339(open_time + interval_ms - 1),
            })
        })
        .collect();

    json!({
        "exchange": exchange.name,
        "coinSymbol": exchange.coin_symbol,
        "color": exchange.color,
        "marketSnapshots": snapshots,
    })
}

fn demo_document(coin: &DemoCoin, interval_ms: i64) -> ArbitrageFeedList {
    ArbitrageFeedList {
        total: Some(1),
        symbol: Some(coin.symbol.to_string()),
        interval: Some(DEMO.interval.to_string()),
        limit: Some(DEMO.klines_per_exchange as u64),
        data: CoinData {
            id: format!("demo-{}", coin.symbol.to_lowercase()),
            symbol: coin.symbol.to_string(),
            coin_name: coin.coin_name.to_string(),
            exchanges: coin
                .exchanges
                .iter()
                .map(|e| demo_exchange(e, interval_ms))
                .collect(),
        },
    }
}

/// One feed envelope per demo coin, as the upstream API would serve them.
pub fn demo_feed_documents() -> Vec<ArbitrageFeedList> {
    let interval_ms =
        TimeUtils::interval_from_string(DEMO.interval).unwrap_or(TimeUtils::MS_IN_MIN);
    DEMO.coins
        .iter()
        .map(|coin| demo_document(coin, interval_ms))
        .collect()
}

pub struct DemoVersion;

#[async_trait]
impl CreateCoinViews for DemoVersion {
    async fn create_coin_views(&self) -> Result<Vec<CoinView>> {
        let mut coins = Vec::with_capacity(DEMO.coins.len());
        for document in demo_feed_documents() {
            coins.push(coin_from_envelope(document)?);
        }
        Ok(coins)
    }

    fn signature(&self) -> &'static str {
        "Demo Feed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_feed_round_trips_through_ingestion() {
        let coins = DemoVersion.create_coin_views().await.unwrap();
        assert_eq!(coins.len(), DEMO.coins.len());

        let btc = &coins[0];
        assert_eq!(btc.symbol, "BTCUSDT");
        assert_eq!(btc.exchanges().len(), 3);
        for quote in btc.exchanges() {
            // Nothing generated should be rejected on the way in
            assert_eq!(quote.klines(), DEMO.klines_per_exchange);
        }
        assert_eq!(btc.exchange("binance").unwrap().current_price(), Some(50_000.0));
        assert_eq!(btc.exchange("kucoin").unwrap().current_price(), Some(50_500.0));
        assert_eq!(btc.exchange("bybit").unwrap().current_price(), Some(49_800.0));
    }

    #[test]
    fn test_demo_documents_serialize_as_feed_json() {
        let documents = demo_feed_documents();
        let text = serde_json::to_string(&documents).unwrap();
        let parsed = crate::data::feed::parse_feed_document(&text).unwrap();
        assert_eq!(parsed.len(), documents.len());
        assert_eq!(parsed[1].exchange("kucoin").unwrap().current_price(), Some(3_000.0));
    }
}
