//! Wire shapes of the arbitrage feed, exactly as the upstream API serves them.
//!
//! Exchange and snapshot records stay as raw JSON values here so one bad record can be
//! rejected during ingestion without failing the whole document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level document: one feed envelope, a bare coin, or a list of either.
#[derive(Debug, Clone)]
pub enum FeedDocument {
    Envelope(ArbitrageFeedList),
    Many(Vec<FeedDocument>),
    Coin(CoinData),
}

impl FeedDocument {
    /// Shape is decided up front: arrays are lists, objects carrying `data` are envelopes,
    /// anything else must be a bare coin. A broken envelope is an error, never a coin.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .map(Self::from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(FeedDocument::Many),
            Value::Object(map) if map.contains_key("data") => {
                serde_json::from_value(Value::Object(map)).map(FeedDocument::Envelope)
            }
            other => serde_json::from_value(other).map(FeedDocument::Coin),
        }
    }
}

/// Paged response wrapper of the feed endpoint
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArbitrageFeedList {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub symbol: Option<String>,
    /// Candle width shorthand, e.g. "1m"
    #[serde(default)]
    pub interval: Option<String>,
    #[serde(default)]
    pub limit: Option<u64>,
    pub data: CoinData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CoinData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub coin_name: String,
    // The upstream type declares `arbitrages`, its consumers read `exchanges`
    #[serde(default, alias = "arbitrages")]
    pub exchanges: Vec<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRecord {
    pub exchange: String,
    #[serde(default)]
    pub coin_symbol: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub market_snapshots: Vec<Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub open: FeedNumber,
    pub high: FeedNumber,
    pub low: FeedNumber,
    pub close: FeedNumber,
    #[serde(default)]
    pub volume: Option<FeedNumber>,
    #[serde(default)]
    pub quote_volume: Option<FeedNumber>,
    pub open_time: FeedTimestamp,
    #[serde(default)]
    pub close_time: Option<FeedTimestamp>,
}

/// Decimal columns arrive either as JSON numbers or as strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FeedNumber {
    Number(f64),
    Text(String),
}

impl FeedNumber {
    pub fn value(&self) -> Option<f64> {
        match self {
            FeedNumber::Number(n) => Some(*n),
            FeedNumber::Text(text) => text.trim().parse::<f64>().ok(),
        }
    }
}

/// Epoch milliseconds or a date-time string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FeedTimestamp {
    Millis(i64),
    Text(String),
}

impl FeedTimestamp {
    pub fn millis(&self) -> Option<i64> {
        match self {
            FeedTimestamp::Millis(ms) => Some(*ms),
            FeedTimestamp::Text(text) => crate::utils::time_utils::parse_timestamp_ms(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_number_forms() {
        assert_eq!(FeedNumber::Number(1.5).value(), Some(1.5));
        assert_eq!(FeedNumber::Text(" 50500.25 ".into()).value(), Some(50500.25));
        assert_eq!(FeedNumber::Text("n/a".into()).value(), None);
    }

    #[test]
    fn test_document_shapes() {
        let envelope = r#"{"total":1,"symbol":"BTCUSDT","interval":"1m","limit":10,
            "data":{"id":"c1","symbol":"BTCUSDT","coinName":"Bitcoin","exchanges":[]}}"#;
        let bare = r#"{"symbol":"ETHUSDT","coinName":"Ethereum","arbitrages":[
            {"exchange":"binance","marketSnapshots":[]}]}"#;
        let many = format!("[{},{}]", envelope, bare);

        let parse = |text: &str| {
            FeedDocument::from_value(serde_json::from_str(text).unwrap()).unwrap()
        };
        assert!(matches!(parse(envelope), FeedDocument::Envelope(_)));
        match parse(bare) {
            FeedDocument::Coin(coin) => assert_eq!(coin.exchanges.len(), 1),
            other => panic!("expected bare coin, got {:?}", other),
        }
        match parse(&many) {
            FeedDocument::Many(docs) => assert_eq!(docs.len(), 2),
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_broken_envelope_is_not_a_coin() {
        // `data` of the wrong type must fail rather than parse as an empty bare coin
        let value = serde_json::json!({ "symbol": "BTCUSDT", "data": "oops" });
        assert!(FeedDocument::from_value(value).is_err());
        assert!(FeedDocument::from_value(serde_json::json!(42)).is_err());
    }
}
