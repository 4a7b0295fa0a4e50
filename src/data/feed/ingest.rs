//! Validation boundary: wire records in, domain types out.
//!
//! Structurally malformed snapshot records are dropped here (and logged), so the
//! arbitrage pipeline only ever sees well-formed candles. Economically useless
//! candles (close <= 0) are kept; excluding those is the normalizer's job.

use std::fmt;

use crate::config::DEBUG_FLAGS;
use crate::data::feed::wire::{
    ArbitrageFeedList, CoinData, ExchangeRecord, FeedDocument, FeedNumber, SnapshotRecord,
};
use crate::domain::{CoinView, ExchangeQuote, MarketSnapshot};
use crate::utils::TimeUtils;

#[derive(Debug)]
pub enum FeedError {
    /// The document is not JSON or matches none of the accepted shapes
    Malformed(String),
    /// A coin record carries no symbol at all
    MissingSymbol { coin_id: String },
    /// The document parsed but held no coins
    Empty,
}

impl std::error::Error for FeedError {}
impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FeedError::Malformed(reason) => write!(f, "malformed feed document: {}", reason),
            FeedError::MissingSymbol { coin_id } => {
                write!(f, "coin record '{}' has no symbol", coin_id)
            }
            FeedError::Empty => write!(f, "feed document contains no coins"),
        }
    }
}

/// Why a single snapshot record was dropped
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotRejection {
    Shape(String),
    UnparsableNumber(&'static str),
    UnparsableTimestamp(&'static str),
    Invalid(&'static str),
}

impl fmt::Display for SnapshotRejection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SnapshotRejection::Shape(reason) => write!(f, "unexpected shape ({})", reason),
            SnapshotRejection::UnparsableNumber(field) => write!(f, "unparsable {}", field),
            SnapshotRejection::UnparsableTimestamp(field) => write!(f, "unparsable {}", field),
            SnapshotRejection::Invalid(reason) => write!(f, "{}", reason),
        }
    }
}

/// Parse a JSON feed document into coins.
pub fn parse_feed_document(json: &str) -> Result<Vec<CoinView>, FeedError> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| FeedError::Malformed(e.to_string()))?;
    let document =
        FeedDocument::from_value(value).map_err(|e| FeedError::Malformed(e.to_string()))?;
    coins_from_document(document)
}

pub fn coins_from_document(document: FeedDocument) -> Result<Vec<CoinView>, FeedError> {
    let mut coins = Vec::new();
    collect_coins(document, &mut coins)?;
    if coins.is_empty() {
        return Err(FeedError::Empty);
    }
    Ok(coins)
}

fn collect_coins(document: FeedDocument, out: &mut Vec<CoinView>) -> Result<(), FeedError> {
    match document {
        FeedDocument::Envelope(envelope) => out.push(coin_from_envelope(envelope)?),
        FeedDocument::Coin(coin) => out.push(coin_from_record(coin, None)?),
        FeedDocument::Many(documents) => {
            for document in documents {
                collect_coins(document, out)?;
            }
        }
    }
    Ok(())
}

/// The envelope supplies a fallback symbol and the candle width.
pub fn coin_from_envelope(envelope: ArbitrageFeedList) -> Result<CoinView, FeedError> {
    let interval_ms = envelope
        .interval
        .as_deref()
        .and_then(TimeUtils::interval_from_string);

    let mut data = envelope.data;
    if data.symbol.trim().is_empty() {
        if let Some(symbol) = envelope.symbol {
            data.symbol = symbol;
        }
    }
    coin_from_record(data, interval_ms)
}

pub fn coin_from_record(
    record: CoinData,
    interval_ms: Option<i64>,
) -> Result<CoinView, FeedError> {
    let symbol = record.symbol.trim().to_string();
    if symbol.is_empty() {
        return Err(FeedError::MissingSymbol { coin_id: record.id });
    }

    let coin_name = if record.coin_name.trim().is_empty() {
        symbol.clone()
    } else {
        record.coin_name
    };
    let id = if record.id.is_empty() {
        symbol.clone()
    } else {
        record.id
    };

    let mut coin = CoinView::new(id, symbol, coin_name);
    for (idx, raw) in record.exchanges.into_iter().enumerate() {
        let exchange: ExchangeRecord = match serde_json::from_value(raw) {
            Ok(exchange) => exchange,
            Err(e) => {
                log::warn!("{}: dropping exchange record #{}: {}", coin.symbol, idx, e);
                continue;
            }
        };
        let quote = quote_from_record(&coin.symbol, exchange, interval_ms);
        let name = quote.exchange.clone();
        if !coin.add_exchange(quote) {
            log::warn!(
                "{}: duplicate exchange '{}' in feed, keeping the first one",
                coin.symbol,
                name
            );
        }
    }
    Ok(coin)
}

fn quote_from_record(
    symbol: &str,
    record: ExchangeRecord,
    interval_ms: Option<i64>,
) -> ExchangeQuote {
    let exchange = record.exchange.trim().to_string();
    let mut snapshots = Vec::with_capacity(record.market_snapshots.len());

    for (idx, raw) in record.market_snapshots.into_iter().enumerate() {
        match snapshot_from_value(raw, interval_ms) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(rejection) => {
                if DEBUG_FLAGS.print_ingest_rejections {
                    log::warn!(
                        "{}/{}: dropping snapshot #{}: {}",
                        symbol,
                        exchange,
                        idx,
                        rejection
                    );
                }
            }
        }
    }

    ExchangeQuote::new(exchange, record.coin_symbol, record.color, snapshots)
}

/// Validates one raw snapshot record.
///
/// A missing close time is derived from the envelope interval (`open + interval - 1ms`)
/// when one is known, otherwise left unset.
pub fn snapshot_from_value(
    raw: serde_json::Value,
    interval_ms: Option<i64>,
) -> Result<MarketSnapshot, SnapshotRejection> {
    let record: SnapshotRecord =
        serde_json::from_value(raw).map_err(|e| SnapshotRejection::Shape(e.to_string()))?;

    let number = |value: &FeedNumber, field: &'static str| {
        value
            .value()
            .ok_or(SnapshotRejection::UnparsableNumber(field))
    };
    // Volumes are optional on the wire
    let optional_number = |value: &Option<FeedNumber>, field: &'static str| match value {
        Some(v) => v.value().ok_or(SnapshotRejection::UnparsableNumber(field)),
        None => Ok(0.0),
    };

    let open_time_ms = record
        .open_time
        .millis()
        .ok_or(SnapshotRejection::UnparsableTimestamp("openTime"))?;
    let close_time_ms = match &record.close_time {
        Some(ts) => Some(
            ts.millis()
                .ok_or(SnapshotRejection::UnparsableTimestamp("closeTime"))?,
        ),
        None => match interval_ms {
            Some(width) => Some(
                open_time_ms
                    .checked_add(width - 1)
                    .ok_or(SnapshotRejection::Invalid("close time overflows"))?,
            ),
            None => None,
        },
    };

    let snapshot = MarketSnapshot {
        open_price: number(&record.open, "open")?,
        high_price: number(&record.high, "high")?,
        low_price: number(&record.low, "low")?,
        close_price: number(&record.close, "close")?,
        base_volume: optional_number(&record.volume, "volume")?,
        quote_volume: optional_number(&record.quote_volume, "quoteVolume")?,
        open_time_ms,
        close_time_ms,
    };

    match snapshot.structural_problem() {
        Some(reason) => Err(SnapshotRejection::Invalid(reason)),
        None => Ok(snapshot),
    }
}
