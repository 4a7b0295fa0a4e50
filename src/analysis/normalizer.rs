use crate::domain::ExchangeQuote;
use crate::models::LatestPrice;
use crate::utils::maths_utils::is_usable_price;

/// Why an exchange produced no canonical price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exclusion {
    NoSnapshots,
    /// Latest close was zero, negative or non-finite
    UnusablePrice(f64),
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Exclusion::NoSnapshots => write!(f, "no snapshots"),
            Exclusion::UnusablePrice(price) => write!(f, "unusable latest close {}", price),
        }
    }
}

/// Canonical price for one exchange: close of the latest candle.
///
/// The timestamp is the candle's close time, or `now_ms` when the feed did not report one.
pub fn normalize_quote(quote: &ExchangeQuote, now_ms: i64) -> Result<LatestPrice, Exclusion> {
    let snapshot = quote.latest_snapshot().ok_or(Exclusion::NoSnapshots)?;

    if !is_usable_price(snapshot.close_price) {
        return Err(Exclusion::UnusablePrice(snapshot.close_price));
    }

    Ok(LatestPrice {
        exchange: quote.exchange.clone(),
        price: snapshot.close_price,
        timestamp_ms: snapshot.close_time_ms.unwrap_or(now_ms),
        color: quote.color.clone(),
    })
}

pub fn latest_price(quote: &ExchangeQuote, now_ms: i64) -> Option<LatestPrice> {
    normalize_quote(quote, now_ms).ok()
}

/// Usable prices for every quote, in input order.
pub fn normalize_quotes(quotes: &[ExchangeQuote], now_ms: i64) -> Vec<LatestPrice> {
    quotes
        .iter()
        .filter_map(|quote| latest_price(quote, now_ms))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MarketSnapshot;

    fn quote(name: &str, snapshots: Vec<MarketSnapshot>) -> ExchangeQuote {
        ExchangeQuote::new(name, "BTCUSDT", "#fff", snapshots)
    }

    #[test]
    fn test_latest_close_and_close_time() {
        let q = quote(
            "binance",
            vec![
                MarketSnapshot::flat(100.0, 0, Some(59_999)),
                MarketSnapshot::flat(101.5, 60_000, Some(119_999)),
            ],
        );
        let latest = latest_price(&q, 1_000_000).unwrap();
        assert_eq!(latest.price, 101.5);
        assert_eq!(latest.timestamp_ms, 119_999);
        assert_eq!(latest.color, "#fff");
    }

    #[test]
    fn test_missing_close_time_falls_back_to_now() {
        let q = quote("binance", vec![MarketSnapshot::flat(100.0, 0, None)]);
        assert_eq!(latest_price(&q, 777).unwrap().timestamp_ms, 777);
    }

    #[test]
    fn test_exclusions() {
        assert_eq!(
            normalize_quote(&quote("a", Vec::new()), 0),
            Err(Exclusion::NoSnapshots)
        );
        assert_eq!(
            normalize_quote(&quote("b", vec![MarketSnapshot::flat(0.0, 0, None)]), 0),
            Err(Exclusion::UnusablePrice(0.0))
        );
        assert_eq!(
            normalize_quote(&quote("c", vec![MarketSnapshot::flat(-5.0, 0, None)]), 0),
            Err(Exclusion::UnusablePrice(-5.0))
        );
    }

    #[test]
    fn test_normalize_quotes_keeps_input_order() {
        let quotes = vec![
            quote("z", vec![MarketSnapshot::flat(3.0, 0, None)]),
            quote("dead", vec![MarketSnapshot::flat(0.0, 0, None)]),
            quote("a", vec![MarketSnapshot::flat(1.0, 0, None)]),
        ];
        let names: Vec<String> = normalize_quotes(&quotes, 0)
            .into_iter()
            .map(|p| p.exchange)
            .collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
