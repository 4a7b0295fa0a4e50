use serde::{Deserialize, Serialize};

// Define the CandleType enum
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

/// One OHLCV candle for one exchange in one time bucket.
/// `close_price` is the canonical "current price" of the bucket.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,

    pub base_volume: f64,
    pub quote_volume: f64,

    pub open_time_ms: i64,
    /// Not every feed reports a close time
    pub close_time_ms: Option<i64>,
}

impl MarketSnapshot {
    // A constructor for convenience
    pub fn new(
        open_price: f64,
        high_price: f64,
        low_price: f64,
        close_price: f64,
        base_volume: f64,
        open_time_ms: i64,
        close_time_ms: Option<i64>,
    ) -> Self {
        MarketSnapshot {
            open_price,
            high_price,
            low_price,
            close_price,
            base_volume,
            quote_volume: 0.0,
            open_time_ms,
            close_time_ms,
        }
    }

    /// Candle whose OHLC are all `price`. Handy for quote-only feeds and tests.
    pub fn flat(price: f64, open_time_ms: i64, close_time_ms: Option<i64>) -> Self {
        Self::new(price, price, price, price, 0.0, open_time_ms, close_time_ms)
    }

    // A method to determine the type of candle
    pub fn get_type(&self) -> CandleType {
        if self.close_price >= self.open_price {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    /// Structural sanity of the candle, independent of whether the price is usable.
    /// Returns a short reason when the record must be rejected.
    pub fn structural_problem(&self) -> Option<&'static str> {
        let prices = [
            self.open_price,
            self.high_price,
            self.low_price,
            self.close_price,
        ];
        if prices.iter().any(|p| !p.is_finite()) {
            return Some("non-finite price");
        }
        if !self.base_volume.is_finite() || !self.quote_volume.is_finite() {
            return Some("non-finite volume");
        }
        if self.base_volume < 0.0 || self.quote_volume < 0.0 {
            return Some("negative volume");
        }
        if self.high_price < self.low_price {
            return Some("high below low");
        }
        if let Some(close_time_ms) = self.close_time_ms {
            if close_time_ms <= self.open_time_ms {
                return Some("close time not after open time");
            }
        }
        None
    }
}
