use serde::{Deserialize, Serialize};

/// The canonical price of one exchange at one computation instant.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LatestPrice {
    pub exchange: String,
    pub price: f64,
    pub timestamp_ms: i64,
    pub color: String,
}

/// One unordered pair of exchanges and how far apart their prices are.
///
/// `exchange_a`/`exchange_b` keep the pairwise engine's input order; `buy_from`/`sell_to`
/// carry the trading direction (cheaper side first).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceDifference {
    pub exchange_a: String,
    pub price_a: f64,
    pub exchange_b: String,
    pub price_b: f64,

    /// `|price_a - price_b|`
    pub difference: f64,
    /// `difference / average(price_a, price_b) * 100`
    pub percent_difference: f64,

    pub buy_from: String,
    pub buy_price: f64,
    pub sell_to: String,
    pub sell_price: f64,

    /// Profit per unit before fees (equal to `difference`)
    pub potential_profit: f64,
    /// Earlier of the two contributing snapshot timestamps
    pub timestamp_ms: i64,
}

impl PriceDifference {
    /// Strictly above the threshold (a pair exactly at the threshold is not an opportunity).
    pub fn is_opportunity(&self, threshold_pct: f64) -> bool {
        self.percent_difference > threshold_pct
    }
}

impl std::fmt::Display for PriceDifference {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "buy {} @ {} / sell {} @ {} ({:.4}%)",
            self.buy_from, self.buy_price, self.sell_to, self.sell_price, self.percent_difference
        )
    }
}
