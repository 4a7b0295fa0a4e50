use serde::{Deserialize, Serialize};

use crate::models::PriceDifference;

/// Taker fees paid on both legs of an arbitrage (buy on one exchange, sell on the other).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct FeeSchedule {
    /// Per-leg taker fee in % of the traded notional
    pub taker_fee_pct: f64,
}

impl FeeSchedule {
    pub fn new(taker_fee_pct: f64) -> Self {
        Self { taker_fee_pct }
    }

    /// Fees for moving one unit: charged on the buy notional and on the sell notional.
    pub fn fee_cost(&self, buy_price: f64, sell_price: f64) -> f64 {
        (buy_price + sell_price) * self.taker_fee_pct / 100.0
    }

    /// Profit per unit after fees. Equals `potential_profit` when fees are zero.
    pub fn net_profit(&self, diff: &PriceDifference) -> f64 {
        diff.potential_profit - self.fee_cost(diff.buy_price, diff.sell_price)
    }

    pub fn is_profitable(&self, diff: &PriceDifference) -> bool {
        self.net_profit(diff) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pairwise::price_difference;
    use crate::models::LatestPrice;

    fn latest(exchange: &str, price: f64) -> LatestPrice {
        LatestPrice {
            exchange: exchange.to_string(),
            price,
            timestamp_ms: 0,
            color: String::new(),
        }
    }

    #[test]
    fn test_zero_fee_keeps_potential_profit() {
        let diff = price_difference(&latest("x", 100.0), &latest("y", 102.0));
        let fees = FeeSchedule::default();
        assert_eq!(fees.net_profit(&diff), diff.potential_profit);
        assert!(fees.is_profitable(&diff));
    }

    #[test]
    fn test_fees_can_eat_the_spread() {
        let diff = price_difference(&latest("x", 100.0), &latest("y", 100.1));
        // 0.1% per leg on ~200 notional = ~0.2 > 0.1 spread
        let fees = FeeSchedule::new(0.1);
        assert!((fees.fee_cost(100.0, 100.1) - 0.2001).abs() < 1e-9);
        assert!(fees.net_profit(&diff) < 0.0);
        assert!(!fees.is_profitable(&diff));
    }

    #[test]
    fn test_equal_prices_never_profitable() {
        let diff = price_difference(&latest("x", 100.0), &latest("y", 100.0));
        assert!(!FeeSchedule::default().is_profitable(&diff));
    }
}
