use itertools::Itertools;

use crate::analysis::ranking::assign_direction;
use crate::models::{LatestPrice, PriceDifference};
use crate::utils::maths_utils::{average_price, percent_of};

/// Number of unordered pairs among `n` exchanges.
pub fn expected_pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Every unordered pair of `prices`, in lexicographic input-index order:
/// (0,1), (0,2), .., (1,2), ..
///
/// `prices` is expected to hold usable (positive) prices only, as produced by the normalizer.
pub fn pairwise_differences(prices: &[LatestPrice]) -> Vec<PriceDifference> {
    prices
        .iter()
        .tuple_combinations()
        .map(|(a, b)| price_difference(a, b))
        .collect()
}

/// Difference record for a single pair. `a` is the earlier entry in input order.
pub fn price_difference(a: &LatestPrice, b: &LatestPrice) -> PriceDifference {
    let difference = (a.price - b.price).abs();
    // Both prices are positive after normalization; percent_of still guards average <= 0
    let percent_difference = percent_of(difference, average_price(a.price, b.price));
    let (buy, sell) = assign_direction(a, b);

    PriceDifference {
        exchange_a: a.exchange.clone(),
        price_a: a.price,
        exchange_b: b.exchange.clone(),
        price_b: b.price,
        difference,
        percent_difference,
        buy_from: buy.exchange.clone(),
        buy_price: buy.price,
        sell_to: sell.exchange.clone(),
        sell_price: sell.price,
        potential_profit: difference,
        timestamp_ms: a.timestamp_ms.min(b.timestamp_ms),
    }
}
