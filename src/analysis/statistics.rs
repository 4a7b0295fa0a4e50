use crate::analysis::fees::FeeSchedule;
use crate::models::{LatestPrice, PriceDifference, SummaryStatistics};
use crate::utils::maths_utils::{max_or_zero, mean_or_zero};

/// Reduces the full pairwise set to summary metrics.
///
/// Always pass the UNFILTERED set: the summary describes the market, not the current view.
/// `valid_prices` supplies the exchange count, which cannot be recovered from pairs when N < 2.
pub fn summarize(
    valid_prices: &[LatestPrice],
    diffs: &[PriceDifference],
    threshold_pct: f64,
    fees: &FeeSchedule,
) -> SummaryStatistics {
    let percents: Vec<f64> = diffs.iter().map(|d| d.percent_difference).collect();
    let absolutes: Vec<f64> = diffs.iter().map(|d| d.difference).collect();

    SummaryStatistics {
        exchange_count: valid_prices.len(),
        pair_count: diffs.len(),
        opportunity_count: diffs
            .iter()
            .filter(|d| d.is_opportunity(threshold_pct))
            .count(),
        highest_percent_difference: max_or_zero(&percents),
        average_percent_difference: mean_or_zero(&percents),
        highest_absolute_difference: max_or_zero(&absolutes),
        profitable_after_fees_count: diffs.iter().filter(|d| fees.is_profitable(d)).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::pairwise::pairwise_differences;

    fn prices(values: &[(&str, f64)]) -> Vec<LatestPrice> {
        values
            .iter()
            .map(|(name, price)| LatestPrice {
                exchange: name.to_string(),
                price: *price,
                timestamp_ms: 0,
                color: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_empty_set_is_zero_not_nan() {
        let summary = summarize(&[], &[], 0.1, &FeeSchedule::default());
        assert_eq!(summary, SummaryStatistics::default());
        assert!(!summary.average_percent_difference.is_nan());
    }

    #[test]
    fn test_single_exchange() {
        let valid = prices(&[("only", 100.0)]);
        let diffs = pairwise_differences(&valid);
        let summary = summarize(&valid, &diffs, 0.1, &FeeSchedule::default());
        assert_eq!(summary.exchange_count, 1);
        assert_eq!(summary.pair_count, 0);
        assert_eq!(summary.opportunity_count, 0);
        assert_eq!(summary.highest_percent_difference, 0.0);
    }

    #[test]
    fn test_flat_market() {
        let valid = prices(&[("X", 100.0), ("Y", 100.0), ("Z", 100.0)]);
        let diffs = pairwise_differences(&valid);
        let summary = summarize(&valid, &diffs, 0.1, &FeeSchedule::default());
        assert_eq!(summary.exchange_count, 3);
        assert_eq!(summary.pair_count, 3);
        assert_eq!(summary.opportunity_count, 0);
        assert_eq!(summary.profitable_after_fees_count, 0);
        assert_eq!(summary.average_percent_difference, 0.0);
    }

    #[test]
    fn test_three_exchange_summary() {
        let valid = prices(&[("A", 50_000.0), ("B", 50_500.0), ("C", 49_800.0)]);
        let diffs = pairwise_differences(&valid);
        let summary = summarize(&valid, &diffs, 0.1, &FeeSchedule::default());

        let bc = 700.0 / 50_150.0 * 100.0;
        let ab = 500.0 / 50_250.0 * 100.0;
        let ac = 200.0 / 49_900.0 * 100.0;
        assert_eq!(summary.opportunity_count, 3);
        assert!((summary.highest_percent_difference - bc).abs() < 1e-9);
        assert!((summary.average_percent_difference - (ab + ac + bc) / 3.0).abs() < 1e-9);
        assert_eq!(summary.highest_absolute_difference, 700.0);

        // 0.5% per leg: (B,C) 700 - 501.5 > 0 ; (A,B) 500 - 502.5 < 0 ; (A,C) 200 - 499 < 0
        let summary = summarize(&valid, &diffs, 0.1, &FeeSchedule::new(0.5));
        assert_eq!(summary.profitable_after_fees_count, 1);
        let summary = summarize(&valid, &diffs, 0.1, &FeeSchedule::new(0.3));
        // 0.3% per leg: (B,C) 700 - 300.9 > 0 ; (A,B) 500 - 301.5 > 0 ; (A,C) 200 - 299.4 < 0
        assert_eq!(summary.profitable_after_fees_count, 2);
    }
}
