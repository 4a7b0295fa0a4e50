use serde::{Deserialize, Serialize};

use crate::models::price_difference::{LatestPrice, PriceDifference};

/// Summary over the full (unfiltered) pairwise set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SummaryStatistics {
    /// Exchanges that survived normalization
    pub exchange_count: usize,
    pub pair_count: usize,
    /// Pairs strictly above the opportunity threshold
    pub opportunity_count: usize,
    pub highest_percent_difference: f64,
    pub average_percent_difference: f64,
    pub highest_absolute_difference: f64,
    /// Pairs whose net profit stays positive once taker fees are paid on both legs
    pub profitable_after_fees_count: usize,
}

/// What the presentation layer should show. "No data" and "no opportunities" are
/// different states, and neither is an error.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    NoData,
    NoOpportunities,
    Opportunities(usize),
}

impl std::fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FeedStatus::NoData => write!(f, "No exchange data available"),
            FeedStatus::NoOpportunities => write!(f, "No opportunities found"),
            FeedStatus::Opportunities(1) => write!(f, "1 opportunity found"),
            FeedStatus::Opportunities(n) => write!(f, "{} opportunities found", n),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ArbitrageReport {
    pub symbol: String,
    pub coin_name: String,
    pub computed_at_ms: i64,
    /// Normalized prices in feed order
    pub latest_prices: Vec<LatestPrice>,
    /// Ranked (and possibly filtered) differences
    pub ranked: Vec<PriceDifference>,
    pub summary: SummaryStatistics,
    pub status: FeedStatus,
}

impl ArbitrageReport {
    /// Report for a coin whose feed yielded nothing usable.
    pub fn no_data(symbol: impl Into<String>, coin_name: impl Into<String>, now_ms: i64) -> Self {
        Self {
            symbol: symbol.into(),
            coin_name: coin_name.into(),
            computed_at_ms: now_ms,
            latest_prices: Vec::new(),
            ranked: Vec::new(),
            summary: SummaryStatistics::default(),
            status: FeedStatus::NoData,
        }
    }

    pub fn has_opportunities(&self) -> bool {
        matches!(self.status, FeedStatus::Opportunities(_))
    }

    /// Best ranked entry under the active sort key.
    pub fn best(&self) -> Option<&PriceDifference> {
        self.ranked.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_is_distinct() {
        assert_eq!(FeedStatus::NoData.to_string(), "No exchange data available");
        assert_eq!(FeedStatus::NoOpportunities.to_string(), "No opportunities found");
        assert_eq!(FeedStatus::Opportunities(1).to_string(), "1 opportunity found");
        assert_eq!(FeedStatus::Opportunities(3).to_string(), "3 opportunities found");
    }

    #[test]
    fn test_no_data_report_is_zeroed() {
        let report = ArbitrageReport::no_data("BTCUSDT", "Bitcoin", 42);
        assert_eq!(report.status, FeedStatus::NoData);
        assert!(!report.has_opportunities());
        assert!(report.best().is_none());
        assert_eq!(report.summary.highest_percent_difference, 0.0);
        assert_eq!(report.summary.average_percent_difference, 0.0);
    }
}
