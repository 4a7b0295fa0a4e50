// Derived models produced by the arbitrage pipeline.
// Everything here is plain immutable data: safe to keep after the source feed is replaced.

pub mod comparison_series;
pub mod price_difference;
pub mod report;

// Re-export key types for convenience
pub use comparison_series::{ComparisonPoint, build_comparison_series, price_axis_domain};
pub use price_difference::{LatestPrice, PriceDifference};
pub use report::{ArbitrageReport, FeedStatus, SummaryStatistics};
