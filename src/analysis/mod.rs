// Arbitrage computation: every stage is a pure function of its input
pub mod fees;
pub mod multi_coin_monitor;
pub mod normalizer;
pub mod pairwise;
pub mod pipeline;
pub mod ranking;
pub mod statistics;

// Re-export commonly used types
pub use fees::FeeSchedule;
pub use multi_coin_monitor::ArbitrageMonitor;
pub use normalizer::{Exclusion, latest_price, normalize_quote, normalize_quotes};
pub use pairwise::pairwise_differences;
pub use pipeline::analyse_coin;
pub use ranking::{rank_differences, rank_with_settings};
pub use statistics::summarize;
