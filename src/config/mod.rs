//! Configuration module for the spread sniper.

pub mod analysis;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod demo;
pub mod persistence;

// Re-export commonly used items
pub use analysis::{ARBITRAGE, ArbitrageSettings, SettingsError, SortBy};
pub use demo::DEMO;
pub use persistence::PERSISTENCE;
