//! Arbitrage computation configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::fees::FeeSchedule;

/// Key used to order the ranked price differences (always descending).
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortBy {
    /// Percentage difference relative to the pair's average price
    #[default]
    Percent,
    /// Absolute price difference in quote currency
    Absolute,
}

/// Settings for opportunity classification
pub struct OpportunityConfig {
    // A pair is an opportunity when its percent difference is strictly above this
    // (in %, not fractional)
    pub threshold_pct: f64,
    pub opportunities_only: bool,
}

/// Settings for the fee model
pub struct FeeConfig {
    // Taker fee charged on each leg, in %
    pub taker_fee_pct: f64,
}

/// The Master Arbitrage Configuration
pub struct ArbitrageConfig {
    pub sort_by: SortBy,
    pub opportunity: OpportunityConfig,
    pub fees: FeeConfig,
    // Half-width of the comparison chart price axis as a fraction of the average price
    pub price_axis_half_width: f64,
}

pub const ARBITRAGE: ArbitrageConfig = ArbitrageConfig {
    sort_by: SortBy::Percent,
    opportunity: OpportunityConfig {
        threshold_pct: 0.1,
        opportunities_only: false,
    },
    fees: FeeConfig { taker_fee_pct: 0.0 },
    // 2% window centred on the average
    price_axis_half_width: 0.01,
};

/// Runtime knobs for one pipeline run.
/// (This is the struct the pipeline consumes; `ARBITRAGE` only supplies its defaults.)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageSettings {
    pub sort_by: SortBy,
    pub opportunities_only: bool,
    pub opportunity_threshold_pct: f64,
    pub fees: FeeSchedule,
}

impl Default for ArbitrageSettings {
    fn default() -> Self {
        Self {
            sort_by: ARBITRAGE.sort_by,
            opportunities_only: ARBITRAGE.opportunity.opportunities_only,
            opportunity_threshold_pct: ARBITRAGE.opportunity.threshold_pct,
            fees: FeeSchedule {
                taker_fee_pct: ARBITRAGE.fees.taker_fee_pct,
            },
        }
    }
}

impl ArbitrageSettings {
    /// Validated constructor. Negative or non-finite knobs are caller bugs, so they fail fast.
    pub fn new(
        sort_by: SortBy,
        opportunities_only: bool,
        opportunity_threshold_pct: f64,
        fees: FeeSchedule,
    ) -> Result<Self, SettingsError> {
        let settings = Self {
            sort_by,
            opportunities_only,
            opportunity_threshold_pct,
            fees,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.opportunity_threshold_pct.is_finite() || self.opportunity_threshold_pct < 0.0 {
            return Err(SettingsError::InvalidThreshold(
                self.opportunity_threshold_pct,
            ));
        }
        if !self.fees.taker_fee_pct.is_finite() || self.fees.taker_fee_pct < 0.0 {
            return Err(SettingsError::InvalidFee(self.fees.taker_fee_pct));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    InvalidThreshold(f64),
    InvalidFee(f64),
}

impl std::error::Error for SettingsError {}
impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SettingsError::InvalidThreshold(value) => write!(
                f,
                "opportunity threshold must be a finite, non-negative percentage (got {})",
                value
            ),
            SettingsError::InvalidFee(value) => write!(
                f,
                "taker fee must be a finite, non-negative percentage (got {})",
                value
            ),
        }
    }
}
