use std::cmp::Ordering;

use crate::config::{ArbitrageSettings, SortBy};
use crate::models::{LatestPrice, PriceDifference};

/// Decides which side of a pair to buy on: the strictly cheaper exchange.
/// On equal prices the first exchange of the pair is the buy side.
pub fn assign_direction<'a>(
    a: &'a LatestPrice,
    b: &'a LatestPrice,
) -> (&'a LatestPrice, &'a LatestPrice) {
    if b.price < a.price { (b, a) } else { (a, b) }
}

fn sort_key(diff: &PriceDifference, sort_by: SortBy) -> f64 {
    match sort_by {
        SortBy::Percent => diff.percent_difference,
        SortBy::Absolute => diff.difference,
    }
}

/// Descending by the chosen key. Equal keys compare `Equal`, so a stable sort keeps input order.
fn compare_descending(x: &PriceDifference, y: &PriceDifference, sort_by: SortBy) -> Ordering {
    sort_key(y, sort_by).total_cmp(&sort_key(x, sort_by))
}

/// Ordered (and optionally filtered) copy of `diffs`. The input is left untouched.
///
/// With `opportunities_only`, only pairs whose percent difference is strictly above
/// `threshold_pct` are kept.
pub fn rank_differences(
    diffs: &[PriceDifference],
    sort_by: SortBy,
    opportunities_only: bool,
    threshold_pct: f64,
) -> Vec<PriceDifference> {
    let mut ranked: Vec<PriceDifference> = diffs
        .iter()
        .filter(|d| !opportunities_only || d.is_opportunity(threshold_pct))
        .cloned()
        .collect();

    // `sort_by` is stable: ties keep the pairwise engine's order
    ranked.sort_by(|x, y| compare_descending(x, y, sort_by));
    ranked
}

pub fn rank_with_settings(
    diffs: &[PriceDifference],
    settings: &ArbitrageSettings,
) -> Vec<PriceDifference> {
    rank_differences(
        diffs,
        settings.sort_by,
        settings.opportunities_only,
        settings.opportunity_threshold_pct,
    )
}
