//! Number formatting for the terminal report.

/// Formats a price with "Trader Precision".
/// - Large (>1000): 2 decimals ($95123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 5-8 decimals ($0.00000231)
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        return "$0.00".to_string();
    }

    let abs_price = price.abs();

    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else if abs_price >= 0.01 {
        format!("${:.5}", price)
    } else {
        format!("${:.8}", price)
    }
}

/// Percentages are shown with four decimals, matching the comparison table.
pub fn format_percent(pct: f64) -> String {
    format!("{:.4}%", pct)
}
