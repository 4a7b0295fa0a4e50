//! Stateless exchange colour assignment.

/// (up, down) colour pair per exchange slot; slots repeat past the end.
pub const DEFAULT_EXCHANGE_COLORS: [(&str, &str); 4] = [
    ("#AF2AE9", "#E70D9F"), // purple, magenta
    ("#06D6CC", "#FC5F2F"), // cyan, orange
    ("#43a047", "#e53935"), // green, red
    ("#f9c846", "#f55c47"), // yellow, coral
];

/// Colour pair for the exchange at `idx` in feed order.
pub fn exchange_colors(idx: usize) -> (&'static str, &'static str) {
    DEFAULT_EXCHANGE_COLORS[idx % DEFAULT_EXCHANGE_COLORS.len()]
}

/// The feed's own colour wins; the palette only fills gaps.
pub fn display_color(feed_color: &str, idx: usize) -> &str {
    if feed_color.trim().is_empty() {
        exchange_colors(idx).0
    } else {
        feed_color
    }
}

/// (up, down) pair for one exchange. A feed colour replaces the up side only.
pub fn candle_colors(feed_color: &str, idx: usize) -> (&str, &'static str) {
    (display_color(feed_color, idx), exchange_colors(idx).1)
}
