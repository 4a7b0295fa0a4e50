// Terminal presentation
pub mod palette;
pub mod table;

pub use palette::{candle_colors, display_color, exchange_colors};
pub use table::{render_report, render_series};
