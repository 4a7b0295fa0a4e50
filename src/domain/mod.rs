// Domain types and value objects
pub mod candle;
pub mod coin_view;
pub mod exchange_quote;

// Re-export commonly used types
pub use candle::{CandleType, MarketSnapshot};
pub use coin_view::CoinView;
pub use exchange_quote::ExchangeQuote;
