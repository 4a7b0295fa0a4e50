// Feed loading and validation
pub mod feed;
pub mod pre_main_async;

// Re-export commonly used types
pub use feed::{CreateCoinViews, FeedError, get_coin_views_async, parse_feed_document};
pub use pre_main_async::{feed_providers, fetch_coin_views};
