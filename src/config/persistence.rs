//! File locations for feed documents

pub struct FeedPaths {
    /// Directory holding feed documents
    pub directory: &'static str,
    /// File written by `make_demo_feed`
    pub demo_filename: &'static str,
}

pub struct PersistenceConfig {
    pub feed: FeedPaths,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    feed: FeedPaths {
        directory: "feed_data",
        demo_filename: "demo_feed.json",
    },
};

/// Default path of the demo feed document, relative to the working directory.
pub fn demo_feed_path() -> std::path::PathBuf {
    std::path::PathBuf::from(PERSISTENCE.feed.directory).join(PERSISTENCE.feed.demo_filename)
}
