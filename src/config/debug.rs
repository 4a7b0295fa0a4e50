//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Most call sites are additionally gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit one line per snapshot record rejected during feed ingestion.
    pub print_ingest_rejections: bool,
    /// Emit feed provider attempts and which provider finally supplied data.
    pub print_feed_providers: bool,
    /// Emit a summary line every time the pipeline runs for a coin.
    pub print_pipeline_summary: bool,
    /// Emit monitor cache hits (feed unchanged, recomputation skipped).
    pub print_monitor_progress: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ingest_rejections: true,
    print_feed_providers: false,
    print_pipeline_summary: false,
    print_monitor_progress: false,
};
