use anyhow::{Context, Result};
use spread_sniper::config::persistence::demo_feed_path;
use spread_sniper::data::feed::demo_version::demo_feed_documents;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    build_demo_feed()
}

fn build_demo_feed() -> Result<()> {
    let documents = demo_feed_documents();
    let output_path = demo_feed_path();

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let text = serde_json::to_string_pretty(&documents).context("Failed to serialize demo feed")?;
    std::fs::write(&output_path, text)
        .with_context(|| format!("Failed to write demo feed {:?}", output_path))?;

    println!(
        "✅ Demo feed written to {:?} with {} coin(s).",
        output_path,
        documents.len()
    );
    Ok(())
}
