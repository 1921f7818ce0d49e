//! Career-site Job Collector
//!
//! Fetches India and remote jobs from four employer career APIs
//! and saves them to a single JSON file.

use anyhow::Result;
use collector::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Diagnostics go to stderr; stdout is reserved for progress lines.
    tracing_subscriber::registry()
        .with(EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("🔍 Starting job collection...\n");

    let report = collector::collect_jobs(&config)?;

    println!(
        "\n✅ COLLECTED {} JOBS. Saved to {}.",
        report.total,
        report.output.display()
    );
    Ok(())
}
