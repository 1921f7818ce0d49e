//! Reading and writing the jobs document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use common::JobPosting;
use tracing::info;

/// Overwrites `path` with `jobs` as pretty-printed JSON, creating missing
/// parent directories. The write is not atomic.
pub fn write_jobs(path: &Path, jobs: &[JobPosting]) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
            info!(dir = %dir.display(), "created output directory");
        }
    }

    let json_output =
        serde_json::to_string_pretty(jobs).context("Failed to serialize jobs to JSON")?;
    fs::write(path, json_output).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}

/// Loads a document written by [`write_jobs`]. This is the entry point for
/// consumers of the output file, such as a static-site build step.
pub fn read_jobs(path: &Path) -> Result<Vec<JobPosting>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
