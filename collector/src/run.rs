//! One aggregation run: fetch every source in order, merge, number, save.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use common::{assemble, SourcedJob};
use tracing::{debug, warn};

use crate::http::Fetch;
use crate::output::write_jobs;
use crate::region::RegionFilter;
use crate::sources::{fetch_jobs, JobSource};

/// How one source fared during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOutcome {
    pub label: String,
    /// Jobs contributed, including any built before a failure.
    pub jobs: usize,
    /// The printed failure message, if the source stopped early.
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<SourceOutcome>,
    pub total: usize,
    pub output: PathBuf,
}

impl RunReport {
    pub fn failed_sources(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|o| o.error.is_some())
            .map(|o| o.label.as_str())
    }
}

/// Runs each source in turn. A failing source is reported and contributes
/// only the jobs it built before failing; it never stops the remaining sources.
pub fn collect_all(
    sources: &[Box<dyn JobSource>],
    fetcher: &dyn Fetch,
    region: &RegionFilter,
) -> (Vec<SourcedJob>, Vec<SourceOutcome>) {
    let mut all_jobs = Vec::new();
    let mut outcomes = Vec::with_capacity(sources.len());

    for source in sources {
        let (jobs, error) = match fetch_jobs(source.as_ref(), fetcher, region) {
            Ok(jobs) => {
                println!("✅ {}: {} jobs found.", source.display_name(), jobs.len());
                debug!(source = source.label(), count = jobs.len(), "source finished");
                (jobs, None)
            }
            Err(failure) => {
                println!("❌ {} fetch failed: {}", source.label(), failure);
                warn!(
                    source = source.label(),
                    error = %failure,
                    kept = failure.jobs.len(),
                    "source stopped early"
                );
                let message = failure.to_string();
                (failure.jobs, Some(message))
            }
        };
        outcomes.push(SourceOutcome {
            label: source.label().to_string(),
            jobs: jobs.len(),
            error,
        });
        all_jobs.extend(jobs);
    }

    (all_jobs, outcomes)
}

/// Collects from `sources`, stamps the jobs with `run_date` and overwrites
/// `output`. Only a failure to write the file is returned as an error.
pub fn run_once(
    sources: &[Box<dyn JobSource>],
    fetcher: &dyn Fetch,
    region: &RegionFilter,
    output: &Path,
    run_date: NaiveDate,
) -> Result<RunReport> {
    let (jobs, outcomes) = collect_all(sources, fetcher, region);
    let postings = assemble(jobs, run_date);

    write_jobs(output, &postings)?;
    debug!(path = %output.display(), count = postings.len(), "saved jobs");

    Ok(RunReport {
        outcomes,
        total: postings.len(),
        output: output.to_path_buf(),
    })
}
