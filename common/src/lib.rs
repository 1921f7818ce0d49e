//! Shared job records for the aggregator.
//!
//! Sources produce [`SourcedJob`]s; [`assemble`] turns the merged list into
//! the numbered [`JobPosting`]s that end up in the output file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder used when a source omits the job title.
pub const MISSING_TITLE: &str = "N/A";

/// Placeholder used when a source omits the posting URL.
pub const MISSING_LINK: &str = "#";

/// A job as normalized by a single source, before ids and dates are assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
}

/// A job in the final output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub link: String,
    #[serde(rename = "postedDate")]
    pub posted_date: NaiveDate,
}

/// Numbers the merged jobs `1..=N` in order and stamps each with the run date.
pub fn assemble(jobs: Vec<SourcedJob>, run_date: NaiveDate) -> Vec<JobPosting> {
    jobs.into_iter()
        .zip(1..)
        .map(|(job, id)| JobPosting {
            id,
            title: job.title,
            company: job.company,
            location: job.location,
            description: job.description,
            link: job.apply_link,
            posted_date: run_date,
        })
        .collect()
}
