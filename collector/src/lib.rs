//! Career-site job collector.
//!
//! Pulls postings from Google Careers, Lever (Zoho), Greenhouse (Stripe) and
//! Workday (Accenture), keeps the ones in the target region and writes them
//! as a single JSON document.

pub mod config;
pub mod error;
pub mod http;
pub mod output;
pub mod region;
pub mod run;
pub mod sources;

use anyhow::{Context, Result};
use chrono::Local;

use crate::config::Config;
use crate::http::HttpClient;
use crate::region::RegionFilter;
use crate::run::{run_once, RunReport};
use crate::sources::default_sources;

/// Performs one full run against the production endpoints, dated today.
pub fn collect_jobs(config: &Config) -> Result<RunReport> {
    let fetcher = HttpClient::new(config.fetch_timeout)?;
    let region = RegionFilter::new(&config.region_tokens).context("Invalid region tokens")?;
    let today = Local::now().date_naive();

    run_once(&default_sources(), &fetcher, &region, &config.output_file, today)
}
