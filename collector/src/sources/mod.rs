//! Career-site sources.
//!
//! Each source knows the request to send and how to turn the response body
//! into [`SourcedJob`]s. Transport lives in [`crate::http`].

use common::SourcedJob;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{FetchError, Result, SourceFailure, SourceResult};
use crate::http::{Fetch, Request};
use crate::region::RegionFilter;

pub mod google;
pub mod greenhouse;
pub mod lever;
pub mod workday;

pub use google::GoogleCareers;
pub use greenhouse::Greenhouse;
pub use lever::Lever;
pub use workday::Workday;

pub trait JobSource {
    /// Short name used in failure diagnostics.
    fn label(&self) -> &str;

    /// Name shown next to the job count on success.
    fn display_name(&self) -> &str;

    fn request(&self) -> Request;

    /// Parses a response body. Filtered sources keep only jobs whose location
    /// passes `region`. An item that cannot be mapped stops the walk; the jobs
    /// built before it travel on the [`SourceFailure`].
    fn normalize(&self, body: &str, region: &RegionFilter) -> SourceResult;
}

/// Fetches and normalizes one source.
pub fn fetch_jobs(source: &dyn JobSource, fetcher: &dyn Fetch, region: &RegionFilter) -> SourceResult {
    let body = fetcher.fetch(&source.request())?;
    source.normalize(&body, region)
}

/// The four production sources, in run order.
pub fn default_sources() -> Vec<Box<dyn JobSource>> {
    vec![
        Box::new(GoogleCareers::new()),
        Box::new(Lever::new()),
        Box::new(Greenhouse::new()),
        Box::new(Workday::new()),
    ]
}

/// Decodes each raw list item as `T` and maps it, in order. `map` returns
/// `Ok(None)` for items it filters out.
fn map_items<T, F>(items: Vec<Value>, mut map: F) -> SourceResult
where
    T: DeserializeOwned,
    F: FnMut(T) -> Result<Option<SourcedJob>>,
{
    let mut jobs = Vec::new();
    for item in items {
        let mapped = serde_json::from_value::<T>(item)
            .map_err(FetchError::from)
            .and_then(&mut map);
        match mapped {
            Ok(Some(job)) => jobs.push(job),
            Ok(None) => {}
            Err(error) => return Err(SourceFailure { jobs, error }),
        }
    }
    Ok(jobs)
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    value.unwrap_or_else(|| placeholder.to_string())
}
