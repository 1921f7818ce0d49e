//! Accenture careers on Workday.
//!
//! The CXS jobs endpoint only returns JSON when asked for it explicitly, so
//! this is the one source that sends an `Accept` header.

use common::{SourcedJob, MISSING_TITLE};
use serde::Deserialize;

use super::{map_items, or_placeholder, JobSource};
use crate::error::SourceResult;
use crate::http::Request;
use crate::region::RegionFilter;

pub const ENDPOINT: &str =
    "https://accenture.wd3.myworkdayjobs.com/wday/cxs/accenture/Accenture_Careers/jobs";

/// Public job pages live under this prefix, followed by the posting's `externalPath`.
pub const JOB_PAGE_PREFIX: &str =
    "https://accenture.wd3.myworkdayjobs.com/en-US/Accenture_Careers/job/";

const COMPANY: &str = "Accenture (via Workday)";
const DESCRIPTION: &str = "Consulting and Technology roles in India.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JobsResponse {
    #[serde(default)]
    job_postings: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkdayPosting {
    title: Option<String>,
    locations_text: Option<String>,
    external_path: Option<String>,
}

pub struct Workday {
    endpoint: String,
}

impl Workday {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Workday {
    fn default() -> Self {
        Self::new()
    }
}

impl JobSource for Workday {
    fn label(&self) -> &str {
        "Workday"
    }

    fn display_name(&self) -> &str {
        "Accenture (Workday)"
    }

    fn request(&self) -> Request {
        Request::get(&self.endpoint).accept("application/json")
    }

    fn normalize(&self, body: &str, region: &RegionFilter) -> SourceResult {
        let response: JobsResponse = serde_json::from_str(body)?;

        map_items(response.job_postings, |posting: WorkdayPosting| {
            let location = posting.locations_text.unwrap_or_default();
            if !region.matches(&location) {
                return Ok(None);
            }
            let apply_link = format!(
                "{}{}",
                JOB_PAGE_PREFIX,
                posting.external_path.unwrap_or_default()
            );
            Ok(Some(SourcedJob {
                title: or_placeholder(posting.title, MISSING_TITLE),
                company: COMPANY.to_string(),
                location,
                description: DESCRIPTION.to_string(),
                apply_link,
            }))
        })
    }
}
