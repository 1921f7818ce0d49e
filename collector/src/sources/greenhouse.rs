//! Stripe's job board on the Greenhouse boards API.

use common::{SourcedJob, MISSING_LINK, MISSING_TITLE};
use serde::Deserialize;

use super::{map_items, or_placeholder, JobSource};
use crate::error::SourceResult;
use crate::http::Request;
use crate::region::RegionFilter;

pub const ENDPOINT: &str = "https://boards-api.greenhouse.io/v1/boards/stripe/jobs";

const COMPANY: &str = "Stripe (via Greenhouse)";
const DESCRIPTION: &str = "Fintech and software roles for Stripe.";

#[derive(Debug, Deserialize)]
struct BoardResponse {
    #[serde(default)]
    jobs: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GreenhouseJob {
    title: Option<String>,
    #[serde(default)]
    location: GreenhouseLocation,
    absolute_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GreenhouseLocation {
    name: Option<String>,
}

pub struct Greenhouse {
    endpoint: String,
}

impl Greenhouse {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Greenhouse {
    fn default() -> Self {
        Self::new()
    }
}

impl JobSource for Greenhouse {
    fn label(&self) -> &str {
        "Greenhouse"
    }

    fn display_name(&self) -> &str {
        "Stripe (Greenhouse)"
    }

    fn request(&self) -> Request {
        Request::get(&self.endpoint)
    }

    fn normalize(&self, body: &str, region: &RegionFilter) -> SourceResult {
        let board: BoardResponse = serde_json::from_str(body)?;

        map_items(board.jobs, |job: GreenhouseJob| {
            let location = job.location.name.unwrap_or_default();
            if !region.matches(&location) {
                return Ok(None);
            }
            Ok(Some(SourcedJob {
                title: or_placeholder(job.title, MISSING_TITLE),
                company: COMPANY.to_string(),
                location,
                description: DESCRIPTION.to_string(),
                apply_link: or_placeholder(job.absolute_url, MISSING_LINK),
            }))
        })
    }
}
