//! Zoho postings from the Lever public postings API.

use common::{SourcedJob, MISSING_LINK, MISSING_TITLE};
use serde::Deserialize;

use super::{map_items, or_placeholder, JobSource};
use crate::error::SourceResult;
use crate::http::Request;
use crate::region::RegionFilter;

pub const ENDPOINT: &str = "https://api.lever.co/v0/postings/zoho?mode=json";

const COMPANY: &str = "Zoho (via Lever)";
const DESCRIPTION: &str = "Various technical and non-technical roles. Filtered for India.";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeverPosting {
    text: Option<String>,
    #[serde(default)]
    categories: LeverCategories,
    hosted_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LeverCategories {
    location: Option<String>,
}

pub struct Lever {
    endpoint: String,
}

impl Lever {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for Lever {
    fn default() -> Self {
        Self::new()
    }
}

impl JobSource for Lever {
    fn label(&self) -> &str {
        "Lever"
    }

    fn display_name(&self) -> &str {
        "Zoho (Lever)"
    }

    fn request(&self) -> Request {
        Request::get(&self.endpoint)
    }

    fn normalize(&self, body: &str, region: &RegionFilter) -> SourceResult {
        // Lever answers with a bare array of postings.
        let postings: Vec<serde_json::Value> = serde_json::from_str(body)?;

        map_items(postings, |posting: LeverPosting| {
            let location = posting.categories.location.unwrap_or_default();
            if !region.matches(&location) {
                return Ok(None);
            }
            Ok(Some(SourcedJob {
                title: or_placeholder(posting.text, MISSING_TITLE),
                company: COMPANY.to_string(),
                location,
                description: DESCRIPTION.to_string(),
                apply_link: or_placeholder(posting.hosted_url, MISSING_LINK),
            }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::DEFAULT_REGION_TOKENS;
    use serde_json::json;

    fn normalize(body: serde_json::Value) -> SourceResult {
        let region = RegionFilter::new(&DEFAULT_REGION_TOKENS).unwrap();
        Lever::new().normalize(&body.to_string(), &region)
    }

    #[test]
    fn test_keeps_only_india_posting() {
        let jobs = normalize(json!([
            {"text": "Backend Engineer", "categories": {"location": "Bengaluru, India"}, "hostedUrl": "https://jobs.lever.co/zoho/1"},
            {"text": "Sales Lead", "categories": {"location": "Berlin, Germany"}, "hostedUrl": "https://jobs.lever.co/zoho/2"}
        ]))
        .unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Backend Engineer");
        assert_eq!(jobs[0].location, "Bengaluru, India");
        assert_eq!(jobs[0].company, "Zoho (via Lever)");
        assert_eq!(jobs[0].apply_link, "https://jobs.lever.co/zoho/1");
    }

    #[test]
    fn test_remote_postings_pass() {
        let jobs = normalize(json!([{"text": "Writer", "categories": {"location": "Remote"}}])).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].apply_link, "#");
    }

    #[test]
    fn test_posting_without_location_is_dropped() {
        let jobs = normalize(json!([{"text": "Mystery"}, {"text": "Null", "categories": {"location": null}}])).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_bad_posting_keeps_jobs_built_before_it() {
        let failure = normalize(json!([
            {"text": "A", "categories": {"location": "Pune, India"}},
            {"text": "B", "categories": null},
            {"text": "C", "categories": {"location": "Remote"}}
        ]))
        .unwrap_err();
        assert_eq!(failure.jobs.len(), 1);
        assert_eq!(failure.jobs[0].title, "A");
        assert!(failure.to_string().starts_with("invalid JSON response"));
    }

    #[test]
    fn test_missing_title_is_placeholder() {
        let jobs = normalize(json!([{"categories": {"location": "Chennai, India"}}])).unwrap();
        assert_eq!(jobs[0].title, "N/A");
    }

    #[test]
    fn test_error_object_is_an_error() {
        let failure = normalize(json!({"ok": false, "error": "Document not found"})).unwrap_err();
        assert!(failure.jobs.is_empty());
    }
}
