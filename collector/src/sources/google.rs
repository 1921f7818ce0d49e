//! Google Careers search API. The endpoint is already scoped to India by its
//! query string, so no location filter is applied.

use common::{SourcedJob, MISSING_LINK, MISSING_TITLE};
use serde::Deserialize;

use super::{map_items, or_placeholder, JobSource};
use crate::error::{FetchError, SourceResult};
use crate::http::Request;
use crate::region::RegionFilter;

pub const ENDPOINT: &str = "https://careers.google.com/api/v3/search/?location=India";

const COMPANY: &str = "Google";
const DESCRIPTION: &str = "Tech, Engineering, and Business roles at Google India.";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    jobs: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleJob {
    title: Option<String>,
    // Absent means one location with no display name; an empty list is an error.
    #[serde(default = "unknown_location")]
    locations: Vec<GoogleLocation>,
    apply_url: Option<String>,
    details_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleLocation {
    display: Option<String>,
}

fn unknown_location() -> Vec<GoogleLocation> {
    vec![GoogleLocation { display: None }]
}

pub struct GoogleCareers {
    endpoint: String,
}

impl GoogleCareers {
    pub fn new() -> Self {
        Self::with_endpoint(ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for GoogleCareers {
    fn default() -> Self {
        Self::new()
    }
}

impl JobSource for GoogleCareers {
    fn label(&self) -> &str {
        "Google"
    }

    fn display_name(&self) -> &str {
        "Google"
    }

    fn request(&self) -> Request {
        Request::get(&self.endpoint)
    }

    fn normalize(&self, body: &str, _region: &RegionFilter) -> SourceResult {
        let response: SearchResponse = serde_json::from_str(body)?;

        map_items(response.jobs, |job: GoogleJob| {
            let first = job
                .locations
                .into_iter()
                .next()
                .ok_or_else(|| FetchError::Shape("job has an empty `locations` list".to_string()))?;
            let location = or_placeholder(first.display, "N/A");

            // An empty applyUrl falls through to detailsUrl.
            let apply_link = job
                .apply_url
                .filter(|url| !url.is_empty())
                .or(job.details_url);

            Ok(Some(SourcedJob {
                title: or_placeholder(job.title, MISSING_TITLE),
                company: COMPANY.to_string(),
                location,
                description: DESCRIPTION.to_string(),
                apply_link: or_placeholder(apply_link, MISSING_LINK),
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
        GoogleCareers::new().normalize(&body.to_string(), &region)
    }

    #[test]
    fn test_keeps_every_job_regardless_of_location() {
        let jobs = normalize(json!({
            "jobs": [
                {"title": "SRE", "locations": [{"display": "Hyderabad, India"}], "applyUrl": "https://g.co/a"},
                {"title": "PM", "locations": [{"display": "Zurich, Switzerland"}], "applyUrl": "https://g.co/b"}
            ]
        }))
        .unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].location, "Zurich, Switzerland");
        assert_eq!(jobs[0].company, "Google");
        assert_eq!(jobs[0].description, DESCRIPTION);
    }

    #[test]
    fn test_link_prefers_apply_url_then_details_url() {
        let jobs = normalize(json!({
            "jobs": [
                {"applyUrl": "https://g.co/apply", "detailsUrl": "https://g.co/details"},
                {"applyUrl": "", "detailsUrl": "https://g.co/details"},
                {"detailsUrl": "https://g.co/only-details"},
                {}
            ]
        }))
        .unwrap();
        let links: Vec<&str> = jobs.iter().map(|j| j.apply_link.as_str()).collect();
        assert_eq!(
            links,
            vec!["https://g.co/apply", "https://g.co/details", "https://g.co/only-details", "#"]
        );
    }

    #[test]
    fn test_missing_fields_become_placeholders() {
        let jobs = normalize(json!({"jobs": [{}, {"locations": [{}]}]})).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].title, "N/A");
        assert_eq!(jobs[0].location, "N/A");
        assert_eq!(jobs[1].location, "N/A");
    }

    #[test]
    fn test_empty_locations_stops_at_that_job() {
        let failure = normalize(json!({
            "jobs": [
                {"title": "A", "locations": [{"display": "Pune, India"}]},
                {"title": "B", "locations": []},
                {"title": "C", "locations": [{"display": "Hyderabad, India"}]}
            ]
        }))
        .unwrap_err();
        assert_eq!(failure.jobs.len(), 1);
        assert_eq!(failure.jobs[0].title, "A");
        assert!(matches!(failure.error, FetchError::Shape(_)));
    }

    #[test]
    fn test_null_locations_keeps_jobs_built_before_it() {
        let failure = normalize(json!({
            "jobs": [
                {"title": "A", "locations": [{"display": "Pune, India"}]},
                {"title": "B", "locations": null}
            ]
        }))
        .unwrap_err();
        assert_eq!(failure.jobs.len(), 1);
        assert!(matches!(failure.error, FetchError::Decode(_)));
    }

    #[test]
    fn test_missing_jobs_key_is_empty() {
        assert!(normalize(json!({"count": 0})).unwrap().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        assert!(normalize(json!([1, 2, 3])).is_err());
    }
}
