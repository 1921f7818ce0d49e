//! Blocking HTTP transport for the career-site APIs.

use std::time::Duration;

use reqwest::header::ACCEPT;
use tracing::debug;

use crate::error::{FetchError, Result};

/// A single GET issued on behalf of a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    /// Value for the `Accept` header, when the API needs one.
    pub accept: Option<&'static str>,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            accept: None,
        }
    }

    pub fn accept(mut self, mime: &'static str) -> Self {
        self.accept = Some(mime);
        self
    }
}

/// Fetches a response body. Non-success statuses are errors.
pub trait Fetch {
    fn fetch(&self, request: &Request) -> Result<String>;
}

/// [`Fetch`] over a blocking reqwest client with a fixed per-request timeout.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpClient {
    fn fetch(&self, request: &Request) -> Result<String> {
        debug!(url = %request.url, "sending request");

        let mut builder = self.client.get(&request.url);
        if let Some(mime) = request.accept {
            builder = builder.header(ACCEPT, mime);
        }

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: request.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!(url = %request.url, status = status.as_u16(), bytes = body.len(), "received response");
        Ok(body)
    }
}
