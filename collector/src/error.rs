use common::SourcedJob;
use thiserror::Error;

/// Everything that can go wrong while pulling jobs from one source.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} for url ({url})")]
    Status { url: String, status: u16 },

    #[error("invalid JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected response shape: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// A source that stopped partway. `jobs` holds what was built before `error`;
/// for transport and top-level decode failures it is empty.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct SourceFailure {
    pub jobs: Vec<SourcedJob>,
    pub error: FetchError,
}

impl From<FetchError> for SourceFailure {
    fn from(error: FetchError) -> Self {
        Self {
            jobs: Vec::new(),
            error,
        }
    }
}

impl From<serde_json::Error> for SourceFailure {
    fn from(error: serde_json::Error) -> Self {
        FetchError::from(error).into()
    }
}

pub type SourceResult = std::result::Result<Vec<SourcedJob>, SourceFailure>;
