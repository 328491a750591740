use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The metadata file does not exist on the server (HTTP 404)
    #[error("File not found: {url}")]
    NotFound { url: String },

    #[error("Unexpected status {status}: {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl FetchError {
    /// Returns true only for a missing metadata file
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid version: {0:?}")]
    InvalidVersionFormat(String),

    #[error(
        "Unrecognized version {0:?}: expected a semantic version or a label (stable, latest, ...)"
    )]
    UnrecognizedVersionFormat(String),

    #[error("Network error: {0}")]
    Network(#[from] FetchError),

    #[error("Malformed client version {version:?}: {source}")]
    MalformedClientVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Version {request:?} did not resolve to a release within {max_depth} hops")]
    ResolutionDepthExceeded { request: String, max_depth: usize },
}
