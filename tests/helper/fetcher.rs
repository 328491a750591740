//! In-memory metadata fetcher

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use kube_release_version::version::error::FetchError;
use kube_release_version::version::fetcher::MetadataFetcher;

/// Mock fetcher serving label files from memory
///
/// URLs without a registered body answer with `FetchError::NotFound`.
pub struct MockFetcher {
    files: HashMap<String, Result<String, reqwest::StatusCode>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_file(mut self, url: &str, body: &str) -> Self {
        self.files.insert(url.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_status(mut self, url: &str, status: reqwest::StatusCode) -> Self {
        self.files.insert(url.to_string(), Err(status));
        self
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataFetcher for MockFetcher {
    async fn fetch(&self, url: &str, _timeout: Duration) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.files.get(url) {
            Some(Ok(body)) => Ok(body.trim().to_string()),
            Some(Err(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::NotFound {
                url: url.to_string(),
            }),
        }
    }
}
