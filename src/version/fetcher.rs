//! Fetcher trait for reading label files from the release server

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::version::error::FetchError;

/// Trait for fetching a plain-text metadata file
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetches the file at `url`
    ///
    /// # Arguments
    /// * `url` - Full URL of the file (e.g., "https://dl.k8s.io/release/stable.txt")
    /// * `timeout` - Upper bound for the whole request
    ///
    /// # Returns
    /// * `Ok(String)` - Body with surrounding whitespace trimmed
    /// * `Err(FetchError::NotFound)` - If the server answered 404
    /// * `Err(FetchError)` - Any other failure
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError>;
}
