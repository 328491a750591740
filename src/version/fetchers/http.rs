//! HTTP implementation of the metadata fetcher

use std::time::Duration;

use tracing::{debug, warn};

use crate::version::error::FetchError;
use crate::version::fetcher::MetadataFetcher;

/// User agent sent with every request
const USER_AGENT: &str = concat!("kube-release-version/", env!("CARGO_PKG_VERSION"));

/// Fetcher that reads label files over HTTP(S)
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl MetadataFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        debug!("fetching Kubernetes version from URL: {}", url);

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                url: url.to_string(),
            });
        }

        if status != reqwest::StatusCode::OK {
            warn!("release server returned status {}: {}", status, url);
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(body.trim().to_string())
    }
}
