//! Release version resolver
//!
//! Turns a version request into a canonical `vX.Y.Z[-pre]` release:
//! - literal versions are normalized without network access
//! - labels (`stable`, `ci/latest-1.10`) are looked up on the release server
//!   and the returned text is resolved again
//! - a missing label file (404) falls back to the running client's own version

use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::version::bucket::{is_ci_version, split_version};
use crate::version::error::ResolveError;
use crate::version::fallback::derive_fallback;
use crate::version::fetcher::MetadataFetcher;
use crate::version::pattern::VersionPatterns;

/// Resolves version requests against a release bucket
///
/// Holds no state between calls; each `resolve` is independent.
pub struct VersionResolver<F: MetadataFetcher> {
    fetcher: F,
    patterns: VersionPatterns,
    config: ResolverConfig,
    client_version: String,
}

impl<F: MetadataFetcher> VersionResolver<F> {
    /// Create a resolver
    ///
    /// `client_version` is the running client's semantic version, used as the
    /// fallback when the release server has no file for a label.
    pub fn new(fetcher: F, config: ResolverConfig, client_version: impl Into<String>) -> Self {
        Self {
            fetcher,
            patterns: VersionPatterns::new(),
            config,
            client_version: client_version.into(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Resolve a version request into a canonical release version
    ///
    /// Available labels on the release server:
    /// - `stable`, `stable-1`, `stable-1.10`: latest stable release (in 1.x, in 1.10.x)
    /// - `latest`, `latest-1`, `latest-1.10`: latest release including alpha/beta
    ///
    /// Labels may be prefixed with `release/`, `ci/` or `ci-cross/` to pick the bucket.
    pub async fn resolve(&self, version: &str) -> Result<String, ResolveError> {
        self.resolve_hop(version, 0).await
    }

    /// Checks whether the request asks for a CI build
    pub fn is_ci_request(&self, version: &str) -> bool {
        is_ci_version(&self.patterns, version)
    }

    async fn resolve_hop(&self, version: &str, depth: usize) -> Result<String, ResolveError> {
        if let Some(normalized) = self.patterns.normalize_literal(version) {
            return Ok(normalized);
        }

        let (bucket_url, label) =
            split_version(&self.patterns, self.config.bucket_root(), version)?;

        // Exact build requested from a bucket, e.g. ci/v1.8.0-alpha.1
        if let Some(normalized) = self.patterns.normalize_literal(label) {
            return Ok(normalized);
        }

        if !self.patterns.is_label(label) {
            return Err(ResolveError::UnrecognizedVersionFormat(version.to_string()));
        }

        if depth >= self.config.max_depth {
            return Err(ResolveError::ResolutionDepthExceeded {
                request: version.to_string(),
                max_depth: self.config.max_depth,
            });
        }

        let url = format!("{}/{}.txt", bucket_url, label);
        let body = match self.fetcher.fetch(&url, self.config.fetch_timeout()).await {
            Ok(body) => body,
            Err(err) if err.is_not_found() => {
                warn!(
                    "could not fetch a Kubernetes version from the internet: {}",
                    err
                );
                let fallback = derive_fallback(&self.client_version)?;
                warn!("falling back to the local client version: {}", fallback);
                fallback
            }
            Err(err) => return Err(err.into()),
        };

        debug!("label {:?} resolved to {:?}", version, body);
        Box::pin(self.resolve_hop(&body, depth + 1)).await
    }
}
