use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// =============================================================================
// Release server constants
// =============================================================================

/// Default root of the release bucket that publishes `<label>.txt` files
pub const DEFAULT_BUCKET_URL: &str = "https://dl.k8s.io";

/// Timeout for a single metadata fetch in milliseconds (10 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 10_000;

/// Maximum number of label hops before resolution is abandoned
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Log file written inside [`data_dir`] when file logging is enabled
pub const LOG_FILE_NAME: &str = "kube-release-version.log";

/// Resolver configuration
///
/// Built once at startup and handed to [`crate::version::resolver::VersionResolver`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Root URL of the release bucket
    pub bucket_url: String,
    /// Per-request timeout in milliseconds
    pub fetch_timeout_ms: u64,
    /// Maximum label hops followed by a single resolution
    pub max_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            bucket_url: DEFAULT_BUCKET_URL.to_string(),
            fetch_timeout_ms: FETCH_TIMEOUT_MS,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ResolverConfig {
    /// Creates a configuration pointing at a custom bucket root
    pub fn with_bucket_url(bucket_url: &str) -> Self {
        Self {
            bucket_url: bucket_url.to_string(),
            ..Self::default()
        }
    }

    /// Loads a configuration from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Bucket root without a trailing slash, ready for joining path segments
    pub fn bucket_root(&self) -> &str {
        self.bucket_url.trim_end_matches('/')
    }
}

/// Returns the path to the data directory for kube-release-version.
/// Uses $XDG_DATA_HOME/kube-release-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/kube-release-version,
/// or ./kube-release-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("kube-release-version")
}
