//! Pattern rules for classifying version requests
//!
//! Three rules decide how a request is handled:
//! - literal release: `v1.10.3`, `1.11.0-beta.0.55+abc`
//! - label: `stable`, `stable-1`, `latest-1.10`
//! - bucket prefix: `release/stable`, `ci/latest-1.10`, `ci-cross/v1.8.0-alpha.1`

use regex::Regex;

/// Remote bucket a request is resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    Release,
    Ci,
    CiCross,
}

impl Bucket {
    /// Path segment of this bucket below the bucket root
    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Release => "release",
            Bucket::Ci => "ci",
            Bucket::CiCross => "ci-cross",
        }
    }

    /// Maps a captured prefix to a bucket; anything not starting with `ci` is a release
    pub fn from_prefix(prefix: Option<&str>) -> Self {
        match prefix {
            Some("ci-cross") => Bucket::CiCross,
            Some(p) if p.starts_with("ci") => Bucket::Ci,
            _ => Bucket::Release,
        }
    }

    pub fn is_ci(&self) -> bool {
        matches!(self, Bucket::Ci | Bucket::CiCross)
    }
}

/// A request split by the bucket-prefix rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketMatch<'a> {
    /// `release`, `ci` or `ci-cross` when the request carried a prefix
    pub prefix: Option<&'a str>,
    /// Label or version text after the prefix
    pub remainder: &'a str,
}

impl BucketMatch<'_> {
    pub fn bucket(&self) -> Bucket {
        Bucket::from_prefix(self.prefix)
    }
}

/// Compiled pattern rules
pub struct VersionPatterns {
    /// Regex for a literal release: `v1.2.3[-pre][+build]`
    release_re: Regex,
    /// Regex for a release label: `stable`, `latest-1.10`
    label_re: Regex,
    /// Regex for an optionally bucket-prefixed request: `ci/latest`
    bucket_re: Regex,
}

impl VersionPatterns {
    pub fn new() -> Self {
        Self {
            release_re: Regex::new(
                r"^v?(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)([-0-9a-zA-Z_\.+]*)?$",
            )
            .expect("release regex is valid"),
            // ASCII classes; `\w` would admit any Unicode letter
            label_re: Regex::new(r"^[[:lower:]]+(-[-0-9A-Za-z_\.]+)?$")
                .expect("label regex is valid"),
            bucket_re: Regex::new(r"^((release|ci|ci-cross)/)?([-0-9A-Za-z_\.+]+)$")
                .expect("bucket regex is valid"),
        }
    }

    /// Checks whether `version` is already a fully specified release
    pub fn is_literal_version(&self, version: &str) -> bool {
        self.release_re.is_match(version)
    }

    /// Checks whether `version` is a label worth asking the release server about
    pub fn is_label(&self, version: &str) -> bool {
        self.label_re.is_match(version)
    }

    /// Splits `version` into its bucket prefix and remainder
    ///
    /// Returns None when the request contains characters outside the allowed set
    /// or an unknown prefix.
    pub fn match_bucket<'a>(&self, version: &'a str) -> Option<BucketMatch<'a>> {
        let caps = self.bucket_re.captures(version)?;
        let remainder = caps.get(3)?.as_str();
        Some(BucketMatch {
            prefix: caps.get(2).map(|m| m.as_str()),
            remainder,
        })
    }

    /// Returns the request with a `v` prefix when it is a literal release
    ///
    /// Returns None when `version` is not a literal release.
    pub fn normalize_literal(&self, version: &str) -> Option<String> {
        if !self.is_literal_version(version) {
            return None;
        }
        if version.starts_with('v') {
            Some(version.to_string())
        } else {
            Some(format!("v{}", version))
        }
    }
}

impl Default for VersionPatterns {
    fn default() -> Self {
        Self::new()
    }
}
