//! Bucket resolution for version requests
//!
//! Maps the optional `release/`, `ci/` or `ci-cross/` prefix of a request to the
//! URL of the bucket directory holding the label files.

use crate::version::error::ResolveError;
use crate::version::pattern::VersionPatterns;

/// Splits `version` into the bucket base URL and the label or version after the prefix
///
/// `ci` and `ci-cross` keep their own path segment, everything else resolves
/// against `release`.
pub fn split_version<'a>(
    patterns: &VersionPatterns,
    bucket_root: &str,
    version: &'a str,
) -> Result<(String, &'a str), ResolveError> {
    let matched = patterns
        .match_bucket(version)
        .ok_or_else(|| ResolveError::InvalidVersionFormat(version.to_string()))?;

    let url = format!("{}/{}", bucket_root, matched.bucket().as_str());
    Ok((url, matched.remainder))
}

/// Checks whether the request targets a CI bucket
pub fn is_ci_version(patterns: &VersionPatterns, version: &str) -> bool {
    patterns
        .match_bucket(version)
        .is_some_and(|matched| matched.bucket().is_ci())
}
