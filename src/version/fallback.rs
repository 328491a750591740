//! Local fallback version derived from the running client's own version
//!
//! Used when the release server has no file for a label (air-gapped or mirror
//! setups). The client version is reduced to something usable as an image tag:
//! build metadata is dropped and the pre-release is cut to `label.N`.

use semver::Version;

use crate::version::error::ResolveError;

/// Version of this build.
///
/// Defaults to the Cargo package version; release builds may inject the full
/// Kubernetes build version through `KUBE_RELEASE_VERSION` at compile time.
pub const BUILD_VERSION: &str = match option_env!("KUBE_RELEASE_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Returns the running client's version with a `v` prefix
pub fn client_version() -> String {
    if BUILD_VERSION.starts_with('v') {
        BUILD_VERSION.to_string()
    } else {
        format!("v{}", BUILD_VERSION)
    }
}

/// Derives the fallback release from a client version such as `v1.9.0-alpha.0.1234+abcdef`
///
/// Examples:
/// - "v1.9.0-alpha.0.1234+sha.abc" -> "v1.9.0-alpha.0"
/// - "v1.9.0-beta+meta" -> "v1.9.0-beta.0"
/// - "1.9.3+abc" -> "v1.9.3"
pub fn derive_fallback(info: &str) -> Result<String, ResolveError> {
    let stripped = info.strip_prefix('v').unwrap_or(info);
    let version =
        Version::parse(stripped).map_err(|source| ResolveError::MalformedClientVersion {
            version: info.to_string(),
            source,
        })?;

    let pre = if version.pre.is_empty() {
        String::new()
    } else {
        let segments: Vec<&str> = version.pre.as_str().split('.').collect();
        match segments.as_slice() {
            [label] => format!("-{}.0", label),
            [label, qualifier, ..] => format!("-{}.{}", label, qualifier),
            [] => String::new(),
        }
    };

    Ok(format!(
        "v{}.{}.{}{}",
        version.major, version.minor, version.patch, pre
    ))
}
