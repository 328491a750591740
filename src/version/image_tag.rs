//! Conversion of version strings into container image tags

/// Replaces every character not allowed in an image tag with `_`
///
/// Tags may only contain ASCII letters, digits, `_`, `.` and `-`. Resolved CI
/// versions are already valid except for the `+` before build metadata, but any
/// input is accepted.
pub fn sanitize_for_image_tag(version: &str) -> String {
    version
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
