//! Version-string helpers shared by the release tasks.
//!
//! Versions are the project's PEP-440-ish strings (`2.1`, `2.1.1`, `2.2a3`,
//! `2.2b1`, `2.2-rc1`); they are handled as text, never parsed into semver.
use regex::Regex;
use std::sync::LazyLock;

static FINAL_VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.){1,2}\d+$").unwrap());

/// Milestone title for a version string.
///
/// Pre-release suffixes share their milestone with the final release, so the
/// version is truncated at the first `a`, `b`, or `-` marker: `2.2a3`,
/// `2.2b1`, and `2.2-rc1` all map to milestone `2.2`.
pub fn milestone_for(version: &str) -> &str {
    match version.find(['a', 'b', '-']) {
        Some(idx) => &version[..idx],
        None => version,
    }
}

/// Whether a version string names a final release (plain `X.Y` or `X.Y.Z`).
pub fn is_final(version: &str) -> bool {
    FINAL_VERSION_REGEX.is_match(version)
}
