//! Splicing generated notes into the in-app release notes plugin.
//!
//! The application ships a plugin module whose tail is a `RELEASE_NOTES`
//! assignment holding the HTML table. Each release regenerates the table and
//! replaces everything from the last assignment onward, leaving the plugin
//! code above it untouched.
use log::*;
use std::{fs, path::Path};

use crate::{error::RelkitError, result::Result};

/// Assignment the generated notes are spliced after.
pub const NOTES_MARKER: &str = "RELEASE_NOTES =";

/// Replace the content after the last marker assignment in `path` with
/// freshly rendered HTML.
pub fn splice_notes(path: &Path, html: &str) -> Result<()> {
    let source = fs::read_to_string(path)?;

    let Some(idx) = source.rfind(NOTES_MARKER) else {
        return Err(RelkitError::MarkerNotFound {
            marker: NOTES_MARKER.to_string(),
            path: path.display().to_string(),
        }
        .into());
    };

    let mut updated = source[..idx].to_string();
    updated.push_str(&format!("{NOTES_MARKER} \"\"\"\n{html}\"\"\"\n"));

    fs::write(path, updated)?;

    info!("spliced fresh release notes into {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_content_after_the_marker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releasenotes.py");
        fs::write(
            &path,
            "class ReleaseNotes:\n    pass\n\nRELEASE_NOTES = \"\"\"\n<h2>old</h2>\"\"\"\n",
        )
        .unwrap();

        splice_notes(&path, "<h2>new</h2>\n").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "class ReleaseNotes:\n    pass\n\nRELEASE_NOTES = \"\"\"\n<h2>new</h2>\n\"\"\"\n"
        );
    }

    #[test]
    fn only_the_last_marker_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releasenotes.py");
        fs::write(
            &path,
            "DEFAULT_RELEASE_NOTES = \"fallback\"\n\nRELEASE_NOTES = \"\"\"\nstale\"\"\"\n",
        )
        .unwrap();

        splice_notes(&path, "fresh\n").unwrap();

        let updated = fs::read_to_string(&path).unwrap();
        assert!(updated.starts_with("DEFAULT_RELEASE_NOTES = \"fallback\"\n"));
        assert!(updated.ends_with("RELEASE_NOTES = \"\"\"\nfresh\n\"\"\"\n"));
        assert!(!updated.contains("stale"));
    }

    #[test]
    fn missing_marker_is_a_named_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("releasenotes.py");
        fs::write(&path, "# plugin without a notes assignment\n").unwrap();

        let err = splice_notes(&path, "fresh\n").unwrap_err();
        let domain = err.downcast_ref::<RelkitError>().unwrap();

        assert!(matches!(domain, RelkitError::MarkerNotFound { .. }));
        // file is left untouched
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# plugin without a notes assignment\n"
        );
    }
}
