//! Configuration loading and parsing for `relkit.toml` files.
//!
//! Every section has full defaults so a bare repository works out of the box;
//! the vendor section is the exception and is validated only when the
//! `vendor` task actually runs.
use log::*;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{error::RelkitError, result::Result};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "relkit.toml";

/// Project layout: where sources, tests, and build products live relative to
/// the project root.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)] // Use default for missing fields
pub struct ProjectConfig {
    /// Importable package name, also used by the `devel` task (`python -m`).
    pub name: String,
    /// Directory containing the package sources.
    pub source_dir: String,
    /// Directory containing the unit tests.
    pub test_dir: String,
    /// Directory distutils writes distribution archives to.
    pub dist_dir: String,
    /// Scratch directory distutils builds into.
    pub build_dir: String,
    /// Generated version module, rewritten by the `version` task.
    pub version_file: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "app".to_string(),
            source_dir: "src".to_string(),
            test_dir: "utest".to_string(),
            dist_dir: "dist".to_string(),
            build_dir: "build".to_string(),
            version_file: "src/app/version.py".to_string(),
        }
    }
}

/// Vendored-library settings for the `vendor` task.
///
/// All paths are relative to the project root, so a sibling checkout is
/// `../engine`; `upstream_path` may also be absolute.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VendorConfig {
    /// Path to the upstream working copy (a git checkout).
    pub upstream_path: String,
    /// Directory inside the upstream checkout to bundle, e.g. `src/engine`.
    pub upstream_subdir: String,
    /// Top-level module name of the vendored library, e.g. `engine`.
    pub module: String,
    /// Directory the vendored module is bundled under, e.g. `src/app/lib`.
    pub bundle_dir: String,
    /// Dotted package path imports are rewritten to, e.g. `app.lib`.
    pub namespace: String,
    /// File recording the bundled upstream commit hash.
    /// Defaults to `<bundle_dir>/<module>-commit`.
    pub commit_marker: String,
}

impl VendorConfig {
    /// Reject incomplete or self-defeating vendor settings before any file is
    /// touched.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("vendor.upstream_path", &self.upstream_path),
            ("vendor.upstream_subdir", &self.upstream_subdir),
            ("vendor.module", &self.module),
            ("vendor.bundle_dir", &self.bundle_dir),
            ("vendor.namespace", &self.namespace),
        ] {
            if value.is_empty() {
                return Err(RelkitError::invalid_config(format!(
                    "{field} is not set"
                ))
                .into());
            }
        }

        // A namespace that starts with the module name would make rewritten
        // imports match the rewrite patterns again on the next run.
        if self.namespace == self.module
            || self.namespace.starts_with(&format!("{}.", self.module))
        {
            return Err(RelkitError::invalid_config(format!(
                "vendor.namespace '{}' must not start with vendor.module '{}'",
                self.namespace, self.module
            ))
            .into());
        }

        Ok(())
    }

    /// Resolved commit marker path relative to the project root.
    pub fn commit_marker_path(&self) -> String {
        if self.commit_marker.is_empty() {
            format!("{}/{}-commit", self.bundle_dir, self.module)
        } else {
            self.commit_marker.clone()
        }
    }
}

/// Issue tracker coordinates used when no `--repo` URL is passed on the
/// command line.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TrackerConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Tracker host (e.g., "github.com").
    pub host: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            owner: "".to_string(),
            repo: "".to_string(),
            host: "github.com".to_string(),
        }
    }
}

/// External tool invocations for the build/test/distribution tasks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ToolsConfig {
    /// Python interpreter used for `setup.py` tasks and the `devel` runner.
    pub interpreter: String,
    /// Distutils entry script, relative to the project root.
    pub setup_script: String,
    /// Test runner argv prefix; the test directory and any filter are
    /// appended.
    pub test_runner: Vec<String>,
    /// Dependency installer argv; `--upgrade` is appended by `deps -u`.
    pub installer: Vec<String>,
    /// GUI toolkit module probed before `install`; empty skips the probe.
    pub toolkit_module: String,
    /// Download URL suggested when the toolkit probe fails.
    pub toolkit_url: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
            setup_script: "setup.py".to_string(),
            test_runner: vec![
                "python3".to_string(),
                "-m".to_string(),
                "pytest".to_string(),
            ],
            installer: vec![
                "python3".to_string(),
                "-m".to_string(),
                "pip".to_string(),
                "install".to_string(),
                "-r".to_string(),
                "requirements.txt".to_string(),
            ],
            toolkit_module: "".to_string(),
            toolkit_url: "".to_string(),
        }
    }
}

/// Release notes settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NotesConfig {
    /// Source file of the in-app release notes plugin; the `sdist` task
    /// splices freshly generated notes into it. Empty disables the refresh.
    pub plugin_fragment: String,
}

/// Root configuration structure for `relkit.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Config {
    /// Project layout settings.
    pub project: ProjectConfig,
    /// Vendored-library settings.
    pub vendor: VendorConfig,
    /// Issue tracker coordinates.
    pub tracker: TrackerConfig,
    /// External tool settings.
    pub tools: ToolsConfig,
    /// Release notes settings.
    pub notes: NotesConfig,
}

/// Load configuration from the given path, falling back to defaults when the
/// file does not exist.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        info!(
            "no configuration found at {}: using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}
