//! Version module writer task implementation.
use std::path::Path;

use crate::{cli, config, project::Project, result::Result};

/// Execute the version task: overwrite the generated version module with the
/// given version string.
pub fn execute(args: &cli::Args, version: &str) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    project.write_version(version)
}
