//! Build-product cleanup task implementation.
use std::path::Path;

use crate::{cli, config, project::Project, result::Result};

/// Execute the clean task: remove bytecode plus the dist and build
/// directories.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    project.clean(false)
}
