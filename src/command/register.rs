//! Package index registration task implementation.
use std::path::Path;

use crate::{cli, command::common, config, project::Project, result::Result};

/// Execute the register task: register the current version in the package
/// index.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    common::run_setup(&project, &config.tools, &["register"])
}
