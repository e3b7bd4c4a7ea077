//! Development dependency installer task implementation.
use std::path::Path;

use crate::{cli, command::common, config, project::Project, result::Result};

/// Execute the deps task: install the development dependencies, optionally
/// upgrading them to their newest versions.
pub fn execute(args: &cli::Args, upgrade: bool) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    let mut argv = config.tools.installer.clone();
    if upgrade {
        argv.push("--upgrade".to_string());
    }

    let command = common::argv_command(&project, &argv)?;
    common::run_command(command)
}
