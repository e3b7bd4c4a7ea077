//! Windows installer task implementation.
use std::{env, path::Path};

use crate::{
    cli, command::common, config, error::RelkitError, project::Project,
    result::Result,
};

/// Execute the wininst task: build the Windows installer and report the
/// produced artifacts. Refuses to run anywhere but a Windows host.
pub fn execute(args: &cli::Args) -> Result<()> {
    if env::consts::OS != "windows" {
        return Err(RelkitError::WindowsHostRequired(
            env::consts::OS.to_string(),
        )
        .into());
    }

    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    project.clean(false)?;

    common::run_setup(&project, &config.tools, &["bdist_wininst"])?;

    common::after_distribution(&project)
}
