//! Application install task implementation.
use log::*;
use std::{path::Path, process::Command};

use crate::{cli, command::common, config, project::Project, result::Result};

/// Execute the install task: check the GUI toolkit precondition, then run
/// the setup script's install step.
pub fn execute(args: &cli::Args) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    if !config.tools.toolkit_module.is_empty() {
        check_toolkit(&config.tools)?;
    }

    common::run_setup(&project, &config.tools, &["install"])
}

/// Warn when the GUI toolkit is not importable. The toolkit is needed to run
/// the application, not to install it, so a failed probe never fails the
/// task.
fn check_toolkit(tools: &config::ToolsConfig) -> Result<()> {
    let probe = format!("import {}", tools.toolkit_module);

    let output = Command::new(&tools.interpreter)
        .arg("-c")
        .arg(&probe)
        .output()?;

    if !output.status.success() {
        warn!(
            "no {} installation detected!\n\n\
             Please install {} before running the application.\n\
             You can download it from {}\n",
            tools.toolkit_module, tools.toolkit_module, tools.toolkit_url
        );
    }

    Ok(())
}
