//! Common functionality shared between task commands
use log::*;
use std::{path::absolute, process::Command};

use crate::{
    config::ToolsConfig, error::RelkitError, project::Project, result::Result,
};

/// Render a command line the way it will run, for logs and error messages.
pub fn render_command(command: &Command) -> String {
    let mut rendered = command.get_program().to_string_lossy().into_owned();

    for arg in command.get_args() {
        rendered.push(' ');
        rendered.push_str(&arg.to_string_lossy());
    }

    rendered
}

/// Run a prepared command with inherited stdio, failing on a non-zero exit.
pub fn run_command(mut command: Command) -> Result<()> {
    let rendered = render_command(&command);
    info!("running: {rendered}");

    let status = command.status()?;

    if !status.success() {
        return Err(RelkitError::tool_failed(rendered, status.code()).into());
    }

    Ok(())
}

/// Build a command from a configured argv with the project root as working
/// directory.
pub fn argv_command(project: &Project, argv: &[String]) -> Result<Command> {
    let (program, args) = argv.split_first().ok_or_else(|| {
        RelkitError::invalid_config("tool command line is empty")
    })?;

    let mut command = Command::new(program);
    command.args(args).current_dir(project.root());

    Ok(command)
}

/// Run the packaging setup script with the given arguments.
pub fn run_setup(
    project: &Project,
    tools: &ToolsConfig,
    setup_args: &[&str],
) -> Result<()> {
    let mut command = Command::new(&tools.interpreter);
    command
        .arg(&tools.setup_script)
        .args(setup_args)
        .current_dir(project.root());

    run_command(command)
}

/// Resolve the release version: an explicit CLI value wins over the version
/// module's current contents.
pub fn resolve_release_version(
    project: &Project,
    project_version: &str,
) -> Result<String> {
    if project_version.is_empty() {
        project.read_version()
    } else {
        Ok(project_version.to_string())
    }
}

/// List produced artifacts and clean everything except the dist directory.
pub fn after_distribution(project: &Project) -> Result<()> {
    info!("created:");

    for artifact in project.dist_artifacts()? {
        info!("{}", absolute(&artifact)?.display());
    }

    project.clean(true)
}
