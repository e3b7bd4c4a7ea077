//! Development app runner task implementation.
use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
    process::Command,
};

use crate::{cli, command::common, config, project::Project, result::Result};

/// Execute the devel task: run the application from sources with the source
/// directory on the interpreter's module path, forwarding any extra
/// arguments to the application.
pub fn execute(args: &cli::Args, app_args: &[String]) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    let module_path =
        python_path(project.source_dir(), env::var_os("PYTHONPATH"))?;

    let mut command = Command::new(&config.tools.interpreter);
    command
        .env("PYTHONPATH", module_path)
        .arg("-m")
        .arg(&config.project.name)
        .args(app_args)
        .current_dir(project.root());

    common::run_command(command)
}

/// Module search path for the interpreter: the project source directory
/// first, then whatever the caller's environment already carries.
fn python_path(
    source_dir: PathBuf,
    existing: Option<OsString>,
) -> Result<OsString> {
    let mut entries = vec![source_dir];

    if let Some(existing) = existing
        && !existing.is_empty()
    {
        entries.extend(env::split_paths(&existing));
    }

    Ok(env::join_paths(entries)?)
}
