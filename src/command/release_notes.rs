//! Markdown release notes task implementation.
use std::path::Path;

use crate::{
    cli, command::common, config, notes::compiler::NotesCompiler,
    project::Project, result::Result, tracker::github::GithubTracker,
};

/// Execute the release-notes task: compile the closed-issue table for the
/// release version and print it as markdown.
pub async fn execute(args: &cli::Args, project_version: &str) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    let release_version =
        common::resolve_release_version(&project, project_version)?;

    let remote = args.get_remote(&config.tracker)?;
    let tracker = GithubTracker::new(remote.clone())?;
    let compiler = NotesCompiler::new(&tracker, &remote.issue_link_base_url);

    let report = compiler.markdown(&release_version).await?;

    println!("{report}");

    Ok(())
}
