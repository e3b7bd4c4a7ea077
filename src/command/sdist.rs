//! Source distribution task implementation.
use log::*;
use std::path::Path;

use crate::{
    cli,
    command::common,
    config,
    notes::{compiler::NotesCompiler, plugin},
    project::Project,
    result::Result,
    tracker::github::GithubTracker,
    version,
};

/// Execute the sdist task: clean, refresh the release notes plugin, build
/// the source distribution, and report the produced artifacts.
pub async fn execute(
    args: &cli::Args,
    skip_release_notes: bool,
    upload: bool,
    project_version: &str,
) -> Result<()> {
    let config = config::load_config(Path::new(&args.config))?;
    let project = Project::new(args.project_root(), &config.project);

    project.clean(false)?;

    let release_version =
        common::resolve_release_version(&project, project_version)?;

    if !skip_release_notes {
        refresh_plugin(args, &config, &project, &release_version).await?;
    }

    if upload && !version::is_final(&release_version) {
        warn!(
            "uploading non-final version {release_version} to the package index"
        );
    }

    let setup_args: &[&str] =
        if upload { &["sdist", "upload"] } else { &["sdist"] };
    common::run_setup(&project, &config.tools, setup_args)?;

    common::after_distribution(&project)
}

/// Regenerate the in-app release notes plugin from tracker issues. An empty
/// `notes.plugin_fragment` disables the refresh.
async fn refresh_plugin(
    args: &cli::Args,
    config: &config::Config,
    project: &Project,
    release_version: &str,
) -> Result<()> {
    if config.notes.plugin_fragment.is_empty() {
        warn!("notes.plugin_fragment is not set: skipping the notes refresh");
        return Ok(());
    }

    let remote = args.get_remote(&config.tracker)?;
    let tracker = GithubTracker::new(remote.clone())?;
    let compiler = NotesCompiler::new(&tracker, &remote.issue_link_base_url);

    let html = compiler.html(release_version).await?;

    let plugin_path = project.root().join(&config.notes.plugin_fragment);
    plugin::splice_notes(&plugin_path, &html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_plugin_fragment_disables_the_refresh() {
        let dir = tempfile::tempdir().unwrap();
        let args = cli::Args {
            config: dir
                .path()
                .join("relkit.toml")
                .to_string_lossy()
                .into_owned(),
            repo: "".into(),
            token: "".into(),
            debug: false,
            command: cli::Command::Sdist {
                skip_release_notes: false,
                upload: false,
                project_version: "2.1".into(),
            },
        };
        let config = config::Config::default();
        let project = Project::new(args.project_root(), &config.project);

        // the default config has no fragment and no tracker coordinates; the
        // refresh must be a no-op rather than demand either
        refresh_plugin(&args, &config, &project, "2.1").await.unwrap();
    }
}
