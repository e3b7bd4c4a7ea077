//! CLI argument parsing and issue tracker configuration.
use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use git_url_parse::GitUrl;
use secrecy::SecretString;
use std::{env, path::Path};
use url::Url;

use crate::{
    config::{DEFAULT_CONFIG_FILE, TrackerConfig},
    error::RelkitError,
    result::Result,
    tracker::config::RemoteConfig,
};

/// Global CLI arguments for configuration, tracker access, and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    /// Path to the relkit configuration file; its directory is the project
    /// root.
    pub config: String,

    #[arg(long, default_value = "", global = true)]
    /// Issue tracker repository URL (https://github.com/owner/repo).
    /// Overrides the [tracker] section of the configuration file.
    pub repo: String,

    #[arg(long, default_value = "", global = true)]
    /// Issue tracker access token. Falls back to RELKIT_TOKEN, then
    /// GITHUB_TOKEN.
    pub token: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Project task subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the unit tests.
    Test {
        /// Filter argument forwarded to the test runner.
        #[arg(long, default_value = "")]
        filter: String,
    },

    /// Remove bytecode, the build directory, and the dist directory.
    Clean,

    /// Run the application from sources for local development.
    Devel {
        /// Arguments forwarded to the application.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Install or upgrade the development dependencies.
    Deps {
        /// Upgrade dependencies to their newest versions.
        #[arg(long, default_value_t = false)]
        upgrade: bool,
    },

    /// Set the project version in the generated version module.
    Version {
        /// Version string to write (e.g., 2.1 or 2.2b1).
        version: String,
    },

    /// Refresh the bundled upstream library and rewrite its imports.
    Vendor {
        /// Upstream branch, tag, or commit to bundle.
        #[arg(long, default_value = "master")]
        rev: String,
    },

    /// Install the application using the setup script.
    Install,

    /// Register the project in the package index.
    Register,

    /// Build the source distribution, refreshing release notes first.
    Sdist {
        /// Skip regenerating the release notes plugin before building.
        #[arg(long, default_value_t = false)]
        skip_release_notes: bool,

        /// Upload the distribution to the package index.
        #[arg(long, default_value_t = false)]
        upload: bool,

        /// Release version; defaults to the version module's current value.
        #[arg(long, default_value = "")]
        project_version: String,
    },

    /// Build the Windows installer (Windows hosts only).
    Wininst,

    /// Print the markdown release notes for a version.
    ReleaseNotes {
        /// Release version; defaults to the version module's current value.
        #[arg(long, default_value = "")]
        project_version: String,
    },
}

impl Args {
    /// Project root: the directory containing the configuration file.
    pub fn project_root(&self) -> &Path {
        let path = Path::new(&self.config);
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Configure the tracker remote from CLI arguments, falling back to the
    /// `[tracker]` section of the configuration file.
    pub fn get_remote(&self, tracker: &TrackerConfig) -> Result<RemoteConfig> {
        if !self.repo.is_empty() {
            return get_remote_from_url(&self.repo, &self.token);
        }

        if tracker.owner.is_empty() || tracker.repo.is_empty() {
            return Err(RelkitError::invalid_args(
                "must configure a tracker repository: set [tracker] owner and repo, or pass --repo",
            )
            .into());
        }

        let url = format!(
            "https://{}/{}/{}",
            tracker.host, tracker.owner, tracker.repo
        );

        get_remote_from_url(&url, &self.token)
    }
}

/// Validate repository URL uses HTTP or HTTPS scheme.
fn validate_scheme(scheme: git_url_parse::Scheme) -> Result<()> {
    match scheme {
        git_url_parse::Scheme::Http => Ok(()),
        git_url_parse::Scheme::Https => Ok(()),
        _ => Err(eyre!(
            "only http and https schemes are supported for repo urls"
        )),
    }
}

/// Configure the tracker remote with URL parsing and token resolution.
fn get_remote_from_url(
    repo_url: &str,
    cli_token: &str,
) -> Result<RemoteConfig> {
    let parsed = GitUrl::parse(repo_url)?;

    validate_scheme(parsed.scheme)?;

    let mut token = cli_token.to_string();

    if token.is_empty()
        && let Some(parsed_token) = parsed.token
    {
        token = parsed_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var("RELKIT_TOKEN")
    {
        token = env_var_token;
    }

    if token.is_empty()
        && let Ok(env_var_token) = env::var("GITHUB_TOKEN")
    {
        token = env_var_token;
    }

    if token.is_empty() {
        return Err(
            RelkitError::invalid_args("must set a tracker token").into()
        );
    }

    let host = parsed
        .host
        .ok_or(eyre!("unable to parse host from tracker repo url"))?;

    let owner = parsed
        .owner
        .ok_or(eyre!("unable to parse owner from tracker repo url"))?;

    let issue_link_base_url = Url::parse(&format!(
        "{}://{}/{}/{}/issues",
        parsed.scheme, host, owner, parsed.name
    ))?;

    Ok(RemoteConfig {
        host,
        scheme: parsed.scheme.to_string(),
        owner,
        repo: parsed.name,
        token: SecretString::from(token),
        issue_link_base_url: issue_link_base_url.to_string(),
    })
}
