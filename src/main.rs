use clap::Parser;

use relkit::{cli, command, result::Result};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("relkit")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    match &cli_args.command {
        cli::Command::Test { filter } => {
            command::test::execute(&cli_args, filter)
        }
        cli::Command::Clean => command::clean::execute(&cli_args),
        cli::Command::Devel { args } => {
            command::devel::execute(&cli_args, args)
        }
        cli::Command::Deps { upgrade } => {
            command::deps::execute(&cli_args, *upgrade)
        }
        cli::Command::Version { version } => {
            command::version::execute(&cli_args, version)
        }
        cli::Command::Vendor { rev } => {
            command::vendor::execute(&cli_args, rev)
        }
        cli::Command::Install => command::install::execute(&cli_args),
        cli::Command::Register => command::register::execute(&cli_args),
        cli::Command::Sdist {
            skip_release_notes,
            upload,
            project_version,
        } => {
            command::sdist::execute(
                &cli_args,
                *skip_release_notes,
                *upload,
                project_version,
            )
            .await
        }
        cli::Command::Wininst => command::wininst::execute(&cli_args),
        cli::Command::ReleaseNotes { project_version } => {
            command::release_notes::execute(&cli_args, project_version).await
        }
    }
}
