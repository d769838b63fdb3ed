use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tag_bump::cli::orchestration::{self, WorkflowSettings};
use tag_bump::cli::{Cli, Commands};
use tag_bump::config;
use tag_bump::domain::VersionBump;
use tag_bump::git::Git2Repository;
use tag_bump::ui;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let settings = WorkflowSettings::from_config(&config);
    let workdir = Path::new(".");

    match cli.command {
        Commands::Current => {
            let current = orchestration::read_current_version(workdir, &settings);
            println!("Current version: {}", current);
        }
        Commands::Next { bump } => {
            let current = orchestration::read_current_version(workdir, &settings);
            let next = orchestration::run_next(&current, &bump, &settings)?;
            println!("Next {} version: {}", bump, next);
        }
        Commands::Bump(args) => {
            let kind: VersionBump = args.bump.parse()?;
            let settings = args.apply(settings);
            let repo = Git2Repository::open(workdir)?;
            orchestration::run_bump(&repo, &settings, kind, &args.message, |prompt| {
                ui::confirm_action(prompt)
            })?;
        }
    }

    Ok(())
}
