use anyhow::Result;
use clap::{CommandFactory, Parser};

use dep_sweeper::cli::Cli;
use dep_sweeper::commands;
use dep_sweeper::config::{resolve_root, RunConfig};
use dep_sweeper::picker::TerminalPicker;
use dep_sweeper::SweeperError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let Some(path) = cli.path.as_deref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let root = match resolve_root(path) {
        Ok(root) => root,
        Err(err @ SweeperError::PathNotFound(_)) => {
            println!("{}\n", err);
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(err) => {
            println!("{}", err);
            return Ok(());
        }
    };

    let config = RunConfig::new(root)
        .with_dry_run(cli.dry_run)
        .with_hidden(cli.all);

    tracing::debug!(?config, "Starting sweep");

    let mut picker = TerminalPicker::new();
    match commands::sweep::run(&config, &mut picker) {
        Ok(report) => {
            tracing::debug!(?report, "Sweep finished");
            Ok(())
        }
        Err(err) => {
            println!("Error running program: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("dep_sweeper=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}
