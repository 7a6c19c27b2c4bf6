//! sfxgen CLI - procedural sound effect renderer
//!
//! Command-line interface for the sfxgen synthesis library.

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use sfxgen::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("sfxgen v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Render(args)) => {
            let report = commands::render(&args).context("render failed")?;
            if !report.all_succeeded() {
                let failed = report.failed().count();
                bail!("{} of {} effect(s) failed", failed, report.artifacts.len());
            }
            Ok(())
        }
        Some(Commands::List) => Ok(commands::list()?),
        Some(Commands::Clean(args)) => commands::clean(&args).context("clean failed"),
        None => {
            println!("sfxgen v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}
