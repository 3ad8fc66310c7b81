//! CLI entry point for ugrid-check.

mod cli;
mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io;

use cli::{Cli, Commands, LogFormat};
use ugrid_check::config::Config;
use ugrid_check::{telemetry, ui};

fn main() -> Result<()> {
    // Run on a thread with an 8MB stack so debug builds behave the same on
    // platforms whose main thread stack is smaller.
    const STACK_SIZE: usize = 8 * 1024 * 1024;

    let thread = std::thread::Builder::new()
        .stack_size(STACK_SIZE)
        .spawn(run)?;

    match thread.join() {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let quiet = cli.quiet || ui::is_quiet();

    let verbose = match &cli.command {
        Commands::Check { verbose, .. } => *verbose,
        _ => 0,
    };
    telemetry::init_tracing(
        cli.log_format == LogFormat::Json,
        telemetry::level_for(verbose, quiet),
    );

    match cli.command {
        Commands::Check {
            paths,
            format,
            criteria,
            skip,
            fail_below,
            mesh_roles,
            verbose,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let args = cmd::check::CheckArgs {
                paths,
                format: format.map(Into::into),
                criteria: criteria.map(Into::into),
                skip,
                fail_below,
                mesh_roles,
                verbose,
                quiet,
            };
            let code = cmd::check::cmd_check(&args, config)?;
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Commands::Dump {
            path,
            format,
            output,
        } => cmd::dump::cmd_dump(&path, format, output.as_deref(), quiet),
        Commands::ListChecks => cmd::list::cmd_list_checks(),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ugrid-check", &mut io::stdout());
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
