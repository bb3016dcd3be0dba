//! flowdeploy CLI - deployment step sequencer
//!
//! Usage: flowdeploy [COMMAND]
//!
//! Commands:
//!   run      Run the deployment sequence (default)
//!   plan     Show the resolved steps without running them
//!   check    Check the runtime environment
//!   version  Show version information

mod cli;
mod commands;
mod ui;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::GlobalOptions;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, json);
            1
        }
    };

    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

fn dispatch(cli: Cli) -> Result<i32> {
    let global = GlobalOptions::from(&cli);

    match cli.command {
        None => commands::run::cmd_run(&global, false, &[]),
        Some(Commands::Run { dry_run, skip }) => commands::run::cmd_run(&global, dry_run, &skip),
        Some(Commands::Plan { skip }) => commands::plan::cmd_plan(&global, &skip),
        Some(Commands::Check { strict_warnings }) => {
            commands::check::cmd_check(&global, strict_warnings)
        }
        Some(Commands::Version) => commands::version::cmd_version(global.json),
    }
}
