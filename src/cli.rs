use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use flowdeploy::StepKind;

/// flowdeploy - fail-fast deployment sequencer
#[derive(Parser, Debug)]
#[command(name = "flowdeploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'flowdeploy' without a subcommand to execute the full sequence.")]
pub struct Cli {
    /// Emit NDJSON events on stdout (command output goes to stderr)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Application directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Config file to use instead of the discovered one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Production domain exported as PRODUCTION_DOMAIN
    #[arg(long, global = true)]
    pub domain: Option<String>,

    /// Production URL exported as PRODUCTION_URL
    #[arg(long, global = true)]
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the deployment sequence (default)
    Run {
        /// Announce each command without running it
        #[arg(long)]
        dry_run: bool,

        /// Skip a step by id (repeatable)
        #[arg(long = "skip", value_enum)]
        skip: Vec<StepKind>,
    },

    /// Show the resolved steps and commands without running anything
    Plan {
        /// Skip a step by id (repeatable)
        #[arg(long = "skip", value_enum)]
        skip: Vec<StepKind>,
    },

    /// Check the runtime environment the application needs
    Check {
        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Show version information
    Version,
}
