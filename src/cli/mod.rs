//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::profile::{ChargingBehavior, UsagePattern};
use crate::{Config, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// EV journey navigation core CLI
#[derive(Parser, Debug)]
#[command(name = "ev-journey")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive (overrides config)
    #[arg(long, global = true, env = "EV_JOURNEY_LOG")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a session script and print the resulting state
    Run {
        /// Path to the session script (TOML)
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        output: StateFormat,

        /// Reject transitions unreachable from the current view (overrides config)
        #[arg(long)]
        strict: bool,
    },

    /// Print the navigation graph
    Graph {
        /// Output format
        #[arg(short, long, value_enum, default_value = "dot")]
        output: GraphFormat,
    },

    /// Classify an owner's persona from questionnaire answers
    Persona {
        /// Usage pattern (city-driving, commuting, mixed, long-distance)
        #[arg(short, long)]
        usage: UsagePattern,

        /// Charging behavior (overnight, home-slow, public, fast)
        #[arg(short = 'g', long)]
        charging: ChargingBehavior,
    },

    /// Print the initial state built from the configured seed profiles
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        output: StateFormat,
    },
}

/// Output formats for application state
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StateFormat {
    /// JSON output
    Json,
    /// Plain text table
    Table,
}

/// Output formats for the navigation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GraphFormat {
    /// DOT format (Graphviz)
    Dot,
    /// JSON output
    Json,
    /// Plain text table
    Table,
}

/// Execute the CLI command
pub fn execute(args: Cli, config: Config) -> Result<()> {
    let mut stdout = std::io::stdout();
    match args.command {
        Commands::Run {
            script,
            output,
            strict,
        } => commands::run::execute(&mut stdout, &script, output, strict, &config),
        Commands::Graph { output } => commands::graph::execute(&mut stdout, output),
        Commands::Persona { usage, charging } => {
            commands::persona::execute(&mut stdout, usage, charging)
        }
        Commands::Show { output } => commands::show::execute(&mut stdout, output, &config),
    }
}
