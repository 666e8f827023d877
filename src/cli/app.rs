//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::config_cmd::{self, ConfigCommands};
use super::number;
use super::output::{Output, OutputFormat};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "happy")]
#[command(author, version, about = "Check whether numbers are happy")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "HAPPY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one or more numbers
    Check {
        /// Positive integers to check
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,

        /// Also print the digit-square-sum sequence
        #[arg(long)]
        trace: bool,

        /// Report how long each check took
        #[arg(long)]
        time: bool,
    },

    /// Show the full digit-square-sum sequence for a number
    Trace {
        /// Positive integer to trace
        #[arg(allow_negative_numbers = true)]
        number: String,

        /// Report how long the trace took
        #[arg(long)]
        time: bool,
    },

    /// List happy numbers in an inclusive range
    Range {
        /// First number of the range
        #[arg(allow_negative_numbers = true)]
        start: String,

        /// Last number of the range
        #[arg(allow_negative_numbers = true)]
        end: String,
    },

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // `config init` and `config path` must work when the file is missing or broken
    let config = match &cli.command {
        Commands::Config(ConfigCommands::Init { .. } | ConfigCommands::Path) => {
            Config::default()
        }
        _ => Config::load(cli.config.as_deref())?,
    };

    let format = cli
        .format
        .unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);
    output.verbose("happy starting");
    output.verbose_ctx("config", &format!("Loaded config: {:?}", config));

    match cli.command {
        Commands::Check {
            numbers,
            trace,
            time,
        } => {
            let options = number::CheckOptions {
                trace: trace || config.check.trace,
                timing: time || config.check.timing,
            };
            output.verbose_ctx("check", &format!("Checking {:?} with {:?}", numbers, options));
            number::check(&output, &numbers, options)?
        }

        Commands::Trace { number: input, time } => {
            output.verbose_ctx("trace", &format!("Tracing {}", input));
            number::trace(&output, &input, time || config.check.timing)?
        }

        Commands::Range { start, end } => {
            output.verbose_ctx("range", &format!("Listing happy numbers in {}..={}", start, end));
            number::range(&output, &start, &end, config.check.range_limit)?
        }

        Commands::Config(cmd) => config_cmd::run(cmd, &output, cli.config.as_deref(), &config)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
