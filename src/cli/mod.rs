//! Command-line interface for parsum
//!
//! This module provides the main CLI structure and command dispatch. It uses
//! clap for argument parsing and sets up tracing from the verbosity flags.

use crate::config::ParsumConfig;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// parsum - parallel array reduction benchmark
#[derive(Parser)]
#[command(
    name = "parsum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Parallel array reduction benchmark",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check every strategy against the sequential baseline
    Verify(commands::verify::VerifyArgs),
    /// Time every strategy and report speedups over the sequential baseline
    Bench(commands::bench::BenchArgs),
    /// Sum the given integers with one strategy
    Sum(commands::sum::SumArgs),
    /// Configuration management
    Config(commands::config::ConfigArgs),
    /// Show version information
    Version,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.verbose > 0, self.quiet);
        let config = ParsumConfig::load_with_custom_config(self.config.as_deref())?;

        match self.command {
            Some(Commands::Verify(args)) => commands::verify::execute(args, &output),
            Some(Commands::Bench(args)) => commands::bench::execute(args, &config, &output),
            Some(Commands::Sum(args)) => commands::sum::execute(args, &config, &output),
            Some(Commands::Config(args)) => commands::config::execute(args, &config, &output),
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
