//! Configuration command implementations

use crate::cli::Output;
use crate::config::ParsumConfig;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration as JSON
    Show {
        /// Only show this section (e.g. `bench`)
        section: Option<String>,
    },
    /// Check that the merged configuration parses
    Validate,
}

/// Execute config commands
pub fn execute(args: ConfigArgs, config: &ParsumConfig, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Show { section } => show(config, section.as_deref()),
        ConfigCommand::Validate => validate(config, output),
    }
}

fn show(config: &ParsumConfig, section: Option<&str>) -> Result<()> {
    let merged = match section {
        Some(path) => config
            .get_section(path)
            .with_context(|| format!("No configuration section '{path}'"))?,
        None => config.get_full_config()?,
    };
    println!("{}", serde_json::to_string_pretty(&merged)?);
    Ok(())
}

fn validate(config: &ParsumConfig, output: &Output) -> Result<()> {
    let settings = config.settings()?;
    output.success("Configuration is valid");
    output.key_value("reduce.workers:", &settings.reduce.resolved_workers().to_string(), false);
    output.key_value("bench.size:", &settings.bench.size.to_string(), false);
    output.key_value("bench.workers:", &format!("{:?}", settings.bench.workers), false);
    output.key_value("bench.trials:", &settings.bench.trials.to_string(), false);
    Ok(())
}
