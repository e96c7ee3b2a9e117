use anyhow::Result;
use clap::Parser;
use parsum::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
