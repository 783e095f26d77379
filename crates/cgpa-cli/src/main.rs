mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (defaults to warn when RUST_LOG is unset)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cgpa=warn,cgpa_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = args.calculator_config();
    let output = args.output_options();

    match args.command {
        Some(Command::Scale) => commands::scale::run(output.json),
        Some(Command::Calculate) | None => commands::calculate::run(config, output),
    }
}
