// CLI binary entry point for id3album

use std::process;

use anyhow::Context;
use clap::Parser;

mod cli;

use cli::Config;

fn main() {
    let config = Config::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    cli::run(config).with_context(|| format!("{} failed", command_name(config)))
}

fn command_name(config: &Config) -> &'static str {
    match config.command {
        cli::Commands::Read { .. } => "read",
        cli::Commands::Detect { .. } => "detect",
        cli::Commands::Cover { .. } => "cover",
        cli::Commands::Batch { .. } => "batch",
    }
}
