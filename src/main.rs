use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod error;
mod export;
mod formats;
mod model;
mod pipeline;
mod urls;

fn main() -> Result<()> {
    let args = cli::Args::parse();

    let cfg = config::Config::load(args.config.as_deref())?;
    config::init_tracing(&cfg.logging, args.log_level.as_deref())?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "scribe-export starting");

    match args.command {
        cli::Command::Export(cmd) => pipeline::run_export(cmd, &cfg),
        cli::Command::CheckUrl(cmd) => pipeline::run_check_url(cmd),
        cli::Command::PrintDefaultConfig => {
            let s = cfg.to_toml_pretty()?;
            print!("{s}");
            Ok(())
        }
    }
}
