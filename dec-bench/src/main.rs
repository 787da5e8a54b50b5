use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod corpus;
mod error;
mod report;
mod runner;

fn main() {
    let cli = cli::Cli::parse();

    // RUST_LOG wins; otherwise the level from the config file, then "info".
    let level = cli.log_level();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = cli::run(cli) {
        tracing::error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
