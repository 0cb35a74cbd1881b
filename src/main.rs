mod config;
mod error;
mod extract;
mod file_logger;
mod judge;
mod models;
mod ollama;
mod prompt;
mod seeds;
mod service;
mod store;

use crate::config::{Cli, Config};
use crate::service::CaseSession;
use clap::Parser;
use std::error::Error as StdError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(Cli::parse());
    match play(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

async fn play(config: Config) -> Result<(), Box<dyn StdError>> {
    let session = CaseSession::new(config)?;

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    session.run(&mut input, &mut output).await?;

    Ok(())
}
