// src/main.rs
use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use apipost::{pipeline, ApiPostError, Config, HttpsTransport, Pipeline};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let config = Config::parse();

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = e
                .downcast_ref::<ApiPostError>()
                .map(ApiPostError::kind)
                .unwrap_or("unexpected");
            error!(kind, "{e:#}");
            debug!("{e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> anyhow::Result<()> {
    let target = config.target_url()?;
    let transport = HttpsTransport::new(config.timeout()).context("building HTTPS client")?;
    let pipeline = Pipeline::new(transport, target);

    let keys = pipeline.run(&config.input).await?;
    info!(count = keys.len(), "entries with valid: true");

    pipeline::report(&keys, std::io::stdout().lock()).context("writing result keys")?;
    Ok(())
}
