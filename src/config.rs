// src/config.rs
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::error::{ApiPostError, Result};

pub const DEFAULT_INPUT: &str = "example.json";
pub const DEFAULT_BASE_URL: &str = "https://example.com";
pub const DEFAULT_ENDPOINT: &str = "/service/generate";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "apipost",
    version,
    about = "POST the public entries of a JSON file and print the keys the service marks valid"
)]
pub struct Config {
    #[arg(
        value_name = "FILE",
        env = "APIPOST_INPUT",
        default_value = DEFAULT_INPUT,
        help = "JSON file whose top-level entries are filtered and sent"
    )]
    pub input: PathBuf,

    #[arg(long, env = "APIPOST_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "APIPOST_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(
        long,
        env = "APIPOST_TIMEOUT_SECS",
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Overall request timeout in seconds"
    )]
    pub timeout_secs: u64,
}

impl Config {
    /// Resolves `endpoint` against `base_url` as a URL reference.
    pub fn target_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ApiPostError::Config(format!("base url {:?}: {e}", self.base_url)))?;
        base.join(&self.endpoint)
            .map_err(|e| ApiPostError::Config(format!("endpoint {:?}: {e}", self.endpoint)))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
