// src/pipeline.rs
use std::io::Write;
use std::path::Path;

use reqwest::Url;
use tracing::{info, info_span, warn, Instrument};

use crate::document;
use crate::error::{ApiPostError, Result, Stage};
use crate::transport::{Reply, Transport};

pub struct Pipeline<T> {
    transport: T,
    target: Url,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(transport: T, target: Url) -> Self {
        Self { transport, target }
    }

    /// Runs one full exchange and returns the keys to report. Nothing is
    /// written anywhere, so a failure at any stage leaves no partial output.
    pub async fn run(&self, input: &Path) -> Result<Vec<String>> {
        let span = info_span!("pipeline", input = %input.display(), target = %self.target);
        self.exchange(input).instrument(span).await
    }

    async fn exchange(&self, input: &Path) -> Result<Vec<String>> {
        let raw = load(input).await?;
        let data = document::decode(&raw, Stage::Input)?;
        info!(entries = data.len(), "successfully parsed JSON from {}", input.display());

        let filtered = document::select_public(&data);
        info!(kept = filtered.len(), total = data.len(), "filtered to entries with private: false");

        info!("sending POST request to {}", self.target);
        let reply = self.transport.post_json(&self.target, &filtered).await?;

        let reply = check_status(reply)?;
        let response = document::decode(&reply.body, Stage::Response)?;
        info!(status = reply.status, entries = response.len(), "received response");

        Ok(document::valid_keys(&response))
    }
}

pub async fn load(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ApiPostError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })
}

/// Passes a 2xx reply through; anything else fails without the body being
/// looked at.
pub fn check_status(reply: Reply) -> Result<Reply> {
    if reply.is_success() {
        return Ok(reply);
    }
    warn!(status = reply.status, "non-success status");
    Err(ApiPostError::HttpFailure {
        status: reply.status,
        reason: reply.reason,
    })
}

/// One key per line.
pub fn report<W: Write>(keys: &[String], mut out: W) -> std::io::Result<()> {
    for key in keys {
        writeln!(out, "{key}")?;
    }
    out.flush()
}
