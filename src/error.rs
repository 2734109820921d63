// src/error.rs
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which side of the exchange a JSON document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Input,
    Response,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Input => f.write_str("input file"),
            Stage::Response => f.write_str("response body"),
        }
    }
}

/// Every failure is fatal; the binary logs it and exits non-zero.
#[derive(Debug, Error)]
pub enum ApiPostError {
    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parsing error in {stage}")]
    Parse {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },

    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP request failed with code {status}: {}", reason.as_deref().unwrap_or("unknown"))]
    HttpFailure { status: u16, reason: Option<String> },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiPostError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiPostError::FileNotFound { .. } => "file_not_found",
            ApiPostError::Parse { .. } => "parse",
            ApiPostError::Transport(_) => "transport",
            ApiPostError::HttpFailure { .. } => "http_failure",
            ApiPostError::Config(_) => "config",
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiPostError>;
