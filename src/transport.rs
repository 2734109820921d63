// src/transport.rs
use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::document::Document;
use crate::error::Result;

/// Status line and raw body of a completed exchange.
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: u16,
    pub reason: Option<String>,
    pub body: String,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait Transport {
    /// POSTs `body` as JSON to `url`. Non-2xx statuses are still `Ok`.
    fn post_json(&self, url: &Url, body: &Document) -> impl Future<Output = Result<Reply>> + Send;
}

/// Verified HTTPS over rustls. Plain `http://` targets are refused.
pub struct HttpsTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpsTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .https_only(true)
            .timeout(timeout)
            .user_agent(concat!("apipost/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }

    /// The POST that `post_json` sends: JSON body, JSON content type, and
    /// the configured timeout.
    pub fn request(&self, url: &Url, body: &Document) -> Result<reqwest::Request> {
        let req = self
            .client
            .post(url.clone())
            .json(body)
            .timeout(self.timeout)
            .build()?;
        Ok(req)
    }
}

impl Transport for HttpsTransport {
    async fn post_json(&self, url: &Url, body: &Document) -> Result<Reply> {
        let req = self.request(url, body)?;
        debug!(
            bytes = req.body().and_then(|b| b.as_bytes()).map_or(0, <[u8]>::len),
            "encoded request body"
        );
        let res = self.client.execute(req).await?;
        into_reply(res).await
    }
}

/// Non-2xx bodies are never read, so a broken error page cannot hide the
/// status behind a transport error.
async fn into_reply(res: reqwest::Response) -> Result<Reply> {
    let status = res.status();
    let reason = status.canonical_reason().map(str::to_string);
    if !status.is_success() {
        return Ok(Reply {
            status: status.as_u16(),
            reason,
            body: String::new(),
        });
    }
    let body = res.text().await?;
    Ok(Reply {
        status: status.as_u16(),
        reason,
        body,
    })
}
