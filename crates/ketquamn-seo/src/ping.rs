//! Best-effort sitemap pings to search engines.
//!
//! A ping is a single GET carrying the sitemap URL as a query parameter. The
//! response body is ignored and nothing is retried. [`PingClient::send`]
//! reports transport failures as errors; the `ping_*` helpers fold them into
//! a [`PingOutcome`] so callers decide whether to log, retry or ignore.

use crate::error::Result;
use serde::Serialize;
use tracing::{debug, warn};
use url::form_urlencoded;

pub const GOOGLE_PING_ENDPOINT: &str = "https://www.google.com/ping";
pub const BING_PING_ENDPOINT: &str = "https://www.bing.com/ping";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Google,
    Bing,
}

impl SearchEngine {
    pub fn name(self) -> &'static str {
        match self {
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
        }
    }
}

/// Result of one best-effort ping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum PingOutcome {
    /// The engine answered; `status` is whatever it returned.
    Delivered { status: u16 },
    /// The request never completed.
    Failed { reason: String },
}

impl PingOutcome {
    /// True when the engine answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self, PingOutcome::Delivered { status } if (200..300).contains(status))
    }
}

/// Outcomes of pinging every engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PingReport {
    pub google: PingOutcome,
    pub bing: PingOutcome,
}

/// HTTP client for sitemap pings.
#[derive(Debug, Clone)]
pub struct PingClient {
    http: reqwest::Client,
    google_endpoint: String,
    bing_endpoint: String,
}

impl PingClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            google_endpoint: GOOGLE_PING_ENDPOINT.to_string(),
            bing_endpoint: BING_PING_ENDPOINT.to_string(),
        }
    }

    /// Override the ping endpoints.
    pub fn with_endpoints(mut self, google: &str, bing: &str) -> Self {
        self.google_endpoint = google.to_string();
        self.bing_endpoint = bing.to_string();
        self
    }

    pub fn endpoint(&self, engine: SearchEngine) -> &str {
        match engine {
            SearchEngine::Google => &self.google_endpoint,
            SearchEngine::Bing => &self.bing_endpoint,
        }
    }

    /// Full ping URL with the sitemap URL percent-encoded.
    pub fn ping_url(&self, engine: SearchEngine, sitemap_url: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(sitemap_url.as_bytes()).collect();
        format!("{}?sitemap={encoded}", self.endpoint(engine))
    }

    /// Send one ping and return the HTTP status.
    pub async fn send(&self, engine: SearchEngine, sitemap_url: &str) -> Result<u16> {
        let url = self.ping_url(engine, sitemap_url);
        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        debug!(engine = engine.name(), status, "sitemap ping answered");
        Ok(status)
    }

    /// Send one ping, folding transport errors into [`PingOutcome::Failed`].
    pub async fn ping(&self, engine: SearchEngine, sitemap_url: &str) -> PingOutcome {
        match self.send(engine, sitemap_url).await {
            Ok(status) => PingOutcome::Delivered { status },
            Err(e) => {
                warn!(engine = engine.name(), error = %e, "sitemap ping failed");
                PingOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    pub async fn ping_google(&self, sitemap_url: &str) -> PingOutcome {
        self.ping(SearchEngine::Google, sitemap_url).await
    }

    pub async fn ping_bing(&self, sitemap_url: &str) -> PingOutcome {
        self.ping(SearchEngine::Bing, sitemap_url).await
    }

    /// Ping every engine concurrently and wait for all of them.
    pub async fn ping_all(&self, sitemap_url: &str) -> PingReport {
        let (google, bing) =
            tokio::join!(self.ping_google(sitemap_url), self.ping_bing(sitemap_url));
        PingReport { google, bing }
    }
}
