use std::sync::Arc;

use ketquamn_seo::analytics::{sink_for, AnalyticsSink};
use ketquamn_seo::ping::PingClient;
use ketquamn_seo::SiteConfig;

/// Shared state handed to every handler.
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub ping: PingClient,
    pub sink: Arc<dyn AnalyticsSink>,
}

impl AppState {
    /// Build the state for `config` with one shared HTTP client.
    pub fn from_config(config: SiteConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ketquamn/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();
        let sink = sink_for(&config, http.clone());

        Self {
            config: Arc::new(config),
            ping: PingClient::new(http),
            sink,
        }
    }

    pub fn with_ping_client(mut self, ping: PingClient) -> Self {
        self.ping = ping;
        self
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
