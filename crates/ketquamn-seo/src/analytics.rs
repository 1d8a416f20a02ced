//! Analytics events in the Google Analytics `gtag('event', ...)` shape and the
//! sinks that receive them.

use crate::config::SiteConfig;
use crate::error::{Result, SeoError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// One analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub action: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: i64,
    /// Excluded from bounce-rate computation when true.
    pub non_interaction: bool,
}

impl AnalyticsEvent {
    pub fn custom(action: &str, category: &str, label: Option<&str>, value: i64) -> Self {
        Self {
            action: action.to_string(),
            category: category.to_string(),
            label: label.map(String::from),
            value,
            non_interaction: false,
        }
    }

    pub fn page_view(path: &str) -> Self {
        Self::custom("page_view", "Navigation", Some(path), 0)
    }

    /// A lottery result page was opened for a region and date slug.
    pub fn lottery_view(region: &str, date_slug: &str) -> Self {
        Self::custom(
            "view_results",
            "Lottery",
            Some(&format!("{region}:{date_slug}")),
            0,
        )
    }
}

/// Destination for analytics events.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    async fn send(&self, event: &AnalyticsEvent) -> Result<()>;

    fn name(&self) -> &'static str;
}

/// Logs events through `tracing`. Used outside production.
#[derive(Debug, Default, Clone)]
pub struct ConsoleSink;

#[async_trait]
impl AnalyticsSink for ConsoleSink {
    async fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        info!(
            action = %event.action,
            category = %event.category,
            label = event.label.as_deref().unwrap_or(""),
            value = event.value,
            "analytics event"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}

/// POSTs events as JSON to an analytics endpoint.
#[derive(Debug, Clone)]
pub struct HttpSink {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSink {
    pub fn new(http: reqwest::Client, endpoint: &str) -> Self {
        Self {
            http,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl AnalyticsSink for HttpSink {
    async fn send(&self, event: &AnalyticsEvent) -> Result<()> {
        let response = self.http.post(&self.endpoint).json(event).send().await?;
        if !response.status().is_success() {
            return Err(SeoError::Sink(format!(
                "{} answered {}",
                self.endpoint,
                response.status()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Pick the sink for a configuration: the HTTP sink in production when an
/// endpoint is configured, the console sink otherwise.
pub fn sink_for(config: &SiteConfig, http: reqwest::Client) -> Arc<dyn AnalyticsSink> {
    match (&config.analytics_endpoint, config.environment.is_production()) {
        (Some(endpoint), true) => Arc::new(HttpSink::new(http, endpoint)),
        _ => Arc::new(ConsoleSink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_sink_selection() {
        let http = reqwest::Client::new();
        let endpoint = Some("https://collect.example/v".to_string());

        let dev = SiteConfig::default().with_analytics_endpoint(endpoint.clone());
        assert_eq!(sink_for(&dev, http.clone()).name(), "console");

        let prod_no_endpoint = SiteConfig::default().with_environment(Environment::Production);
        assert_eq!(sink_for(&prod_no_endpoint, http.clone()).name(), "console");

        let prod = SiteConfig::default()
            .with_environment(Environment::Production)
            .with_analytics_endpoint(endpoint);
        assert_eq!(sink_for(&prod, http).name(), "http");
    }

    #[test]
    fn test_event_constructors() {
        let view = AnalyticsEvent::page_view("/xsmb");
        assert_eq!(view.action, "page_view");
        assert_eq!(view.label.as_deref(), Some("/xsmb"));

        let lottery = AnalyticsEvent::lottery_view("xsmn", "17-10-2026");
        assert_eq!(lottery.label.as_deref(), Some("xsmn:17-10-2026"));
    }

    #[tokio::test]
    async fn test_http_sink_posts_json() {
        let server = MockServer::start().await;
        let event = AnalyticsEvent::page_view("/");
        Mock::given(method("POST"))
            .and(path("/collect"))
            .and(body_json(&event))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let sink = HttpSink::new(reqwest::Client::new(), &format!("{}/collect", server.uri()));
        sink.send(&event).await.unwrap();
    }

    #[tokio::test]
    async fn test_http_sink_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let sink = HttpSink::new(reqwest::Client::new(), &server.uri());
        let err = sink.send(&AnalyticsEvent::page_view("/")).await.unwrap_err();
        assert!(matches!(err, SeoError::Sink(_)));
    }

    #[test]
    fn test_console_sink_never_fails() {
        let result = tokio_test::block_on(ConsoleSink.send(&AnalyticsEvent::page_view("/")));
        assert!(result.is_ok());
    }
}
