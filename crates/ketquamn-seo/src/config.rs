//! Site configuration, built once at startup and shared by reference.

use crate::site_url::{build_url, normalize_site_url};
use serde::{Deserialize, Serialize};

/// Default public base URL.
pub const DEFAULT_SITE_URL: &str = "https://ketquamn.com";

/// Default display name used in structured data and news metadata.
pub const DEFAULT_SITE_NAME: &str = "KETQUAMN.COM";

/// Default content locale.
pub const DEFAULT_LOCALE: &str = "vi-VN";

/// Deployment environment. Selects where Web Vitals and analytics go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse a `NODE_ENV`-style value. Only `production` selects production.
    pub fn from_node_env(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Immutable per-process site configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteConfig {
    /// Public base URL, never ending in `/`.
    base_url: String,
    /// Content locale (`vi-VN`).
    pub locale: String,
    /// Display name of the site.
    pub site_name: String,
    /// Deployment environment.
    pub environment: Environment,
    /// Optional POST endpoint receiving analytics events.
    pub analytics_endpoint: Option<String>,
}

impl SiteConfig {
    /// Create a development configuration for `base_url`.
    ///
    /// The base URL is normalized; an empty value falls back to
    /// [`DEFAULT_SITE_URL`].
    pub fn new(base_url: &str) -> Self {
        let normalized = normalize_site_url(base_url.trim());
        let base_url = if normalized.is_empty() {
            DEFAULT_SITE_URL.to_string()
        } else {
            normalized
        };
        Self {
            base_url,
            locale: DEFAULT_LOCALE.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            environment: Environment::Development,
            analytics_endpoint: None,
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the analytics endpoint. Blank values are treated as absent.
    pub fn with_analytics_endpoint(mut self, endpoint: Option<String>) -> Self {
        self.analytics_endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty());
        self
    }

    pub fn with_site_name(mut self, name: &str) -> Self {
        self.site_name = name.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a site path.
    pub fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path)
    }

    /// URL of the primary sitemap submitted to search engines.
    pub fn sitemap_url(&self) -> String {
        self.url("/sitemap.xml")
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SITE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_base_url() {
        let config = SiteConfig::new("https://example.vn//");
        assert_eq!(config.base_url(), "https://example.vn");
        assert_eq!(config.url("/xsmb"), "https://example.vn/xsmb");
        assert_eq!(config.sitemap_url(), "https://example.vn/sitemap.xml");
    }

    #[test]
    fn test_empty_base_url_uses_default() {
        let config = SiteConfig::new("  ");
        assert_eq!(config.base_url(), DEFAULT_SITE_URL);
    }

    #[test]
    fn test_environment_from_node_env() {
        assert_eq!(Environment::from_node_env("production"), Environment::Production);
        assert_eq!(Environment::from_node_env("Production "), Environment::Production);
        assert_eq!(Environment::from_node_env("development"), Environment::Development);
        assert_eq!(Environment::from_node_env("test"), Environment::Development);
        assert_eq!(Environment::from_node_env(""), Environment::Development);
    }

    #[test]
    fn test_blank_analytics_endpoint_is_none() {
        let config = SiteConfig::default().with_analytics_endpoint(Some("   ".into()));
        assert!(config.analytics_endpoint.is_none());

        let config =
            SiteConfig::default().with_analytics_endpoint(Some("https://a.io/collect".into()));
        assert_eq!(config.analytics_endpoint.as_deref(), Some("https://a.io/collect"));
    }

    #[test]
    fn test_serialized_config_carries_normalized_base_url() {
        let config = SiteConfig::new("https://staging.ketquamn.com//");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["base_url"], "https://staging.ketquamn.com");
        assert_eq!(json["environment"], "development");
    }
}
