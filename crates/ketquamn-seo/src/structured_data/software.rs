//! SoftwareApplication markup, selected per page.

use super::SCHEMA_CONTEXT;
use crate::config::SiteConfig;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

const SOFTWARE_APPS_JSON: &str = include_str!("software_apps.json");

/// Key of the entry used for unrecognized page ids.
pub const DEFAULT_PAGE: &str = "default";

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AppEntry {
    name: String,
    description: String,
    features: Vec<String>,
}

type AppRegistry = HashMap<String, AppEntry>;

fn app_registry() -> &'static AppRegistry {
    static REGISTRY: OnceLock<AppRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| serde_json::from_str(SOFTWARE_APPS_JSON).unwrap_or_default())
}

fn entry_for(page_id: &str) -> Option<&'static AppEntry> {
    let registry = app_registry();
    registry
        .get(page_id)
        .or_else(|| registry.get(DEFAULT_PAGE))
}

/// SoftwareApplication markup for `page_id`.
///
/// Unknown page ids use the `default` entry.
pub fn software_application(config: &SiteConfig, page_id: &str) -> Value {
    let (name, description, features) = match entry_for(page_id) {
        Some(entry) => (
            entry.name.clone(),
            entry.description.clone(),
            entry.features.clone(),
        ),
        None => (config.site_name.clone(), String::new(), Vec::new()),
    };

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SoftwareApplication",
        "name": name,
        "description": description,
        "url": config.url("/"),
        "applicationCategory": "UtilitiesApplication",
        "operatingSystem": "Web",
        "inLanguage": config.locale,
        "featureList": features,
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "VND",
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.8",
            "ratingCount": "1250",
            "bestRating": "5",
            "worstRating": "1",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads() {
        let registry = app_registry();
        for key in ["default", "home", "xsmb", "xsmn", "xsmt", "thong-ke", "soi-cau"] {
            assert!(registry.contains_key(key), "missing entry {key}");
        }
    }

    #[test]
    fn test_known_page_selects_entry() {
        let doc = software_application(&SiteConfig::default(), "xsmb");
        assert_eq!(doc["@type"], "SoftwareApplication");
        assert_eq!(doc["name"], "XSMB - Kết quả xổ số miền Bắc");
        assert_eq!(doc["offers"]["priceCurrency"], "VND");
        assert_eq!(doc["operatingSystem"], "Web");
    }

    #[test]
    fn test_unknown_page_falls_back_to_default() {
        let doc = software_application(&SiteConfig::default(), "khong-ton-tai");
        let default = software_application(&SiteConfig::default(), DEFAULT_PAGE);
        assert_eq!(doc, default);
        assert_eq!(doc["featureList"].as_array().map(Vec::len), Some(3));
    }
}
