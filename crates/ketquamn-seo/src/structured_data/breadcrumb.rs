//! BreadcrumbList markup.

use super::SCHEMA_CONTEXT;
use crate::config::SiteConfig;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// One crumb: a display name and a site-relative path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub path: String,
}

impl BreadcrumbItem {
    pub fn new(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
        }
    }
}

/// Build a BreadcrumbList. Positions start at 1 and follow input order.
pub fn breadcrumb_list(config: &SiteConfig, items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": item.name,
                "item": config.url(&item.path),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}
