//! Organization and WebSite markup.

use super::SCHEMA_CONTEXT;
use crate::config::SiteConfig;
use serde_json::{json, Value};

const DESCRIPTION: &str = "Trang tra cứu kết quả xổ số 3 miền nhanh và chính xác: \
xổ số miền Bắc, miền Nam, miền Trung trực tiếp mỗi ngày, kèm thống kê và soi cầu.";

const SAME_AS: [&str; 3] = [
    "https://www.facebook.com/ketquamn",
    "https://www.youtube.com/@ketquamn",
    "https://t.me/ketquamn",
];

/// Organization markup for the site owner.
pub fn organization(config: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "@id": config.url("/#organization"),
        "name": config.site_name,
        "url": config.url("/"),
        "logo": {
            "@type": "ImageObject",
            "url": config.url("/logo.png"),
            "width": 512,
            "height": 512,
        },
        "description": DESCRIPTION,
        "sameAs": SAME_AS,
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer support",
            "email": "lienhe@ketquamn.com",
            "availableLanguage": ["vi"],
        },
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "VN",
        },
    })
}

/// WebSite markup with a sitelinks search box action.
pub fn website(config: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "@id": config.url("/#website"),
        "name": config.site_name,
        "url": config.url("/"),
        "inLanguage": config.locale,
        "publisher": { "@id": config.url("/#organization") },
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": config.url("/tim-kiem?q={search_term_string}"),
            },
            "query-input": "required name=search_term_string",
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_include;

    #[test]
    fn test_organization_shape() {
        let config = SiteConfig::new("https://ketquamn.com/");
        let doc = organization(&config);

        assert_json_include!(
            actual: doc.clone(),
            expected: json!({
                "@context": "https://schema.org",
                "@type": "Organization",
                "name": "KETQUAMN.COM",
                "url": "https://ketquamn.com/",
                "logo": { "url": "https://ketquamn.com/logo.png" },
                "address": { "addressCountry": "VN" },
            })
        );
        assert_eq!(doc["sameAs"].as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_website_search_action_uses_base_url() {
        let config = SiteConfig::new("https://example.vn");
        let doc = website(&config);
        assert_eq!(doc["@type"], "WebSite");
        assert_eq!(
            doc["potentialAction"]["target"]["urlTemplate"],
            "https://example.vn/tim-kiem?q={search_term_string}"
        );
        assert_eq!(doc["publisher"]["@id"], "https://example.vn/#organization");
    }
}
