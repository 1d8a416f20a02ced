//! JSON-LD structured data for search-engine rich results.
//!
//! Each builder returns a fresh `serde_json::Value` matching a fixed
//! schema.org shape. Nothing is validated against the vocabulary.

pub mod author;
pub mod breadcrumb;
pub mod organization;
pub mod software;

pub use author::{author, Author};
pub use breadcrumb::{breadcrumb_list, BreadcrumbItem};
pub use organization::{organization, website};
pub use software::software_application;

use serde_json::Value;

/// Value of every document's `@context`.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Render a document as an embeddable `<script type="application/ld+json">` block.
///
/// `</` inside the JSON is written as `<\/` so a string value can never close
/// the script element early.
pub fn to_script_tag(doc: &Value) -> String {
    let json = doc.to_string().replace("</", "<\\/");
    format!(r#"<script type="application/ld+json">{json}</script>"#)
}

/// Render several documents, one script block each, newline separated.
pub fn to_script_tags(docs: &[Value]) -> String {
    docs.iter().map(to_script_tag).collect::<Vec<_>>().join("\n")
}
