//! SEO metadata and instrumentation for KETQUAMN, a Vietnamese lottery-results site.
//!
//! Everything here is a pure builder or a one-shot side-effecting helper:
//!
//! - [`site_url`] / [`config`]: base URL normalization and the site configuration
//! - [`structured_data`] / [`keywords`]: JSON-LD documents and keyword sections
//! - [`content`] / [`templates`]: content heuristics and templated descriptions
//! - [`sitemap`] / [`robots`]: XML sitemaps and robots.txt
//! - [`ping`]: best-effort search-engine sitemap pings
//! - [`analytics`] / [`vitals`]: analytics events and Core Web Vitals reporting

pub mod analytics;
pub mod config;
pub mod content;
pub mod error;
pub mod keywords;
pub mod ping;
pub mod robots;
pub mod site_url;
pub mod sitemap;
pub mod structured_data;
pub mod templates;
pub mod vitals;

pub use config::{Environment, SiteConfig};
pub use error::{Result, SeoError};
pub use site_url::{build_url, normalize_site_url};
