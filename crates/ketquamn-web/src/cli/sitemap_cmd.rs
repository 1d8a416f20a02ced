//! Print a sitemap document.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use ketquamn_seo::sitemap::{lottery_sitemap, news_sitemap, sitemap_index, vietnam_today};
use ketquamn_seo::SiteConfig;

use super::SitemapKind;

pub fn run(config: &SiteConfig, kind: SitemapKind, date: Option<NaiveDate>) -> Result<()> {
    let now = Utc::now();
    let today = date.unwrap_or_else(|| vietnam_today(now));

    let xml = match kind {
        SitemapKind::Index => sitemap_index(config, now),
        SitemapKind::Lottery => lottery_sitemap(config, today, now),
        SitemapKind::News => news_sitemap(config, today),
    }
    .context("failed to generate sitemap")?;

    println!("{xml}");
    Ok(())
}
