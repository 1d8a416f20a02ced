//! Ping search engines with the sitemap URL.

use anyhow::Result;
use ketquamn_seo::ping::{PingClient, PingOutcome};
use ketquamn_seo::SiteConfig;
use serde_json::json;
use tracing::warn;

use super::output::{self, Mark, Report};

pub async fn run(config: &SiteConfig, json: bool) -> Result<()> {
    let sitemap = config.sitemap_url();
    let client = PingClient::new(reqwest::Client::new());
    let report = client.ping_all(&sitemap).await;

    for (engine, outcome) in [("google", &report.google), ("bing", &report.bing)] {
        if let PingOutcome::Failed { reason } = outcome {
            warn!(engine, "sitemap ping failed: {reason}");
        }
    }

    if json {
        output::print_json(&json!({ "sitemap": sitemap, "report": report }));
        return Ok(());
    }

    let mut out = Report::stderr();
    out.heading(&format!("Sitemap {sitemap}"));
    for (engine, outcome) in [("Google", &report.google), ("Bing", &report.bing)] {
        match outcome {
            PingOutcome::Delivered { status } => {
                let mark = if outcome.is_success() { Mark::Pass } else { Mark::Warn };
                out.line(mark, engine, &format!("HTTP {status}"));
            }
            PingOutcome::Failed { reason } => {
                out.line(Mark::Fail, engine, "unreachable");
                out.note(reason);
            }
        }
    }
    Ok(())
}
