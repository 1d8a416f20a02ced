//! CLI definition and subcommand implementations for the `ketquamn` binary.

pub mod analyze_cmd;
pub mod output;
pub mod ping_cmd;
pub mod robots_cmd;
pub mod serve;
pub mod sitemap_cmd;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use ketquamn_seo::config::{Environment, SiteConfig, DEFAULT_SITE_URL};

#[derive(Parser, Debug)]
#[command(
    name = "ketquamn",
    version,
    about = "SEO endpoints and tooling for the KETQUAMN lottery-results site"
)]
pub struct Cli {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Site settings shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// Public base URL of the site.
    #[arg(long, env = "NEXT_PUBLIC_SITE_URL", default_value = DEFAULT_SITE_URL, global = true)]
    pub site_url: String,

    /// Endpoint receiving analytics events in production.
    #[arg(long, env = "NEXT_PUBLIC_ANALYTICS_ENDPOINT", global = true)]
    pub analytics_endpoint: Option<String>,

    /// Deployment environment; `production` enables the analytics endpoint.
    #[arg(long, env = "NODE_ENV", default_value = "development", global = true)]
    pub node_env: String,
}

impl SiteArgs {
    pub fn to_config(&self) -> SiteConfig {
        SiteConfig::new(&self.site_url)
            .with_environment(Environment::from_node_env(&self.node_env))
            .with_analytics_endpoint(self.analytics_endpoint.clone())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server.
    Serve {
        /// Address to bind (host:port).
        #[arg(long, env = "KETQUAMN_BIND", default_value = "0.0.0.0:3000")]
        bind: String,
    },

    /// Print a sitemap document to stdout.
    Sitemap {
        #[arg(long, value_enum, default_value_t = SitemapKind::Lottery)]
        kind: SitemapKind,

        /// Override "today" (YYYY-MM-DD, Vietnam calendar date).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Print robots.txt, or check whether a path is crawlable.
    Robots {
        /// Path to check instead of printing the document.
        #[arg(long)]
        check: Option<String>,

        /// User agent used with --check.
        #[arg(long, default_value = "*")]
        agent: String,
    },

    /// Notify Google and Bing that the sitemap changed.
    Ping {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Run the content heuristics on an HTML or text file.
    Analyze {
        file: PathBuf,

        /// Primary keyword of the page.
        #[arg(long, short)]
        keyword: String,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    /// Sitemap index.
    Index,
    /// Lottery sitemap with the 30-day window.
    Lottery,
    /// Google News sitemap.
    News,
}
