//! Print robots.txt or check a path against it.

use anyhow::Result;
use ketquamn_seo::robots::{parse_robots, robots_txt};
use ketquamn_seo::SiteConfig;

use super::output::{Mark, Report};

pub fn run(config: &SiteConfig, check: Option<&str>, agent: &str) -> Result<()> {
    let txt = robots_txt(config);

    let Some(path) = check else {
        print!("{txt}");
        return Ok(());
    };

    let rules = parse_robots(&txt, agent);
    let (mark, verdict) = if rules.is_allowed(path) {
        (Mark::Pass, "allowed")
    } else {
        (Mark::Fail, "disallowed")
    };
    let mut report = Report::stderr();
    report.line(mark, path, &format!("{verdict} for {agent}"));
    if let Some(delay) = rules.crawl_delay {
        report.note(&format!("crawl-delay {delay}s"));
    }
    Ok(())
}
