//! Generate and read robots.txt.

use crate::config::SiteConfig;
use regex::Regex;
use std::fmt::Write;

/// Rules for one group of user agents.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentGroup {
    pub user_agents: Vec<String>,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub crawl_delay: Option<f32>,
}

impl AgentGroup {
    fn new(agent: &str) -> Self {
        Self {
            user_agents: vec![agent.to_string()],
            allow: Vec::new(),
            disallow: Vec::new(),
            crawl_delay: None,
        }
    }

    fn allow(mut self, path: &str) -> Self {
        self.allow.push(path.to_string());
        self
    }

    fn disallow(mut self, path: &str) -> Self {
        self.disallow.push(path.to_string());
        self
    }

    fn crawl_delay(mut self, seconds: f32) -> Self {
        self.crawl_delay = Some(seconds);
        self
    }
}

/// A complete robots.txt document.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotsDocument {
    pub groups: Vec<AgentGroup>,
    pub sitemaps: Vec<String>,
}

impl RobotsDocument {
    /// The site's crawler policy.
    pub fn for_site(config: &SiteConfig) -> Self {
        let groups = vec![
            AgentGroup::new("*")
                .allow("/")
                .disallow("/api/")
                .disallow("/_next/")
                .disallow("/admin/"),
            AgentGroup::new("Googlebot").allow("/").disallow("/api/"),
            AgentGroup::new("Bingbot").allow("/").crawl_delay(1.0),
            AgentGroup::new("AhrefsBot").disallow("/"),
            AgentGroup::new("SemrushBot").disallow("/"),
        ];

        Self {
            groups,
            sitemaps: vec![config.url("/sitemap.xml"), config.url("/news-sitemap.xml")],
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for group in &self.groups {
            for agent in &group.user_agents {
                let _ = writeln!(out, "User-agent: {agent}");
            }
            for path in &group.allow {
                let _ = writeln!(out, "Allow: {path}");
            }
            for path in &group.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
            if let Some(delay) = group.crawl_delay {
                let _ = writeln!(out, "Crawl-delay: {delay}");
            }
            out.push('\n');
        }
        for sitemap in &self.sitemaps {
            let _ = writeln!(out, "Sitemap: {sitemap}");
        }
        out
    }
}

/// Render the site's robots.txt.
pub fn robots_txt(config: &SiteConfig) -> String {
    RobotsDocument::for_site(config).render()
}

/// Parsed robots.txt rules for one user agent.
#[derive(Debug, Clone, Default)]
pub struct RobotsRules {
    pub allowed: Vec<String>,
    pub disallowed: Vec<String>,
    pub crawl_delay: Option<f32>,
    pub sitemaps: Vec<String>,
}

impl RobotsRules {
    /// Check if a path is allowed. The longest matching pattern wins; ties go
    /// to `Allow`.
    pub fn is_allowed(&self, path: &str) -> bool {
        let longest = |patterns: &[String]| {
            patterns
                .iter()
                .filter(|p| path_matches(path, p))
                .map(String::len)
                .max()
        };

        match (longest(self.allowed.as_slice()), longest(self.disallowed.as_slice())) {
            (Some(allow), Some(disallow)) => allow >= disallow,
            (None, Some(_)) => false,
            _ => true,
        }
    }
}

/// Parse a robots.txt string for a specific user agent.
///
/// Groups naming the agent (case-insensitive) apply; otherwise the `*` group
/// does. `Sitemap` lines are global.
pub fn parse_robots(txt: &str, user_agent: &str) -> RobotsRules {
    let ua_lower = user_agent.to_lowercase();
    let has_specific_group = txt.lines().any(|line| {
        directive(line)
            .map(|(k, v)| k == "user-agent" && v.to_lowercase() == ua_lower)
            .unwrap_or(false)
    });

    let mut rules = RobotsRules::default();
    let mut in_matching_group = false;
    let mut last_was_agent = false;

    for line in txt.lines() {
        let Some((key, value)) = directive(line) else {
            continue;
        };

        match key.as_str() {
            "user-agent" => {
                let ua = value.to_lowercase();
                let matches = if has_specific_group {
                    ua == ua_lower
                } else {
                    ua == "*"
                };
                // Consecutive User-agent lines share one group.
                in_matching_group = if last_was_agent {
                    in_matching_group || matches
                } else {
                    matches
                };
                last_was_agent = true;
                continue;
            }
            "allow" if in_matching_group && !value.is_empty() => {
                rules.allowed.push(value.to_string());
            }
            "disallow" if in_matching_group && !value.is_empty() => {
                rules.disallowed.push(value.to_string());
            }
            "crawl-delay" if in_matching_group => {
                if let Ok(delay) = value.parse::<f32>() {
                    rules.crawl_delay = Some(delay);
                }
            }
            "sitemap" if !value.is_empty() => {
                rules.sitemaps.push(value.to_string());
            }
            _ => {}
        }
        last_was_agent = false;
    }

    rules
}

/// Split a line into a lowercase key and trimmed value, skipping comments.
fn directive(line: &str) -> Option<(String, &str)> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    Some((key.trim().to_lowercase(), value.trim()))
}

/// Match `path` against a robots.txt pattern: a prefix where `*` spans any
/// run of characters and a trailing `$` anchors the end.
fn path_matches(path: &str, pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let (body, anchor) = pattern.strip_suffix('$').map_or((pattern, ""), |b| (b, "$"));
    let body = body.split('*').map(regex::escape).collect::<Vec<_>>().join(".*");
    Regex::new(&format!("^{body}{anchor}")).is_ok_and(|re| re.is_match(path))
}
