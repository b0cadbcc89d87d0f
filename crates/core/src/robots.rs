//! `robots.txt` rules.

use serde::Serialize;

use crate::site::absolute_url;

const ALLOW: &[&str] = &[
    "/_next/static/",
    "/_next/static",
    "/_next/image",
    "/_next/image/",
    "/_next/data/",
    "/_next/data",
    "/",
];

const DISALLOW: &[&str] = &[
    "/api/*",
    "/admin/*",
    "/private/",
    "/*.json",
    "/book-consultation/success",
    "/book-reservation/success",
    "/thank-you",
    "/404",
    "/500",
];

/// Crawlers collecting training data are kept off the whole site.
const BLOCKED_AI_AGENTS: &[&str] = &[
    "GPTBot",
    "ChatGPT-User",
    "CCBot",
    "anthropic-ai",
    "Claude-Web",
    "PerplexityBot",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: &'static str,
    pub allow: Vec<&'static str>,
    pub disallow: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
    pub host: String,
}

impl Robots {
    pub fn new(base_url: &str) -> Self {
        let general = |user_agent: &'static str| RobotsRule {
            user_agent,
            allow: ALLOW.to_vec(),
            disallow: DISALLOW.to_vec(),
        };

        let mut rules = vec![general("*")];
        rules.extend(BLOCKED_AI_AGENTS.iter().map(|agent| RobotsRule {
            user_agent: *agent,
            allow: Vec::new(),
            disallow: vec!["/"],
        }));
        rules.push(general("Googlebot"));
        rules.push(general("Bingbot"));

        Self {
            rules,
            sitemap: absolute_url(base_url, "/sitemap.xml"),
            host: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Render as `robots.txt` text, one blank line between groups.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            out.push_str(&format!("User-Agent: {}\n", rule.user_agent));
            for path in &rule.allow {
                out.push_str(&format!("Allow: {path}\n"));
            }
            for path in &rule.disallow {
                out.push_str(&format!("Disallow: {path}\n"));
            }
            out.push('\n');
        }
        out.push_str(&format!("Host: {}\n", self.host));
        out.push_str(&format!("Sitemap: {}\n", self.sitemap));
        out
    }
}
