//! `sitemap.xml` generation.
//!
//! Entries come from the static English page list followed by both members
//! of every route-map pair. Paired entries carry `en`, `ja` and `x-default`
//! alternates.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::html::escape;
use crate::locale::strip_locale_prefix;
use crate::route_map::{alternates_for_path, hreflang_links_for_pair, normalize_path, route_map, HreflangLink};
use crate::site::{absolute_url, SITEMAP_STATIC_PATHS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub path: String,
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    pub alternates: Vec<HreflangLink>,
}

/// Change frequency for a normalised path, with any `/ja` prefix ignored.
pub fn change_frequency(path: &str) -> ChangeFrequency {
    let path = strip_locale_prefix(path);
    if path == "/" {
        ChangeFrequency::Daily
    } else if path.contains("/services") {
        ChangeFrequency::Weekly
    } else {
        ChangeFrequency::Monthly
    }
}

/// Crawl priority for a normalised path, with any `/ja` prefix ignored.
pub fn priority(path: &str) -> f32 {
    let path = strip_locale_prefix(path);
    if path == "/" {
        1.0
    } else if path == "/services" {
        0.9
    } else if path.contains("/services/") {
        0.8
    } else {
        0.7
    }
}

/// Build all sitemap entries, de-duplicated by normalised path in
/// first-seen order.
pub fn build_sitemap(base_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let candidates = SITEMAP_STATIC_PATHS.iter().map(|p| (*p).to_string()).chain(
        route_map()
            .localized()
            .iter()
            .flat_map(|pair| [pair.en.clone(), pair.ja.clone()]),
    );

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for candidate in candidates {
        let path = normalize_path(&candidate);
        if !seen.insert(path.clone()) {
            continue;
        }
        let alternates = alternates_for_path(&path)
            .map(|pair| hreflang_links_for_pair(pair, base_url))
            .unwrap_or_default();
        entries.push(SitemapEntry {
            url: absolute_url(base_url, &path),
            last_modified: now,
            change_frequency: change_frequency(&path),
            priority: priority(&path),
            alternates,
            path,
        });
    }
    entries
}

/// Render entries as a sitemaps.org `<urlset>` with `xhtml:link` alternates.
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" \
         xmlns:xhtml=\"http://www.w3.org/1999/xhtml\">\n",
    );
    for entry in entries {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape(&entry.url)));
        for link in &entry.alternates {
            xml.push_str(&format!(
                "    <xhtml:link rel=\"alternate\" hreflang=\"{}\" href=\"{}\"/>\n",
                link.hreflang,
                escape(&link.href)
            ));
        }
        xml.push_str(&format!(
            "    <lastmod>{}</lastmod>\n",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        ));
        xml.push_str(&format!(
            "    <changefreq>{}</changefreq>\n",
            entry.change_frequency.as_str()
        ));
        xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://akrin.jp";

    fn entries() -> Vec<SitemapEntry> {
        build_sitemap(BASE, Utc::now())
    }

    fn entry<'a>(entries: &'a [SitemapEntry], path: &str) -> &'a SitemapEntry {
        entries
            .iter()
            .find(|e| e.path == path)
            .unwrap_or_else(|| panic!("no sitemap entry for {path}"))
    }

    #[test]
    fn representative_paths_have_alternates() {
        let entries = entries();
        for path in ["/", "/services", "/ja/services"] {
            let langs: Vec<_> = entry(&entries, path).alternates.iter().map(|l| l.hreflang).collect();
            assert_eq!(langs, vec!["en", "ja", "x-default"], "{path}");
        }
    }

    #[test]
    fn legacy_english_pages_have_no_alternates() {
        let entries = entries();
        assert!(entry(&entries, "/services/recruitment").alternates.is_empty());
    }

    #[test]
    fn paths_are_unique() {
        let entries = entries();
        let unique: HashSet<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(unique.len(), entries.len());
    }

    #[test]
    fn every_route_pair_is_listed() {
        let entries = entries();
        for pair in route_map().localized() {
            entry(&entries, &pair.en);
            entry(&entries, &pair.ja);
        }
    }

    #[test]
    fn frequency_and_priority_rules() {
        assert_eq!(change_frequency("/"), ChangeFrequency::Daily);
        assert_eq!(change_frequency("/ja"), ChangeFrequency::Daily);
        assert_eq!(change_frequency("/ja/services/wifi-design"), ChangeFrequency::Weekly);
        assert_eq!(change_frequency("/blog"), ChangeFrequency::Monthly);

        assert_eq!(priority("/"), 1.0);
        assert_eq!(priority("/ja"), 1.0);
        assert_eq!(priority("/services"), 0.9);
        assert_eq!(priority("/ja/services"), 0.9);
        assert_eq!(priority("/services/cloud"), 0.8);
        assert_eq!(priority("/about"), 0.7);
    }

    #[test]
    fn xml_output_is_well_formed_enough() {
        let xml = render_sitemap_xml(&entries());
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("xmlns:xhtml=\"http://www.w3.org/1999/xhtml\""));
        assert!(xml.contains("<loc>https://akrin.jp/</loc>"));
        assert!(xml.contains(
            "<xhtml:link rel=\"alternate\" hreflang=\"ja\" href=\"https://akrin.jp/ja/services\"/>"
        ));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert_eq!(xml.matches("<url>").count(), xml.matches("</url>").count());
    }
}
