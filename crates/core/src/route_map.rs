//! Canonical table of localized routes.
//!
//! Every indexable page that exists in both English and Japanese is listed
//! as a [`LocalizedPair`]. The table drives `hreflang` alternates in page
//! metadata and the sitemap, and is built once on first use.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;
use url::Url;

use crate::content::{blog, case_studies::CASE_STUDIES};
use crate::locale::Locale;
use crate::site::absolute_url;

/// Origin used to resolve relative inputs in [`normalize_path`].
const RESOLVE_ORIGIN: &str = "https://akrin.jp";

static RESOLVE_BASE: LazyLock<Option<Url>> = LazyLock::new(|| Url::parse(RESOLVE_ORIGIN).ok());

/// A page that exists in both locales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedPair {
    pub en: String,
    pub ja: String,
}

impl LocalizedPair {
    fn new(en: impl Into<String>, ja: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ja: ja.into(),
        }
    }

    pub fn path_for(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ja => &self.ja,
        }
    }

    /// The other-locale member for a request path, if the path belongs to
    /// this pair.
    pub fn counterpart(&self, path: &str) -> Option<&str> {
        let normalized = normalize_path(path);
        if normalize_path(&self.en) == normalized {
            Some(&self.ja)
        } else if normalize_path(&self.ja) == normalized {
            Some(&self.en)
        } else {
            None
        }
    }
}

/// Static pages with parity.
const STATIC_PAIRS: &[(&str, &str)] = &[
    ("/", "/ja"),
    ("/about", "/ja/about"),
    ("/services", "/ja/services"),
    ("/case-studies", "/ja/case-studies"),
    ("/blog", "/ja/blog"),
    ("/contact", "/ja/contact"),
    ("/contact-form", "/ja/contact-form"),
    ("/terms", "/ja/terms"),
    ("/privacy", "/ja/privacy"),
    ("/cookies", "/ja/cookies"),
    ("/book-consultation", "/ja/book-consultation"),
];

/// Service pages that have a Japanese translation.
pub const SERVICE_SLUGS_WITH_PARITY: &[&str] = &[
    "cloud-infrastructure",
    "cybersecurity",
    "it-consulting-project-management",
    "it-managed-services",
    "it-security",
    "itad-japan-apac-us",
    "network-penetration-testing",
    "wifi-assessment",
    "wifi-design",
];

#[derive(Debug)]
pub struct RouteMap {
    localized: Vec<LocalizedPair>,
    index: HashMap<String, usize>,
}

impl RouteMap {
    fn build() -> Self {
        let mut localized: Vec<LocalizedPair> = STATIC_PAIRS
            .iter()
            .map(|(en, ja)| LocalizedPair::new(*en, *ja))
            .collect();

        localized.extend(
            SERVICE_SLUGS_WITH_PARITY
                .iter()
                .map(|slug| LocalizedPair::new(format!("/services/{slug}"), format!("/ja/services/{slug}"))),
        );
        localized.extend(CASE_STUDIES.iter().map(|cs| {
            LocalizedPair::new(
                format!("/case-studies/{}", cs.slug),
                format!("/ja/case-studies/{}", cs.slug),
            )
        }));
        localized.extend(
            blog::common_slugs().map(|slug| LocalizedPair::new(format!("/blog/{slug}"), format!("/ja/blog/{slug}"))),
        );

        // First pair wins when two entries normalise to the same path, which
        // keeps lookups equivalent to a linear scan of the table.
        let mut index = HashMap::with_capacity(localized.len() * 2);
        for (i, pair) in localized.iter().enumerate() {
            index.entry(normalize_path(&pair.en)).or_insert(i);
            index.entry(normalize_path(&pair.ja)).or_insert(i);
        }

        Self { localized, index }
    }

    pub fn localized(&self) -> &[LocalizedPair] {
        &self.localized
    }

    pub fn len(&self) -> usize {
        self.localized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.localized.is_empty()
    }

    /// Find the pair either of whose members normalises to `path`.
    pub fn alternates_for(&self, path: &str) -> Option<&LocalizedPair> {
        self.index
            .get(&normalize_path(path))
            .map(|&i| &self.localized[i])
    }
}

static ROUTE_MAP: LazyLock<RouteMap> = LazyLock::new(RouteMap::build);

/// The process-wide route table.
pub fn route_map() -> &'static RouteMap {
    &ROUTE_MAP
}

/// Localized alternates for a request path, or `None` when the page has no
/// counterpart in the other locale.
///
/// ```
/// use akrin_core::route_map::alternates_for_path;
///
/// let pair = alternates_for_path("/ja/services/").unwrap();
/// assert_eq!(pair.en, "/services");
/// assert!(alternates_for_path("/services/recruitment").is_none());
/// ```
pub fn alternates_for_path(path: &str) -> Option<&'static LocalizedPair> {
    ROUTE_MAP.alternates_for(path)
}

/// Canonicalise a path or URL for comparison.
///
/// The input is resolved against the site origin, so query strings and
/// fragments are dropped and dot segments collapsed. Runs of slashes become
/// one, trailing slashes are removed except on the root and an empty input
/// yields `/`. The function is idempotent.
///
/// ```
/// use akrin_core::route_map::normalize_path;
///
/// assert_eq!(normalize_path(""), "/");
/// assert_eq!(normalize_path("/ja/about/"), "/ja/about");
/// assert_eq!(normalize_path("https://akrin.jp/blog?page=2#top"), "/blog");
/// ```
pub fn normalize_path(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return "/".to_string();
    }

    let resolved = RESOLVE_BASE
        .as_ref()
        .and_then(|base| base.join(input).ok())
        .map(|url| url.path().to_string());

    let path = match resolved {
        Some(path) => path,
        None => {
            let raw = input.split(['?', '#']).next().unwrap_or_default();
            if raw.starts_with('/') {
                raw.to_string()
            } else {
                format!("/{raw}")
            }
        }
    };

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// One `<link rel="alternate" hreflang=...>` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    pub hreflang: &'static str,
    pub href: String,
}

/// `en`, `ja` and `x-default` alternates for a path, as absolute URLs.
/// Empty when the path has no localized pair.
pub fn hreflang_links(path: &str, base_url: &str) -> Vec<HreflangLink> {
    let Some(pair) = alternates_for_path(path) else {
        return Vec::new();
    };
    hreflang_links_for_pair(pair, base_url)
}

pub fn hreflang_links_for_pair(pair: &LocalizedPair, base_url: &str) -> Vec<HreflangLink> {
    let en = absolute_url(base_url, &pair.en);
    vec![
        HreflangLink {
            hreflang: Locale::En.as_str(),
            href: en.clone(),
        },
        HreflangLink {
            hreflang: Locale::Ja.as_str(),
            href: absolute_url(base_url, &pair.ja),
        },
        HreflangLink {
            hreflang: "x-default",
            href: en,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_round_trips_from_both_sides() {
        for pair in route_map().localized() {
            assert_eq!(alternates_for_path(&pair.en), Some(pair), "en {}", pair.en);
            assert_eq!(alternates_for_path(&pair.ja), Some(pair), "ja {}", pair.ja);
        }
    }

    #[test]
    fn paths_are_unique_within_each_locale() {
        let mut en = std::collections::HashSet::new();
        let mut ja = std::collections::HashSet::new();
        for pair in route_map().localized() {
            assert!(en.insert(normalize_path(&pair.en)), "duplicate {}", pair.en);
            assert!(ja.insert(normalize_path(&pair.ja)), "duplicate {}", pair.ja);
        }
    }

    #[test]
    fn table_composition() {
        let expected = STATIC_PAIRS.len()
            + SERVICE_SLUGS_WITH_PARITY.len()
            + CASE_STUDIES.len()
            + blog::common_slugs().count();
        assert_eq!(route_map().len(), expected);
        assert_eq!(route_map().localized()[0], LocalizedPair::new("/", "/ja"));
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "",
            "/",
            "//",
            "/ja/",
            "/ja//",
            "services/",
            "/a/./b/../c/",
            "/blog?x=1",
            "/blog#frag",
            "https://example.com/about/",
            "  /contact  ",
            "/.//x",
            "/a/..//x",
            "//evil.com",
            "/.//evil.com",
        ];
        for input in inputs {
            let once = normalize_path(input);
            assert_eq!(normalize_path(&once), once, "input {input:?}");
            assert!(once.starts_with('/'));
            assert!(once == "/" || !once.ends_with('/'));
        }
    }

    #[test]
    fn normalize_examples() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/services/"), "/services");
        assert_eq!(normalize_path("services"), "/services");
        assert_eq!(normalize_path("/a/./b/../c"), "/a/c");
        assert_eq!(normalize_path("https://akrin.jp/ja/?utm=1"), "/ja");
        assert_eq!(normalize_path("/ja//services///it"), "/ja/services/it");
        assert_eq!(normalize_path("/.//evil.com"), "/evil.com");
    }

    #[test]
    fn services_resolve_in_both_locales() {
        let en = alternates_for_path("/services").unwrap();
        let ja = alternates_for_path("/ja/services").unwrap();
        assert_eq!(en, ja);
        assert_eq!(en.path_for(Locale::Ja), "/ja/services");
        assert_eq!(Locale::from_path("/services"), Locale::En);
        assert_eq!(Locale::from_path("/ja/services"), Locale::Ja);
    }

    #[test]
    fn missing_pairs_are_not_errors() {
        assert!(alternates_for_path("/services/recruitment").is_none());
        assert!(alternates_for_path("/no/such/page").is_none());
        assert!(hreflang_links("/no/such/page", "https://akrin.jp").is_empty());
    }

    #[test]
    fn counterpart_flips_locale() {
        let pair = alternates_for_path("/about").unwrap();
        assert_eq!(pair.counterpart("/about/"), Some("/ja/about"));
        assert_eq!(pair.counterpart("/ja/about"), Some("/about"));
        assert_eq!(pair.counterpart("/contact"), None);
    }

    #[test]
    fn hreflang_for_root() {
        let links = hreflang_links("/", "https://akrin.jp/");
        let pairs: Vec<_> = links.iter().map(|l| (l.hreflang, l.href.as_str())).collect();
        assert_eq!(
            pairs,
            vec![
                ("en", "https://akrin.jp/"),
                ("ja", "https://akrin.jp/ja"),
                ("x-default", "https://akrin.jp/"),
            ]
        );
    }

    #[test]
    fn blog_and_case_study_pairs_are_present() {
        assert!(alternates_for_path("/blog/phishing-prevention-guide-2025").is_some());
        assert!(alternates_for_path("/ja/case-studies/nationwide-wifi-30-offices").is_some());
    }
}
