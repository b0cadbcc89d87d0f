//! Per-page metadata: canonical URL, `hreflang` language map and Open Graph
//! locale, with title/description length limits.

use serde::Serialize;

use crate::locale::Locale;
use crate::route_map::{alternates_for_path, normalize_path};
use crate::site::{absolute_url, DEFAULT_OG_IMAGE, SITE_NAME};

pub const MAX_TITLE_CHARS: usize = 65;
pub const MAX_DESCRIPTION_CHARS: usize = 170;

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageAlternates {
    pub en: String,
    pub ja: String,
    #[serde(rename = "x-default")]
    pub x_default: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: &'static str,
    pub locale: &'static str,
    pub alternate_locale: &'static str,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub lang: Locale,
    pub canonical: String,
    /// Present only for pages that exist in both locales.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguageAlternates>,
    pub open_graph: OpenGraph,
}

impl PageMetadata {
    /// Build metadata for a request path.
    ///
    /// Title and description are clamped; the canonical URL is the
    /// normalised path on `base_url`.
    pub fn for_path(path: &str, title: &str, description: &str, base_url: &str) -> Self {
        let normalized = normalize_path(path);
        let lang = Locale::from_path(&normalized);
        let canonical = absolute_url(base_url, &normalized);
        let title = clamp_title(title);
        let description = clamp_description(description);

        let languages = alternates_for_path(&normalized).map(|pair| {
            let en = absolute_url(base_url, &pair.en);
            LanguageAlternates {
                ja: absolute_url(base_url, &pair.ja),
                x_default: en.clone(),
                en,
            }
        });

        let open_graph = OpenGraph {
            title: title.clone(),
            description: description.clone(),
            url: canonical.clone(),
            site_name: SITE_NAME,
            locale: lang.og_locale(),
            alternate_locale: lang.other().og_locale(),
            image: absolute_url(base_url, DEFAULT_OG_IMAGE),
        };

        Self {
            title,
            description,
            lang,
            canonical,
            languages,
            open_graph,
        }
    }
}

pub fn clamp_title(title: &str) -> String {
    clamp_chars(title.trim(), MAX_TITLE_CHARS)
}

pub fn clamp_description(description: &str) -> String {
    clamp_chars(description.trim(), MAX_DESCRIPTION_CHARS)
}

/// Truncate to at most `max` characters, replacing the tail with an
/// ellipsis when anything was cut.
fn clamp_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.truncate(out.trim_end().len());
    out.push(ELLIPSIS);
    out
}
