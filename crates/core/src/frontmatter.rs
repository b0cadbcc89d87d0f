//! Case-study frontmatter read from `.mdx` files.
//!
//! Only a handful of `key: value` lines between the leading `---` fences are
//! recognised; the body is never parsed.

use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use crate::content::case_studies::is_excluded;
use crate::locale::Locale;

/// Largest page size accepted by the listing endpoint.
pub const MAX_LIST_LIMIT: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseFrontmatter {
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub locale: Locale,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Parse the frontmatter block of an MDX document.
///
/// Returns `None` when the document has no block or lacks `title` or `slug`.
/// A missing or unknown `locale` falls back to `default_locale`.
pub fn parse_frontmatter(raw: &str, default_locale: Locale) -> Option<CaseFrontmatter> {
    let rest = raw.strip_prefix("---")?;
    let end = rest.find("---")?;
    let block = &rest[..end];

    let field = |key: &str| -> Option<String> {
        block.lines().find_map(|line| {
            let value = line.strip_prefix(key)?.strip_prefix(':')?.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            Some(value.to_string())
        })
    };

    let title = field("title").filter(|v| !v.is_empty())?;
    let slug = field("slug").filter(|v| !v.is_empty())?;
    let locale = match field("locale").as_deref() {
        Some("ja") => Locale::Ja,
        Some("en") => Locale::En,
        _ => default_locale,
    };

    Some(CaseFrontmatter {
        title,
        slug,
        date: field("date").filter(|v| !v.is_empty()),
        locale,
        image: field("image").filter(|v| !v.is_empty()),
    })
}

/// Read every `.mdx` file in `dir` and collect the parseable frontmatters.
///
/// An unreadable directory yields an empty list; unreadable or malformed
/// files are skipped.
pub fn list_mdx_frontmatters(dir: &Path, default_locale: Locale) -> Vec<CaseFrontmatter> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "mdx"))
        .collect();
    paths.sort();

    paths
        .iter()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .filter_map(|raw| parse_frontmatter(&raw, default_locale))
        .collect()
}

/// Milliseconds since the epoch for a frontmatter date, 0 when absent or
/// unparseable. Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
fn date_key(date: Option<&str>) -> i64 {
    let Some(date) = date else {
        return 0;
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
        return ts.timestamp_millis();
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Filter to one locale, drop excluded slugs, sort newest first and apply an
/// optional limit clamped to `1..=MAX_LIST_LIMIT`.
pub fn select_case_studies(
    items: Vec<CaseFrontmatter>,
    locale: Locale,
    limit: Option<usize>,
) -> Vec<CaseFrontmatter> {
    let mut selected: Vec<_> = items
        .into_iter()
        .filter(|item| item.locale == locale && !is_excluded(&item.slug))
        .collect();
    // Stable sort keeps directory order for equal dates.
    selected.sort_by_key(|item| std::cmp::Reverse(date_key(item.date.as_deref())));
    if let Some(limit) = limit {
        selected.truncate(limit.clamp(1, MAX_LIST_LIMIT));
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn parses_quoted_and_bare_values() {
        let raw = "---\ntitle: \"Rack Build-out\"\nslug: rack-buildout-9racks-campus\ndate: 2024-05-01\n---\n# Body\n";
        let fm = parse_frontmatter(raw, Locale::En).unwrap();
        assert_eq!(fm.title, "Rack Build-out");
        assert_eq!(fm.slug, "rack-buildout-9racks-campus");
        assert_eq!(fm.date.as_deref(), Some("2024-05-01"));
        assert_eq!(fm.locale, Locale::En);
        assert!(fm.image.is_none());
    }

    #[test]
    fn explicit_locale_overrides_directory_default() {
        let raw = "---\ntitle: x\nslug: y\nlocale: ja\n---";
        assert_eq!(parse_frontmatter(raw, Locale::En).unwrap().locale, Locale::Ja);
        let raw = "---\ntitle: x\nslug: y\nlocale: fr\n---";
        assert_eq!(parse_frontmatter(raw, Locale::Ja).unwrap().locale, Locale::Ja);
    }

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(parse_frontmatter("---\ntitle: only\n---", Locale::En).is_none());
        assert!(parse_frontmatter("no fences here", Locale::En).is_none());
        assert!(parse_frontmatter("---\ntitle: unterminated\nslug: s\n", Locale::En).is_none());
    }

    #[test]
    fn lists_only_mdx_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.mdx", "---\ntitle: A\nslug: a\n---");
        write(dir.path(), "b.md", "---\ntitle: B\nslug: b\n---");
        write(dir.path(), "c.mdx", "no frontmatter");

        let items = list_mdx_frontmatters(dir.path(), Locale::En);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].slug, "a");
    }

    #[test]
    fn missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_mdx_frontmatters(&dir.path().join("nope"), Locale::En).is_empty());
    }

    #[test]
    fn selection_filters_sorts_and_limits() {
        let fm = |slug: &str, date: Option<&str>, locale| CaseFrontmatter {
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            date: date.map(str::to_string),
            locale,
            image: None,
        };
        let items = vec![
            fm("old", Some("2023-01-01"), Locale::En),
            fm("undated", None, Locale::En),
            fm("new", Some("2024-06-01"), Locale::En),
            fm("sdwan-retail-40-sites", Some("2025-01-01"), Locale::En),
            fm("japanese", Some("2025-01-01"), Locale::Ja),
        ];

        let slugs = |v: Vec<CaseFrontmatter>| v.into_iter().map(|i| i.slug).collect::<Vec<_>>();
        assert_eq!(
            slugs(select_case_studies(items.clone(), Locale::En, None)),
            vec!["new", "old", "undated"]
        );
        assert_eq!(slugs(select_case_studies(items.clone(), Locale::En, Some(0))), vec!["new"]);
        assert_eq!(slugs(select_case_studies(items.clone(), Locale::En, Some(99))).len(), 3);
        assert_eq!(slugs(select_case_studies(items, Locale::Ja, None)), vec!["japanese"]);
    }
}
