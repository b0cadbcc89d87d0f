//! Supported site locales and path-based locale inference.

use serde::{Deserialize, Serialize};

use crate::route_map::normalize_path;

/// Path prefix that marks a Japanese-locale URL.
pub const JA_PREFIX: &str = "/ja";

/// A site locale. English is the default and the `x-default` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ja];

    /// BCP 47 language tag, as used in `hreflang` and `<html lang>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
        }
    }

    /// Open Graph locale identifier.
    pub const fn og_locale(self) -> &'static str {
        match self {
            Locale::En => "en_US",
            Locale::Ja => "ja_JP",
        }
    }

    pub const fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Ja,
            Locale::Ja => Locale::En,
        }
    }

    /// Parse a locale tag, tolerating case and region suffixes (`ja-JP`, `EN_us`).
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.trim().to_ascii_lowercase();
        let primary = lowered.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            _ => None,
        }
    }

    /// Infer the locale of a request path.
    ///
    /// The path is normalised first; `/ja` and anything below `/ja/` is
    /// Japanese, every other path is English.
    pub fn from_path(path: &str) -> Self {
        if is_ja_path(&normalize_path(path)) {
            Locale::Ja
        } else {
            Locale::En
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an already-normalised path carries the Japanese prefix as a full
/// segment (so `/jargon` stays English).
pub fn is_ja_path(normalized: &str) -> bool {
    normalized == JA_PREFIX
        || normalized
            .strip_prefix(JA_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Remove the Japanese prefix from a normalised path, mapping `/ja` to `/`.
pub fn strip_locale_prefix(normalized: &str) -> &str {
    if normalized == JA_PREFIX {
        return "/";
    }
    match normalized.strip_prefix(JA_PREFIX) {
        Some(rest) if rest.starts_with('/') => rest,
        _ => normalized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_english_for_unprefixed_paths() {
        assert_eq!(Locale::from_path("/services"), Locale::En);
        assert_eq!(Locale::from_path("/"), Locale::En);
        assert_eq!(Locale::from_path(""), Locale::En);
    }

    #[test]
    fn infers_japanese_for_ja_prefix() {
        assert_eq!(Locale::from_path("/ja/services"), Locale::Ja);
        assert_eq!(Locale::from_path("/ja"), Locale::Ja);
        assert_eq!(Locale::from_path("/ja/"), Locale::Ja);
    }

    #[test]
    fn prefix_must_be_a_whole_segment() {
        assert_eq!(Locale::from_path("/jargon"), Locale::En);
        assert_eq!(Locale::from_path("/japan-services"), Locale::En);
    }

    #[test]
    fn parse_accepts_region_tags() {
        assert_eq!(Locale::parse("ja-JP"), Some(Locale::Ja));
        assert_eq!(Locale::parse("EN_us"), Some(Locale::En));
        assert_eq!(Locale::parse(" ja "), Some(Locale::Ja));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn strip_prefix_maps_ja_root_to_root() {
        assert_eq!(strip_locale_prefix("/ja"), "/");
        assert_eq!(strip_locale_prefix("/ja/services/wifi-design"), "/services/wifi-design");
        assert_eq!(strip_locale_prefix("/jargon"), "/jargon");
        assert_eq!(strip_locale_prefix("/about"), "/about");
    }

    #[test]
    fn other_flips_locale() {
        assert_eq!(Locale::En.other(), Locale::Ja);
        assert_eq!(Locale::Ja.other(), Locale::En);
    }
}
