//! Case-study registry and hero image lookup.

use serde::Serialize;

use crate::locale::Locale;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: &'static str,
    pub slug: &'static str,
    pub title_en: &'static str,
    pub title_ja: &'static str,
    pub category_en: &'static str,
    pub category_ja: &'static str,
    pub excerpt_en: &'static str,
    pub excerpt_ja: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'static [&'static str]>,
}

impl CaseStudy {
    pub fn title(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.title_en,
            Locale::Ja => self.title_ja,
        }
    }
}

const fn case_study(
    id: &'static str,
    slug: &'static str,
    title_en: &'static str,
    title_ja: &'static str,
) -> CaseStudy {
    CaseStudy {
        id,
        slug,
        title_en,
        title_ja,
        category_en: "",
        category_ja: "",
        excerpt_en: "",
        excerpt_ja: "",
        metrics: None,
    }
}

/// Case studies published in both locales. Every slug gets a route pair.
pub static CASE_STUDIES: &[CaseStudy] = &[
    case_study(
        "cs-1",
        "managed-it-services-cpg-tokyo",
        "Consumer Goods Managed IT (Tokyo)",
        "消費財メーカー 向け運用保守（東京）",
    ),
    case_study(
        "cs-2",
        "cloud-migration-manufacturing",
        "Manufacturing Cloud Migration (Kantō / Osaka)",
        "製造業 クラウド移行（関東・大阪）",
    ),
    case_study(
        "cs-3",
        "pentest-fintech-tokyo",
        "Fintech Application Penetration Testing (Tokyo)",
        "フィンテック アプリ脆弱性診断（東京）",
    ),
    case_study(
        "cs-4",
        "wifi-assessment-retail-tokyo",
        "Retail Wi-Fi Assessment & Optimization (Tokyo + Warehouse)",
        "小売 Wi-Fiアセスメント・最適化（東京＋倉庫）",
    ),
    case_study(
        "cs-6",
        "itad-tokyo-kobe-consolidation",
        "IT Asset Disposition Program (Tokyo & Kobe)",
        "IT資産処分プログラム（東京・神戸）",
    ),
    case_study(
        "cs-8",
        "datacenter-relocation-colo-to-colo",
        "Data Center Relocation & Consolidation (Metro Tokyo)",
        "データセンター移設・集約（首都圏）",
    ),
    case_study(
        "cs-9",
        "sdwan-insurance-30-sites-japan",
        "SD-WAN Deployment for Major Insurance (30+ Sites)",
        "大手保険 SD-WAN導入（全国30拠点超）",
    ),
    case_study(
        "cs-11",
        "rack-buildout-9racks-campus",
        "Rack Build-out & Cabling (8–9 Racks)",
        "ラック新設・配線（8〜9架）",
    ),
    case_study(
        "cs-12",
        "nationwide-wifi-30-offices",
        "Nationwide Wi-Fi Standardization (30 Offices)",
        "全国Wi-Fi標準化（30拠点）",
    ),
];

/// Slugs hidden from the case-study listing even when an MDX file exists.
pub const EXCLUDED_CASE_STUDY_SLUGS: &[&str] = &[
    "enterprise-wifi-hq-koujimachi",
    "office-relocation-tokyo-hq-move",
    "sdwan-retail-40-sites",
];

const HERO_IMAGES: &[(&str, &str)] = &[
    (
        "cloud-migration-manufacturing",
        "/images/case-studies/cloud-migration-manufacturing/cloud-migration.avif",
    ),
    (
        "datacenter-relocation-colo-to-colo",
        "/images/case-studies/datacenter-relocation-colo-to-colo/data-center-relocation.avif",
    ),
    (
        "itad-tokyo-kobe-consolidation",
        "/images/case-studies/itad-tokyo-kobe-consolidation/e-waste.avif",
    ),
    (
        "pentest-fintech-tokyo",
        "/images/case-studies/pentest-fintech-tokyo/Penetration-Testing.avif",
    ),
    (
        "rack-buildout-9racks-campus",
        "/images/case-studies/rack-buildout-9racks-campus/rack-build.avif",
    ),
    (
        "sdwan-insurance-30-sites-japan",
        "/images/case-studies/sdwan-insurance-30-sites-japan/sd-wan.avif",
    ),
    (
        "managed-it-services-cpg-tokyo",
        "/images/case-studies/managed-it-services-cpg-tokyo/managed-it.avif",
    ),
    (
        "nationwide-wifi-30-offices",
        "/images/case-studies/nationwide-wifi-30-offices/hero.webp",
    ),
    (
        "wifi-assessment-retail-tokyo",
        "/images/case-studies/wifi-assessment-retail-tokyo/wifi-assessment.avif",
    ),
];

/// Public hero image for a case study, falling back to the
/// `/case-assets/{slug}/hero.webp` handler path for unmapped slugs.
pub fn case_study_hero(slug: &str) -> String {
    HERO_IMAGES
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, path)| (*path).to_string())
        .unwrap_or_else(|| format!("/case-assets/{slug}/hero.webp"))
}

pub fn find_case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|c| c.slug == slug)
}

pub fn is_excluded(slug: &str) -> bool {
    EXCLUDED_CASE_STUDY_SLUGS.contains(&slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_case_study_has_a_mapped_hero() {
        for cs in CASE_STUDIES {
            assert!(
                !case_study_hero(cs.slug).starts_with("/case-assets/"),
                "{} uses the fallback hero",
                cs.slug
            );
        }
    }

    #[test]
    fn unknown_slug_falls_back_to_case_assets() {
        assert_eq!(case_study_hero("mystery"), "/case-assets/mystery/hero.webp");
    }

    #[test]
    fn excluded_slugs_are_not_published() {
        for slug in EXCLUDED_CASE_STUDY_SLUGS {
            assert!(find_case_study(slug).is_none());
            assert!(is_excluded(slug));
        }
    }

    #[test]
    fn titles_by_locale() {
        let cs = find_case_study("pentest-fintech-tokyo").unwrap();
        assert_eq!(cs.title(Locale::En), "Fintech Application Penetration Testing (Tokyo)");
        assert_eq!(cs.title(Locale::Ja), "フィンテック アプリ脆弱性診断（東京）");
    }
}
