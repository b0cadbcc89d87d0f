//! Site-wide constants and the static page registry.

use serde::Serialize;

/// Default public origin of the site. Overridable at runtime via config.
pub const DEFAULT_BASE_URL: &str = "https://akrin.jp";

/// Brand name used in Open Graph `site_name`.
pub const SITE_NAME: &str = "AKRIN株式会社";

/// Default social preview image.
pub const DEFAULT_OG_IMAGE: &str = "/og-image.png";

/// English pages listed in the sitemap in addition to the route map.
///
/// Includes the legacy English-only service pages that have no Japanese
/// counterpart (and therefore no alternates).
pub const SITEMAP_STATIC_PATHS: &[&str] = &[
    "/",
    "/about",
    "/services",
    "/contact",
    "/book-reservation",
    "/blog",
    "/privacy",
    "/terms",
    "/cookies",
    "/services/asset-management",
    "/services/cloud",
    "/services/custom-solutions",
    "/services/cyber-security",
    "/services/e-waste",
    "/services/hardware-maintenance",
    "/services/it-consulting",
    "/services/it-equipment",
    "/services/it-security",
    "/services/it-support",
    "/services/managed-services",
    "/services/onsite-support",
    "/services/recruitment",
    "/services/relocation",
    "/services/wireless-survey",
    "/services/workforce-solutions",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Homepage,
    Service,
    About,
    Contact,
    Blog,
    Other,
}

/// SEO configuration for a key English page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitePage {
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub kind: PageKind,
    pub priority: f32,
}

pub const SITE_PAGES: &[SitePage] = &[
    SitePage {
        path: "/",
        title: "AKRIN - Leading IT Solutions Provider in Japan | Managed Services & Support",
        description: "Transform your business with AKRIN's comprehensive IT solutions. We offer managed services, cybersecurity, cloud migration, and 24/7 support for businesses in Japan and globally.",
        keywords: &[
            "IT solutions Japan",
            "managed IT services Tokyo",
            "cybersecurity Japan",
            "cloud migration services",
            "IT support Tokyo",
        ],
        kind: PageKind::Homepage,
        priority: 1.0,
    },
    SitePage {
        path: "/about",
        title: "About AKRIN - Your Trusted IT Partner Since Establishment",
        description: "Learn about AKRIN's mission, values, and commitment to delivering exceptional IT solutions. We combine Japanese precision with global innovation to transform businesses.",
        keywords: &[
            "about AKRIN",
            "IT company Japan",
            "Tokyo IT services",
            "Japanese technology company",
        ],
        kind: PageKind::About,
        priority: 0.8,
    },
    SitePage {
        path: "/services",
        title: "IT Services - Comprehensive Technology Solutions | AKRIN",
        description: "Explore our full range of IT services including managed IT, cybersecurity, cloud solutions, consulting, and 24/7 support. Professional technology solutions for businesses in Japan.",
        keywords: &[
            "IT services Japan",
            "managed IT services",
            "cybersecurity solutions",
            "cloud services",
        ],
        kind: PageKind::Service,
        priority: 0.9,
    },
    SitePage {
        path: "/services/it-managed-services",
        title: "Managed IT Services & 24/7 Support | AKRIN Japan MSP",
        description: "Proactive monitoring, unlimited helpdesk, and on-site support. Cut IT costs 30–50% and hit 99.9% uptime with AKRIN—Japan's trusted MSP.",
        keywords: &[
            "managed IT services Japan",
            "24/7 IT support",
            "MSP Japan",
            "IT monitoring",
            "helpdesk support",
        ],
        kind: PageKind::Service,
        priority: 0.8,
    },
    SitePage {
        path: "/services/it-consulting-project-management",
        title: "IT Consulting & Project Management | AKRIN Japan",
        description: "Strategy, PMO, and delivery for complex IT initiatives. AKRIN plans, budgets, and executes technology projects in Japan with zero day downtime.",
        keywords: &[
            "IT consulting Japan",
            "project management",
            "PMO services",
            "IT strategy",
            "technology consulting",
        ],
        kind: PageKind::Service,
        priority: 0.8,
    },
    SitePage {
        path: "/contact",
        title: "Contact AKRIN - Get Expert IT Solutions Today",
        description: "Contact AKRIN for professional IT solutions and support. Get a free consultation and discover how we can transform your business technology infrastructure.",
        keywords: &[
            "contact AKRIN",
            "IT consultation Japan",
            "get IT support",
            "business technology help",
        ],
        kind: PageKind::Contact,
        priority: 0.7,
    },
    SitePage {
        path: "/blog",
        title: "AKRIN Blog - IT Insights & Technology Trends",
        description: "Discover insightful resources and expert advice from our seasoned team. Read about cybersecurity, cloud solutions, IT infrastructure, and digital transformation.",
        keywords: &[
            "IT blog Japan",
            "technology insights",
            "cybersecurity tips",
            "cloud computing news",
        ],
        kind: PageKind::Blog,
        priority: 0.9,
    },
];

/// Look up the SEO configuration of a page by exact path.
pub fn site_page(path: &str) -> Option<&'static SitePage> {
    SITE_PAGES.iter().find(|p| p.path == path)
}

/// Join a base URL and a normalised path into an absolute URL.
///
/// ```
/// use akrin_core::site::absolute_url;
///
/// assert_eq!(absolute_url("https://akrin.jp/", "/about"), "https://akrin.jp/about");
/// assert_eq!(absolute_url("https://akrin.jp", "/"), "https://akrin.jp/");
/// ```
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
