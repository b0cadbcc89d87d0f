//! Local SEO analysis and the aggregated site report.
//!
//! Blog posts are checked against title, description, heading, image and
//! length rules; key pages are checked against their registry entry. The
//! report combines both with the technical checklist and, when available,
//! the domain's backlink profile.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::blog::{BlogPost, BLOG_POSTS_EN};
use crate::html::strip_tags;
use crate::site::{site_page, PageKind, SITE_PAGES};

static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>").expect("valid regex"));
static H1_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h1[^>]*>.*?</h1>").expect("valid regex"));
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<h2[^>]*>").expect("valid regex"));
static IMG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const TITLE_MIN: usize = 30;
const TITLE_MAX: usize = 60;
const DESCRIPTION_MIN: usize = 120;
const DESCRIPTION_MAX: usize = 160;
const MIN_WORDS: usize = 300;
const LONG_CONTENT_WORDS: usize = 500;

/// Length used for generated meta descriptions.
pub const GENERATED_DESCRIPTION_LEN: usize = 155;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "can", "this", "that", "these", "those",
];

const BLOG_KEYWORDS: &[&str] = &["AKRIN", "IT Solutions", "Technology", "Japan"];

const GENERAL_PAGE_RECOMMENDATIONS: &[&str] = &[
    "Ensure page loads in under 3 seconds",
    "Optimize images with proper alt text and compression",
    "Use proper heading hierarchy (H1 → H2 → H3)",
    "Include internal links to related pages",
    "Ensure mobile responsiveness",
    "Add structured data markup",
    "Optimize meta title and description",
    "Use semantic HTML elements",
];

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Notice,
}

impl Severity {
    /// Points deducted from a perfect score.
    pub const fn penalty(self) -> u32 {
        match self {
            Severity::Error => 15,
            Severity::Warning => 10,
            Severity::Notice => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Title,
    Description,
    Headers,
    Content,
    Images,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoIssue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    pub recommendation: String,
}

impl SeoIssue {
    fn new(severity: Severity, category: IssueCategory, message: impl Into<String>, recommendation: &str) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            recommendation: recommendation.to_string(),
        }
    }
}

/// 100 minus the penalty of every issue, floored at zero.
pub fn score_issues(issues: &[SeoIssue]) -> u32 {
    let penalty: u32 = issues.iter().map(|i| i.severity.penalty()).sum();
    100u32.saturating_sub(penalty)
}

pub fn analyze_title(title: &str) -> Vec<SeoIssue> {
    let mut issues = Vec::new();
    let len = title.chars().count();
    if len < TITLE_MIN {
        issues.push(SeoIssue::new(
            Severity::Warning,
            IssueCategory::Title,
            "Title is too short",
            "Consider expanding the title to 30-60 characters for better SEO",
        ));
    }
    if len > TITLE_MAX {
        issues.push(SeoIssue::new(
            Severity::Error,
            IssueCategory::Title,
            "Title is too long",
            "Shorten the title to under 60 characters to prevent truncation in search results",
        ));
    }
    if !title.contains("AKRIN") && !title.contains("IT") {
        issues.push(SeoIssue::new(
            Severity::Notice,
            IssueCategory::Title,
            "Title could include brand or industry keywords",
            "Consider including \"AKRIN\" or relevant IT keywords in the title",
        ));
    }
    issues
}

pub fn analyze_content(content: &str) -> Vec<SeoIssue> {
    let mut issues = Vec::new();
    let word_count = strip_tags(content).split_whitespace().count();

    if word_count < MIN_WORDS {
        issues.push(SeoIssue::new(
            Severity::Warning,
            IssueCategory::Content,
            "Content is too short",
            "Expand content to at least 300 words for better SEO performance",
        ));
    }

    match H1_RE.find_iter(content).count() {
        0 => issues.push(SeoIssue::new(
            Severity::Error,
            IssueCategory::Headers,
            "Missing H1 tag",
            "Add an H1 tag to clearly define the main topic of the page",
        )),
        1 => {}
        _ => issues.push(SeoIssue::new(
            Severity::Warning,
            IssueCategory::Headers,
            "Multiple H1 tags found",
            "Use only one H1 tag per page and use H2-H6 for subheadings",
        )),
    }

    if H2_RE.find_iter(content).count() == 0 && word_count > LONG_CONTENT_WORDS {
        issues.push(SeoIssue::new(
            Severity::Notice,
            IssueCategory::Headers,
            "No H2 tags found",
            "Add H2 tags to structure longer content and improve readability",
        ));
    }

    let missing_alt = IMG_RE
        .find_iter(content)
        .filter(|img| !img.as_str().contains("alt="))
        .count();
    if missing_alt > 0 {
        issues.push(SeoIssue::new(
            Severity::Error,
            IssueCategory::Images,
            format!("{missing_alt} images missing alt text"),
            "Add descriptive alt text to all images for accessibility and SEO",
        ));
    }

    issues
}

pub fn analyze_description(description: &str) -> Vec<SeoIssue> {
    let mut issues = Vec::new();
    let len = description.chars().count();
    if len < DESCRIPTION_MIN {
        issues.push(SeoIssue::new(
            Severity::Warning,
            IssueCategory::Description,
            "Meta description is too short",
            "Expand meta description to 120-160 characters for better search result display",
        ));
    }
    if len > DESCRIPTION_MAX {
        issues.push(SeoIssue::new(
            Severity::Error,
            IssueCategory::Description,
            "Meta description is too long",
            "Shorten meta description to under 160 characters to prevent truncation",
        ));
    }
    issues
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Derive a meta description from HTML content.
///
/// The `<h1>` is dropped. Short text is returned whole; otherwise the first
/// sentence is used when it is reasonably long, then the last sentence break
/// in the limit, then the last word break followed by `...`.
pub fn generate_meta_description(content: &str, max_len: usize) -> String {
    let without_h1 = H1_BLOCK_RE.replace_all(content, "");
    let stripped = strip_tags(&without_h1);
    let text = WHITESPACE_RE.replace_all(&stripped, " ");
    let text = text.trim();
    let len = text.chars().count();

    if len <= max_len {
        return text.to_string();
    }

    let first_sentence = text.split('.').next().unwrap_or_default();
    let first_len = first_sentence.chars().count();
    if first_len <= max_len && first_len * 2 > max_len {
        return format!("{first_sentence}.");
    }

    let truncated = char_prefix(text, max_len);
    if let Some(dot) = truncated.rfind('.') {
        if truncated[..dot].chars().count() * 10 > max_len * 7 {
            return text[..=dot].to_string();
        }
    }

    match truncated.rfind(' ') {
        Some(space) => format!("{}...", &text[..space]),
        None => format!("{truncated}..."),
    }
}

/// Most frequent non-stop-words longer than three characters, most frequent
/// first and ties in order of first appearance.
pub fn extract_keywords(content: &str, limit: usize) -> Vec<String> {
    let text = strip_tags(content).to_lowercase();
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in text.split_whitespace() {
        let clean: String = word
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if clean.len() <= 3 || STOP_WORDS.contains(&clean.as_str()) {
            continue;
        }
        match index.get(&clean) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(clean.clone(), order.len());
                order.push((clean, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.into_iter().take(limit).map(|(word, _)| word).collect()
}

// ---------------------------------------------------------------------------
// Blog post analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub og_image: String,
    pub structured_data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoAnalysis {
    pub score: u32,
    pub issues: Vec<SeoIssue>,
    pub recommendations: Vec<String>,
    pub metadata: SeoMetadata,
}

impl SeoAnalysis {
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Input to [`analyze_blog_post`]; borrowed from a stored post or a request.
#[derive(Debug, Clone, Copy)]
pub struct PostInput<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub slug: &'a str,
    pub category: &'a str,
    pub tags: &'a [&'a str],
    pub meta_description: Option<&'a str>,
}

impl<'a> From<&'a BlogPost> for PostInput<'a> {
    fn from(post: &'a BlogPost) -> Self {
        Self {
            title: post.title,
            content: post.content,
            slug: post.slug,
            category: post.category,
            tags: post.tags,
            meta_description: post.meta_description,
        }
    }
}

pub fn analyze_blog_post(post: PostInput<'_>, base_url: &str) -> SeoAnalysis {
    let description = post
        .meta_description
        .map(str::to_string)
        .unwrap_or_else(|| generate_meta_description(post.content, GENERATED_DESCRIPTION_LEN));

    let mut issues = analyze_title(post.title);
    issues.extend(analyze_content(post.content));
    issues.extend(analyze_description(&description));

    let score = score_issues(&issues);
    let recommendations = post_recommendations(&issues);
    let metadata = blog_metadata(&post, description, base_url);

    SeoAnalysis {
        score,
        issues,
        recommendations,
        metadata,
    }
}

fn post_recommendations(issues: &[SeoIssue]) -> Vec<String> {
    let mut out = Vec::new();
    if issues.iter().any(|i| i.severity == Severity::Error) {
        out.push("🔴 Critical: Fix all error-level SEO issues first".to_string());
    }
    if issues.iter().any(|i| i.severity == Severity::Warning) {
        out.push("🟡 Important: Address warning-level issues to improve SEO performance".to_string());
    }
    out.extend(
        [
            "✅ Ensure all images have descriptive alt text",
            "✅ Use proper heading hierarchy (H1 → H2 → H3)",
            "✅ Include relevant keywords naturally in content",
            "✅ Add internal links to related blog posts",
            "✅ Optimize page loading speed",
        ]
        .map(str::to_string),
    );
    out
}

fn blog_metadata(post: &PostInput<'_>, description: String, base_url: &str) -> SeoMetadata {
    let base = base_url.trim_end_matches('/');
    let canonical_url = format!("{base}/blog/{}", post.slug);
    let og_image = format!("{base}/blog-images/{}-og.png", post.slug);

    let keywords: Vec<String> = post
        .tags
        .iter()
        .copied()
        .chain(std::iter::once(post.category))
        .chain(BLOG_KEYWORDS.iter().copied())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    let structured_data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": description,
        "url": canonical_url,
        "author": { "@type": "Organization", "name": "AKRIN", "url": base },
        "publisher": {
            "@type": "Organization",
            "name": "AKRIN",
            "url": base,
            "logo": { "@type": "ImageObject", "url": format!("{base}/akrin-logo.svg") }
        },
        "mainEntityOfPage": { "@type": "WebPage", "@id": canonical_url },
        "articleSection": post.category,
        "keywords": post.tags.join(", "),
    });

    SeoMetadata {
        title: format!("{} | AKRIN Blog", post.title),
        description,
        keywords,
        canonical_url,
        og_image,
        structured_data,
    }
}

// ---------------------------------------------------------------------------
// Page analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PageScore {
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Page-type specific advice followed by the general checklist.
pub fn page_recommendations(path: &str) -> Vec<String> {
    let specific: &[&str] = match site_page(path).map(|p| p.kind) {
        Some(PageKind::Homepage) => &[
            "Include primary keywords in the first 100 words",
            "Add clear value proposition above the fold",
            "Include customer testimonials or trust signals",
            "Optimize for local SEO with location information",
        ],
        Some(PageKind::Service) => &[
            "Include service-specific keywords naturally",
            "Add customer case studies or success stories",
            "Include clear call-to-action buttons",
            "Add FAQ section for common questions",
        ],
        Some(PageKind::Blog) => &[
            "Use long-tail keywords in content",
            "Include related blog post links",
            "Add social sharing buttons",
            "Optimize for featured snippets",
        ],
        Some(PageKind::Contact) => &[
            "Include complete contact information",
            "Add location map if applicable",
            "Include business hours",
            "Add contact form with proper labels",
        ],
        _ => &[],
    };
    specific
        .iter()
        .chain(GENERAL_PAGE_RECOMMENDATIONS)
        .map(|s| (*s).to_string())
        .collect()
}

/// Score a page's registry entry. Unknown pages lose 20 points.
pub fn analyze_page(path: &str) -> PageScore {
    let mut score: u32 = 100;
    let mut issues = Vec::new();

    match site_page(path) {
        None => {
            issues.push("Page not found in SEO configuration".to_string());
            score -= 20;
        }
        Some(page) => {
            if page.title.chars().count() > TITLE_MAX {
                issues.push("Title is too long (over 60 characters)".to_string());
                score -= 10;
            }
            if page.description.chars().count() > DESCRIPTION_MAX {
                issues.push("Meta description is too long (over 160 characters)".to_string());
                score -= 10;
            }
            if page.keywords.len() < 3 {
                issues.push("Not enough target keywords defined".to_string());
                score -= 5;
            }
        }
    }

    PageScore {
        score,
        issues,
        recommendations: page_recommendations(path),
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Backlink profile of a domain, as reported by the SEO data provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainAnalysis {
    pub domain: String,
    pub backlinks: u64,
    pub referring_domains: u64,
    pub organic_keywords: u64,
    pub organic_traffic: u64,
    pub paid_keywords: u64,
    pub paid_traffic: u64,
    pub domain_rank: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Low,
    Medium,
    High,
}

impl Effort {
    pub const fn as_str(self) -> &'static str {
        match self {
            Effort::Low => "low",
            Effort::Medium => "medium",
            Effort::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Working,
    Error,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueFrequency {
    pub issue: String,
    pub frequency: usize,
    pub severity: Severity,
    pub affected: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageAnalysis {
    pub path: &'static str,
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub score: u32,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteAnalysis {
    pub total_pages: usize,
    pub average_score: u32,
    pub pages_analyzed: Vec<PageAnalysis>,
    pub common_issues: Vec<IssueFrequency>,
    pub best_performing_pages: Vec<String>,
    pub pages_needing_attention: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogPostAnalysis {
    pub slug: &'static str,
    pub title: &'static str,
    pub score: u32,
    pub analysis: SeoAnalysis,
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogAnalysis {
    pub total_posts: usize,
    pub average_score: u32,
    pub posts_analyzed: Vec<BlogPostAnalysis>,
    pub common_issues: Vec<IssueFrequency>,
    pub best_performing_posts: Vec<String>,
    pub posts_needing_attention: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalSeo {
    pub sitemap_status: CheckStatus,
    pub robots_txt_status: CheckStatus,
    pub meta_tags_implemented: bool,
    pub structured_data_implemented: bool,
    pub canonical_urls_implemented: bool,
    pub open_graph_implemented: bool,
    pub twitter_cards_implemented: bool,
}

impl TechnicalSeo {
    /// Checklist for this server, which serves its own sitemap, robots and
    /// page metadata.
    pub fn served() -> Self {
        Self {
            sitemap_status: CheckStatus::Working,
            robots_txt_status: CheckStatus::Working,
            meta_tags_implemented: true,
            structured_data_implemented: true,
            canonical_urls_implemented: true,
            open_graph_implemented: true,
            twitter_cards_implemented: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub category: &'static str,
    pub title: &'static str,
    pub description: String,
    pub impact: &'static str,
    pub effort: Effort,
    pub implementation: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
    pub ongoing: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub overall_score: u32,
    pub total_issues: usize,
    pub critical_issues: usize,
    pub improvement_potential: &'static str,
    pub key_findings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_analysis: Option<DomainAnalysis>,
    pub website_analysis: WebsiteAnalysis,
    pub blog_analysis: BlogAnalysis,
    #[serde(rename = "technicalSEO")]
    pub technical_seo: TechnicalSeo,
    pub recommendations: Vec<Recommendation>,
    pub action_plan: ActionPlan,
}

fn average(scores: impl Iterator<Item = u32>) -> u32 {
    let (sum, n) = scores.fold((0u32, 0u32), |(s, n), x| (s + x, n + 1));
    if n == 0 {
        0
    } else {
        (f64::from(sum) / f64::from(n)).round() as u32
    }
}

/// Count issues by key, preserving first-seen order, and keep the ten most
/// frequent.
fn top_issues(mut entries: Vec<IssueFrequency>) -> Vec<IssueFrequency> {
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(10);
    entries
}

fn record_issue(
    entries: &mut Vec<IssueFrequency>,
    index: &mut HashMap<String, usize>,
    key: String,
    issue: &str,
    severity: Severity,
    affected: &str,
) {
    match index.get(&key) {
        Some(&i) => {
            entries[i].frequency += 1;
            entries[i].affected.push(affected.to_string());
        }
        None => {
            index.insert(key, entries.len());
            entries.push(IssueFrequency {
                issue: issue.to_string(),
                frequency: 1,
                severity,
                affected: vec![affected.to_string()],
            });
        }
    }
}

pub fn analyze_website_pages() -> WebsiteAnalysis {
    let mut pages_analyzed = Vec::with_capacity(SITE_PAGES.len());
    let mut entries = Vec::new();
    let mut index = HashMap::new();

    for page in SITE_PAGES {
        let result = analyze_page(page.path);
        let priority = if result.score < 60 || page.priority >= 0.9 {
            Priority::High
        } else if result.score < 80 || page.priority >= 0.7 {
            Priority::Medium
        } else {
            Priority::Low
        };

        for issue in &result.issues {
            record_issue(&mut entries, &mut index, issue.clone(), issue, Severity::Warning, page.path);
        }

        pages_analyzed.push(PageAnalysis {
            path: page.path,
            title: page.title,
            kind: page.kind,
            score: result.score,
            issues: result.issues,
            recommendations: result.recommendations,
            priority,
        });
    }

    WebsiteAnalysis {
        total_pages: SITE_PAGES.len(),
        average_score: average(pages_analyzed.iter().map(|p| p.score)),
        common_issues: top_issues(entries),
        best_performing_pages: pages_analyzed
            .iter()
            .filter(|p| p.score >= 90)
            .map(|p| p.title.to_string())
            .collect(),
        pages_needing_attention: pages_analyzed
            .iter()
            .filter(|p| p.priority == Priority::High)
            .map(|p| p.title.to_string())
            .collect(),
        pages_analyzed,
    }
}

pub fn analyze_blog_posts(base_url: &str) -> BlogAnalysis {
    let mut posts_analyzed = Vec::with_capacity(BLOG_POSTS_EN.len());
    let mut entries = Vec::new();
    let mut index = HashMap::new();

    for post in BLOG_POSTS_EN {
        let analysis = analyze_blog_post(post.into(), base_url);
        let errors = analysis.count(Severity::Error);
        let priority = if analysis.score < 60 || errors > 2 {
            Priority::High
        } else if analysis.score < 80 || errors > 0 {
            Priority::Medium
        } else {
            Priority::Low
        };

        for issue in &analysis.issues {
            let key = format!("{:?}-{}", issue.category, issue.message);
            record_issue(&mut entries, &mut index, key, &issue.message, issue.severity, post.slug);
        }

        posts_analyzed.push(BlogPostAnalysis {
            slug: post.slug,
            title: post.title,
            score: analysis.score,
            analysis,
            priority,
        });
    }

    BlogAnalysis {
        total_posts: BLOG_POSTS_EN.len(),
        average_score: average(posts_analyzed.iter().map(|p| p.score)),
        common_issues: top_issues(entries),
        best_performing_posts: posts_analyzed
            .iter()
            .filter(|p| p.score >= 90)
            .map(|p| p.title.to_string())
            .collect(),
        posts_needing_attention: posts_analyzed
            .iter()
            .filter(|p| p.priority == Priority::High)
            .map(|p| p.title.to_string())
            .collect(),
        posts_analyzed,
    }
}

fn build_recommendations(website: &WebsiteAnalysis, blog: &BlogAnalysis, technical: &TechnicalSeo) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if website.average_score < 85 {
        out.push(Recommendation {
            priority: Priority::High,
            category: "content",
            title: "Improve Overall Website SEO Performance",
            description: format!(
                "Website average SEO score is {}%. Focus on optimizing page titles, meta descriptions, and content structure across all pages.",
                website.average_score
            ),
            impact: "High - Better search rankings across entire website",
            effort: Effort::Medium,
            implementation: vec![
                "Review and optimize all page titles (30-60 characters)",
                "Write compelling meta descriptions for all pages (120-160 characters)",
                "Ensure consistent keyword usage across related pages",
                "Improve internal linking structure between pages",
            ],
        });
    }

    if !website.pages_needing_attention.is_empty() {
        out.push(Recommendation {
            priority: Priority::High,
            category: "content",
            title: "Fix High-Priority Page Issues",
            description: format!(
                "{} pages need immediate attention: {}",
                website.pages_needing_attention.len(),
                website.pages_needing_attention.join(", ")
            ),
            impact: "High - Critical pages affecting overall site performance",
            effort: Effort::Medium,
            implementation: vec![
                "Prioritize optimization of homepage and main service pages",
                "Fix technical SEO issues on high-traffic pages",
                "Improve content quality on underperforming pages",
                "Add missing structured data to important pages",
            ],
        });
    }

    if blog.average_score < 80 {
        out.push(Recommendation {
            priority: Priority::High,
            category: "content",
            title: "Improve Blog Post SEO Scores",
            description: format!(
                "Average blog post SEO score is {}%. Focus on optimizing titles, meta descriptions, and content structure.",
                blog.average_score
            ),
            impact: "High - Better search rankings and click-through rates",
            effort: Effort::Medium,
            implementation: vec![
                "Review and optimize blog post titles (30-60 characters)",
                "Write compelling meta descriptions (120-160 characters)",
                "Improve heading structure (H1, H2, H3 hierarchy)",
                "Add relevant internal links between blog posts",
            ],
        });
    }

    if technical.sitemap_status != CheckStatus::Working {
        out.push(Recommendation {
            priority: Priority::High,
            category: "technical",
            title: "Fix XML Sitemap",
            description: "XML sitemap is not working properly, which affects search engine indexing.".to_string(),
            impact: "High - Essential for search engine discovery",
            effort: Effort::Low,
            implementation: vec![
                "Ensure sitemap.xml is accessible",
                "Submit sitemap to Google Search Console",
                "Update sitemap when new content is published",
            ],
        });
    }

    out.push(Recommendation {
        priority: Priority::Medium,
        category: "performance",
        title: "Optimize Page Loading Speed",
        description: "Fast loading pages improve user experience and search rankings.".to_string(),
        impact: "Medium - Better user experience and SEO",
        effort: Effort::Medium,
        implementation: vec![
            "Optimize images with proper compression",
            "Implement lazy loading for images",
            "Minimize CSS and JavaScript files",
            "Use CDN for static assets",
        ],
    });

    if blog
        .common_issues
        .iter()
        .any(|i| i.issue.to_lowercase().contains("title"))
    {
        out.push(Recommendation {
            priority: Priority::High,
            category: "metadata",
            title: "Optimize Title Tags",
            description: "Many blog posts have title tag issues that affect search visibility.".to_string(),
            impact: "High - Directly affects search rankings",
            effort: Effort::Low,
            implementation: vec![
                "Ensure all titles are 30-60 characters",
                "Include target keywords in titles",
                "Make titles compelling and click-worthy",
                "Avoid duplicate titles across pages",
            ],
        });
    }

    // Stable: equal priorities keep insertion order.
    out.sort_by(|a, b| b.priority.cmp(&a.priority));
    out
}

fn titles_where(recommendations: &[Recommendation], pred: impl Fn(&Recommendation) -> bool) -> Vec<String> {
    recommendations
        .iter()
        .filter(|r| pred(r))
        .map(|r| r.title.to_string())
        .collect()
}

fn build_action_plan(recommendations: &[Recommendation]) -> ActionPlan {
    ActionPlan {
        immediate: titles_where(recommendations, |r| r.priority == Priority::High && r.effort == Effort::Low),
        short_term: titles_where(recommendations, |r| {
            r.priority == Priority::High && r.effort == Effort::Medium
        }),
        long_term: titles_where(recommendations, |r| r.effort == Effort::High),
        ongoing: [
            "Monitor SEO performance with regular audits",
            "Create new optimized blog content regularly",
            "Update existing content based on performance data",
            "Track keyword rankings and adjust strategy",
        ]
        .map(str::to_string)
        .to_vec(),
    }
}

fn build_summary(
    website: &WebsiteAnalysis,
    blog: &BlogAnalysis,
    technical: &TechnicalSeo,
    domain: Option<&DomainAnalysis>,
) -> ReportSummary {
    let website_issues: usize = website.pages_analyzed.iter().map(|p| p.issues.len()).sum();
    let blog_issues: usize = blog.posts_analyzed.iter().map(|p| p.analysis.issues.len()).sum();
    let critical_issues = blog
        .posts_analyzed
        .iter()
        .map(|p| p.analysis.count(Severity::Error))
        .sum::<usize>()
        + website.pages_analyzed.iter().filter(|p| p.score < 60).count();

    let mut overall = f64::from(website.average_score) * 0.6 + f64::from(blog.average_score) * 0.4;
    if technical.sitemap_status == CheckStatus::Working {
        overall += 5.0;
    }
    if technical.robots_txt_status == CheckStatus::Working {
        overall += 5.0;
    }
    if technical.meta_tags_implemented {
        overall += 5.0;
    }
    if technical.structured_data_implemented {
        overall += 5.0;
    }
    let overall = overall.min(100.0);

    let improvement_potential = if overall >= 90.0 {
        "Low"
    } else if overall >= 70.0 {
        "Medium"
    } else {
        "High"
    };

    let key_findings = vec![
        format!(
            "{} website pages analyzed with average SEO score of {}%",
            website.total_pages, website.average_score
        ),
        format!(
            "{} blog posts analyzed with average SEO score of {}%",
            blog.total_posts, blog.average_score
        ),
        format!("{critical_issues} critical SEO issues found across website and blog"),
        format!(
            "{} high-priority pages need immediate attention",
            website.pages_needing_attention.len()
        ),
        format!(
            "Technical SEO implementation is {}",
            if technical.meta_tags_implemented {
                "excellent"
            } else {
                "needs improvement"
            }
        ),
        match domain {
            Some(d) => format!(
                "Domain has {} backlinks from {} domains",
                d.backlinks, d.referring_domains
            ),
            None => "Domain analysis not available".to_string(),
        },
    ];

    ReportSummary {
        overall_score: overall.round() as u32,
        total_issues: website_issues + blog_issues,
        critical_issues,
        improvement_potential,
        key_findings,
    }
}

/// Assemble the full site report.
pub fn build_seo_report(base_url: &str, domain_analysis: Option<DomainAnalysis>, now: DateTime<Utc>) -> SeoReport {
    let website_analysis = analyze_website_pages();
    let blog_analysis = analyze_blog_posts(base_url);
    let technical_seo = TechnicalSeo::served();
    let recommendations = build_recommendations(&website_analysis, &blog_analysis, &technical_seo);
    let action_plan = build_action_plan(&recommendations);
    let summary = build_summary(
        &website_analysis,
        &blog_analysis,
        &technical_seo,
        domain_analysis.as_ref(),
    );

    SeoReport {
        generated_at: now,
        summary,
        domain_analysis,
        website_analysis,
        blog_analysis,
        technical_seo,
        recommendations,
        action_plan,
    }
}

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|i| format!("- {}", i.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a report as a Markdown document.
pub fn render_report_markdown(report: &SeoReport) -> String {
    let summary = &report.summary;
    let website = &report.website_analysis;
    let blog = &report.blog_analysis;
    let plan = &report.action_plan;

    let top_issues = blog
        .common_issues
        .iter()
        .take(5)
        .map(|i| format!("- **{}** ({} posts affected)", i.issue, i.frequency))
        .collect::<Vec<_>>()
        .join("\n");

    let recommendations = report
        .recommendations
        .iter()
        .map(|r| {
            format!(
                "### {} ({} Priority)\n{}\n\n**Impact**: {}\n**Effort**: {}\n\n**Implementation Steps**:\n{}\n",
                r.title,
                r.priority.label(),
                r.description,
                r.impact,
                r.effort.as_str(),
                bullets(&r.implementation)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# SEO Analysis Report for AKRIN Website\n\n\
         Generated: {generated}\n\n\
         ## Executive Summary\n\n\
         - **Overall SEO Score**: {score}%\n\
         - **Total Issues Found**: {total}\n\
         - **Critical Issues**: {critical}\n\
         - **Improvement Potential**: {potential}\n\n\
         ### Key Findings\n{findings}\n\n\
         ## Website Analysis\n\n\
         - **Total Pages**: {pages}\n\
         - **Average SEO Score**: {page_avg}%\n\
         - **Pages Needing Attention**: {attention_count}\n\n\
         ### Best Performing Pages\n{best}\n\n\
         ### Pages Needing Attention\n{attention}\n\n\
         ## Blog Analysis\n\n\
         - **Total Posts**: {posts}\n\
         - **Average SEO Score**: {post_avg}%\n\
         - **Posts Needing Attention**: {posts_attention}\n\n\
         ### Top Issues\n{top_issues}\n\n\
         ## Recommendations\n\n{recommendations}\n\n\
         ## Action Plan\n\n\
         ### Immediate Actions (Next 1-2 weeks)\n{immediate}\n\n\
         ### Short-term Actions (Next 1-3 months)\n{short_term}\n\n\
         ### Long-term Actions (3+ months)\n{long_term}\n\n\
         ### Ongoing Activities\n{ongoing}\n",
        generated = report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        score = summary.overall_score,
        total = summary.total_issues,
        critical = summary.critical_issues,
        potential = summary.improvement_potential,
        findings = bullets(&summary.key_findings),
        pages = website.total_pages,
        page_avg = website.average_score,
        attention_count = website.pages_needing_attention.len(),
        best = bullets(&website.best_performing_pages[..website.best_performing_pages.len().min(5)]),
        attention = bullets(&website.pages_needing_attention),
        posts = blog.total_posts,
        post_avg = blog.average_score,
        posts_attention = blog.posts_needing_attention.len(),
        immediate = bullets(&plan.immediate),
        short_term = bullets(&plan.short_term),
        long_term = bullets(&plan.long_term),
        ongoing = bullets(&plan.ongoing),
    )
}
