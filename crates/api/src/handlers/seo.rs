//! Handlers for the SEO admin routes.
//!
//! Remote figures come from SEranking. Keyword lookups degrade to research
//! data and then to an unranked keyword list so the dashboard always has
//! rows to show; every other remote failure is reported as an error.

use axum::extract::{Path, Query, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use akrin_clients::seranking::{DomainReport, KeywordResearch, KeywordTracking, SITE_KEYWORDS};
use akrin_clients::SerankingError;
use akrin_core::content::{blog_posts, find_post};
use akrin_core::error::CoreError;
use akrin_core::locale::Locale;
use akrin_core::seo::{
    analyze_blog_post, build_seo_report, render_report_markdown, DomainAnalysis, SeoReport,
    Severity,
};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

const DEFAULT_TRACKING_LIMIT: u32 = 50;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ProbeRequest {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeTestParams {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOptions {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub options: AnalyzeOptions,
}

#[derive(Debug, Deserialize)]
pub struct KeywordParams {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    /// Comma-separated keyword list for `action=research`.
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordOperation {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    #[serde(default = "default_operation_source")]
    pub source: String,
    #[serde(default)]
    pub competitors: Option<Vec<String>>,
    #[serde(default)]
    pub competitor: Option<String>,
}

fn default_operation_source() -> String {
    "us".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AuditParams {
    #[serde(default)]
    pub domain: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParams {
    #[serde(default)]
    pub format: Option<String>,
    /// Anything other than `false` includes the domain figures.
    #[serde(default)]
    pub include_domain_analysis: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default = "default_true")]
    pub include_domain_analysis: bool,
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionData {
    pub connection: Value,
    pub domain_analysis: DomainAnalysis,
    pub keyword_research: Vec<KeywordResearch>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ConnectionResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

/// Per-post row of an `all-posts` analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostScoreRow {
    pub slug: &'static str,
    pub title: &'static str,
    pub score: u32,
    pub issues: usize,
    pub error_count: usize,
    pub warning_count: usize,
    pub recommendations: usize,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// `{ "<name>": data }` on success, `{ "<name>Error": message }` otherwise.
fn record_probe<T: Serialize>(
    results: &mut serde_json::Map<String, Value>,
    name: &str,
    outcome: Result<T, SerankingError>,
) {
    match outcome {
        Ok(data) => {
            results.insert(name.to_string(), json!(data));
        }
        Err(e) => {
            results.insert(format!("{name}Error"), json!(e.to_string()));
        }
    }
}

fn domain_recommendations(analysis: &DomainAnalysis, health_score: u64) -> Vec<&'static str> {
    let mut out = Vec::new();
    if analysis.backlinks == 0 {
        out.push("Build quality backlinks to improve domain authority");
    }
    if analysis.referring_domains < 5 {
        out.push("Increase referring domains through content marketing");
    }
    if health_score < 80 {
        out.push("Focus on technical SEO improvements");
    }
    out.push("Monitor keyword rankings regularly");
    out.push("Optimize content for target keywords");
    out
}

/// Research row for a keyword with no data available.
fn empty_research(keyword: &str) -> KeywordResearch {
    KeywordResearch {
        keyword: keyword.to_string(),
        position: 0,
        search_volume: 0,
        difficulty: 0,
        cpc: 0.0,
        competition: "unknown".to_string(),
    }
}

fn site_keywords() -> Vec<String> {
    SITE_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Domain figures for a report; `None` when disabled, unconfigured or failed.
async fn report_domain_analysis(state: &AppState, include: bool) -> Option<DomainAnalysis> {
    if !include || !state.seranking.is_configured() {
        return None;
    }
    match state.seranking.domain_analysis(&state.config.seo_domain).await {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            tracing::warn!(error = %e, "Domain analysis unavailable for SEO report");
            None
        }
    }
}

async fn generate(state: &AppState, include_domain: bool, base_url: Option<String>) -> SeoReport {
    let base_url = base_url.unwrap_or_else(|| state.config.site_base_url.clone());
    let domain_analysis = report_domain_analysis(state, include_domain).await;
    build_seo_report(&base_url, domain_analysis, Utc::now())
}

fn attachment(
    body: String,
    content_type: &'static str,
    extension: &str,
    now: DateTime<Utc>,
) -> Response {
    let filename = format!("akrin-seo-report-{}.{extension}", now.format("%Y-%m-%d"));
    (
        [
            (CONTENT_TYPE, content_type.to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
            (CACHE_CONTROL, "no-cache".to_string()),
        ],
        body,
    )
        .into_response()
}

// ---------------------------------------------------------------------------
// Connection tests
// ---------------------------------------------------------------------------

/// GET /api/seo/test-connection
pub async fn test_connection(
    State(state): State<AppState>,
) -> AppResult<Json<ConnectionResponse<ConnectionData>>> {
    let client = &state.seranking;
    let failed = AppError::seranking;

    let connection = client
        .test_connection()
        .await
        .map_err(failed("SEranking API connection failed"))?;
    let domain_analysis = client
        .domain_analysis(&state.config.seo_domain)
        .await
        .map_err(failed("SEranking API connection failed"))?;
    let sample: Vec<String> = SITE_KEYWORDS.iter().take(5).map(|k| k.to_string()).collect();
    let keyword_research = client
        .keyword_research(&sample, "jp")
        .await
        .map_err(failed("SEranking API connection failed"))?;

    Ok(Json(ConnectionResponse {
        success: true,
        message: "SEranking API connection successful",
        data: ConnectionData {
            connection,
            domain_analysis,
            keyword_research,
            timestamp: Utc::now(),
        },
    }))
}

/// POST /api/seo/test-connection
///
/// Runs each probe independently; a failing call is reported next to the
/// others instead of failing the request.
pub async fn probe_endpoints(
    State(state): State<AppState>,
    Json(request): Json<ProbeRequest>,
) -> AppResult<Json<Value>> {
    let client = &state.seranking;
    if !client.is_configured() {
        return Err(AppError::seranking("SEranking API test failed")(
            SerankingError::NotConfigured,
        ));
    }

    let domain = request
        .domain
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| state.config.seo_domain.clone());
    let source = request.source.unwrap_or_else(|| "jp".to_string());

    let mut results = serde_json::Map::new();
    record_probe(&mut results, "domainAnalysis", client.domain_analysis(&domain).await);
    if !request.keywords.is_empty() {
        record_probe(
            &mut results,
            "keywordResearch",
            client.keyword_research(&request.keywords, &source).await,
        );
    }
    record_probe(&mut results, "backlinkSummary", client.backlinks_summary(&domain).await);

    Ok(Json(json!({
        "success": true,
        "message": "SEranking API tests completed",
        "domain": domain,
        "source": source,
        "keywords": request.keywords,
        "results": results,
        "timestamp": Utc::now(),
    })))
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// GET /api/seo/analyze?type=test
pub async fn analyze_test(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeTestParams>,
) -> AppResult<Json<ConnectionResponse<Value>>> {
    if params.kind.as_deref() != Some("test") {
        return Err(AppError::BadRequest(
            "Invalid request. Use ?type=test to test API connection".to_string(),
        ));
    }

    let data = state
        .seranking
        .test_connection()
        .await
        .map_err(AppError::seranking("Failed to connect to SEranking API"))?;

    Ok(Json(ConnectionResponse {
        success: true,
        message: "SEranking API connection successful",
        data,
    }))
}

/// POST /api/seo/analyze
///
/// `type` selects `domain`, `blog-post`, `all-posts` or `audit`.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> AppResult<Json<Value>> {
    let base_url = request
        .options
        .base_url
        .clone()
        .unwrap_or_else(|| state.config.site_base_url.clone());
    let target = request.target.clone().filter(|t| !t.is_empty());

    match request.kind.as_str() {
        "domain" => {
            let domain = target.unwrap_or_else(|| state.config.seo_domain.clone());
            analyze_domain(&state, &domain).await
        }
        "blog-post" => {
            let slug = target.unwrap_or_default();
            let source = request.options.source.as_deref().unwrap_or("us");
            analyze_post(&state, &slug, source, &base_url).await
        }
        "all-posts" => Ok(Json(analyze_all_posts(&base_url))),
        "audit" => {
            let domain = target.unwrap_or_else(|| state.config.seo_domain.clone());
            let audit_id = state
                .seranking
                .create_audit(&domain)
                .await
                .map_err(AppError::seranking("Website audit creation failed"))?;
            tracing::info!(audit_id, domain = %domain, "Website audit created");

            Ok(Json(json!({
                "success": true,
                "type": "audit",
                "domain": domain,
                "data": {
                    "auditId": audit_id,
                    "message": "Website audit created successfully. Use the audit ID to check status.",
                    "checkStatusUrl": format!("/api/seo/audit/{audit_id}"),
                    "analyzedAt": Utc::now(),
                },
            })))
        }
        _ => Err(AppError::BadRequest(
            "Invalid analysis type. Use: domain, blog-post, all-posts, or audit".to_string(),
        )),
    }
}

async fn analyze_domain(state: &AppState, domain: &str) -> AppResult<Json<Value>> {
    let summary = state
        .seranking
        .backlinks_summary(domain)
        .await
        .map_err(AppError::seranking("Domain analysis failed"))?;

    let now = Utc::now();
    let domain_analysis = summary.domain_analysis(domain);
    let seo_report = DomainReport::from_backlinks(domain, &summary, now);
    let health_score = summary.weighted(2, 5).saturating_add(50).clamp(50, 100);
    let recommendations = domain_recommendations(&domain_analysis, health_score);

    Ok(Json(json!({
        "success": true,
        "type": "domain",
        "domain": domain,
        "data": {
            "domainAnalysis": domain_analysis,
            "backlinkSummary": summary,
            "seoReport": seo_report,
            "healthScore": health_score,
            "realDataUsed": true,
            "analyzedAt": now,
            "recommendations": recommendations,
        },
    })))
}

async fn analyze_post(
    state: &AppState,
    slug: &str,
    source: &str,
    base_url: &str,
) -> AppResult<Json<Value>> {
    let post = find_post(Locale::En, slug).ok_or_else(|| CoreError::NotFound {
        entity: "Blog post",
        key: slug.to_string(),
    })?;

    let seo_analysis = analyze_blog_post(post.into(), base_url);

    let keywords: Vec<String> = std::iter::once(post.title)
        .chain(post.tags.iter().copied())
        .take(5)
        .map(str::to_string)
        .collect();
    let keyword_data = match state.seranking.keyword_research(&keywords, source).await {
        Ok(data) => Some(data),
        Err(e) => {
            tracing::warn!(slug, error = %e, "Keyword research failed");
            None
        }
    };

    Ok(Json(json!({
        "success": true,
        "type": "blog-post",
        "slug": slug,
        "data": {
            "post": {
                "title": post.title,
                "slug": post.slug,
                "category": post.category,
                "tags": post.tags,
                "readTime": post.read_time,
            },
            "seoAnalysis": seo_analysis,
            "keywordData": keyword_data,
            "analyzedAt": Utc::now(),
        },
    })))
}

fn analyze_all_posts(base_url: &str) -> Value {
    let rows: Vec<PostScoreRow> = blog_posts(Locale::En)
        .iter()
        .map(|post| {
            let analysis = analyze_blog_post(post.into(), base_url);
            PostScoreRow {
                slug: post.slug,
                title: post.title,
                score: analysis.score,
                issues: analysis.issues.len(),
                error_count: analysis.count(Severity::Error),
                warning_count: analysis.count(Severity::Warning),
                recommendations: analysis.recommendations.len(),
            }
        })
        .collect();

    let total_posts = rows.len();
    let average_score = if total_posts == 0 {
        0
    } else {
        let sum: u32 = rows.iter().map(|r| r.score).sum();
        (f64::from(sum) / total_posts as f64).round() as u32
    };

    json!({
        "success": true,
        "type": "all-posts",
        "data": {
            "summary": {
                "totalPosts": total_posts,
                "averageScore": average_score,
                "totalIssues": rows.iter().map(|r| r.issues).sum::<usize>(),
                "totalErrors": rows.iter().map(|r| r.error_count).sum::<usize>(),
                "totalWarnings": rows.iter().map(|r| r.warning_count).sum::<usize>(),
            },
            "posts": rows,
            "analyzedAt": Utc::now(),
        },
    })
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

/// GET /api/seo/keywords?domain=&action=tracking|research
pub async fn keywords(
    State(state): State<AppState>,
    Query(params): Query<KeywordParams>,
) -> AppResult<Json<Value>> {
    let domain = params
        .domain
        .clone()
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("Domain parameter is required".to_string()))?;

    match params.action.as_deref() {
        Some("tracking") => {
            let limit = params
                .limit
                .as_deref()
                .and_then(|l| l.trim().parse().ok())
                .unwrap_or(DEFAULT_TRACKING_LIMIT);
            Ok(Json(tracking_with_fallback(&state, &domain, limit).await))
        }
        Some("research") => {
            let keywords: Vec<String> = params
                .keywords
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect();
            if keywords.is_empty() {
                return Err(AppError::BadRequest(
                    "Keywords parameter is required for research".to_string(),
                ));
            }
            let source = params.source.as_deref().unwrap_or("jp");
            Ok(Json(research_with_fallback(&state, keywords, source).await))
        }
        _ => Err(AppError::BadRequest(
            "Invalid action. Use \"tracking\" or \"research\"".to_string(),
        )),
    }
}

/// Tracking rows, else research rows for the site keywords, else the site
/// keywords unranked.
async fn tracking_with_fallback(state: &AppState, domain: &str, limit: u32) -> Value {
    let client = &state.seranking;
    let now = Utc::now();
    let url = format!("https://{domain}");

    match client.keyword_tracking(domain, limit).await {
        Ok(data) => {
            return json!({
                "success": true,
                "data": data,
                "domain": domain,
                "realData": true,
                "analyzedAt": now,
            });
        }
        Err(e) => {
            tracing::warn!(domain, error = %e, "Keyword tracking failed, trying keyword research");
        }
    }

    match client.keyword_research(&site_keywords(), "jp").await {
        Ok(research) => {
            let rows: Vec<KeywordTracking> = research
                .iter()
                .zip(1..)
                .map(|(item, id)| KeywordTracking::from_research(id, item, url.clone(), now))
                .collect();
            json!({
                "success": true,
                "data": rows,
                "domain": domain,
                "realData": false,
                "dataSource": "keyword-research",
                "message": "Showing keyword research data - tracking not available in current plan",
                "analyzedAt": now,
            })
        }
        Err(e) => {
            tracing::warn!(domain, error = %e, "Keyword research failed, using site keyword list");
            let rows: Vec<KeywordTracking> = SITE_KEYWORDS
                .iter()
                .zip(1..)
                .map(|(keyword, id)| KeywordTracking::unranked(id, keyword, url.clone(), now))
                .collect();
            json!({
                "success": true,
                "data": rows,
                "domain": domain,
                "realData": false,
                "dataSource": "fallback",
                "message": "Showing site keyword list - keyword data not available",
                "analyzedAt": now,
            })
        }
    }
}

async fn research_with_fallback(state: &AppState, keywords: Vec<String>, source: &str) -> Value {
    match state.seranking.keyword_research(&keywords, source).await {
        Ok(data) => json!({
            "success": true,
            "data": data,
            "keywords": keywords,
            "source": source,
            "realData": true,
            "analyzedAt": Utc::now(),
        }),
        Err(e) => {
            tracing::warn!(error = %e, "Keyword research failed, returning empty rows");
            let data: Vec<KeywordResearch> =
                keywords.iter().map(|k| empty_research(k)).collect();
            json!({
                "success": true,
                "data": data,
                "keywords": keywords,
                "source": source,
                "realData": false,
                "fallbackReason": "Keyword research not available",
                "analyzedAt": Utc::now(),
            })
        }
    }
}

/// POST /api/seo/keywords
///
/// `action` selects `add-tracking`, `competitor-analysis` or `common-keywords`.
pub async fn keyword_operation(
    State(state): State<AppState>,
    Json(request): Json<KeywordOperation>,
) -> AppResult<Json<Value>> {
    let domain = request
        .domain
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::BadRequest("Domain is required".to_string()))?;
    let client = &state.seranking;
    let source = request.source;
    let failed = AppError::seranking("Keyword operation failed");

    match request.action.as_deref() {
        Some("add-tracking") => {
            let keywords = request.keywords.ok_or_else(|| {
                AppError::BadRequest("Keywords array is required for tracking".to_string())
            })?;
            let tracking_ids = client
                .add_keyword_tracking(&domain, &keywords, &source)
                .await
                .map_err(failed)?;
            tracing::info!(domain = %domain, count = tracking_ids.len(), "Keyword tracking added");

            Ok(Json(json!({
                "success": true,
                "data": {
                    "trackingIds": tracking_ids,
                    "domain": domain,
                    "keywords": keywords,
                    "source": source,
                },
                "message": "Keyword tracking added successfully",
            })))
        }
        Some("competitor-analysis") => {
            let competitors = request.competitors.ok_or_else(|| {
                AppError::BadRequest("Competitors array is required for analysis".to_string())
            })?;
            let data = client
                .competitor_analysis(&domain, &competitors, &source)
                .await
                .map_err(failed)?;

            Ok(Json(json!({
                "success": true,
                "data": data,
                "domain": domain,
                "competitors": competitors,
                "analyzedAt": Utc::now(),
            })))
        }
        Some("common-keywords") => {
            let competitor = request
                .competitor
                .filter(|c| !c.is_empty())
                .ok_or_else(|| AppError::BadRequest("Competitor domain is required".to_string()))?;
            let data = client
                .common_keywords(&domain, &competitor, &source)
                .await
                .map_err(failed)?;

            Ok(Json(json!({
                "success": true,
                "data": data,
                "domain": domain,
                "competitor": competitor,
                "source": source,
                "analyzedAt": Utc::now(),
            })))
        }
        _ => Err(AppError::BadRequest(
            "Invalid action. Use \"add-tracking\", \"competitor-analysis\", or \"common-keywords\""
                .to_string(),
        )),
    }
}

// ---------------------------------------------------------------------------
// Audits
// ---------------------------------------------------------------------------

/// GET /api/seo/audit/{id}?domain=
pub async fn audit_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<AuditParams>,
) -> AppResult<Json<Value>> {
    let audit_id: u64 = id
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid audit ID".to_string()))?;

    let domain = params.domain.as_deref().filter(|d| !d.is_empty());
    let status = state
        .seranking
        .audit_status(audit_id, domain)
        .await
        .map_err(AppError::seranking("Failed to get audit status"))?;

    let report = if status.is_finished() {
        match state.seranking.audit_report(audit_id).await {
            Ok(report) => Some(report),
            Err(e) => {
                tracing::warn!(audit_id, error = %e, "Failed to get audit report");
                None
            }
        }
    } else {
        None
    };

    Ok(Json(json!({
        "success": true,
        "auditId": audit_id,
        "data": {
            "status": status,
            "report": report,
            "retrievedAt": Utc::now(),
        },
    })))
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// GET /api/seo/report?format=json|markdown&includeDomainAnalysis=&baseUrl=
///
/// Served as a download in either format.
pub async fn download_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<Response> {
    let format = params.format.as_deref().unwrap_or("json");
    if !matches!(format, "json" | "markdown") {
        return Err(AppError::BadRequest(
            "Invalid format. Use json or markdown".to_string(),
        ));
    }
    let include_domain = params.include_domain_analysis.as_deref() != Some("false");

    let report = generate(&state, include_domain, params.base_url).await;
    tracing::info!(format, score = report.summary.overall_score, "SEO report generated");

    let now = report.generated_at;
    if format == "markdown" {
        return Ok(attachment(render_report_markdown(&report), "text/markdown", "md", now));
    }
    let body = serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::InternalError(format!("Report serialization failed: {e}")))?;
    Ok(attachment(body, "application/json", "json", now))
}

/// POST /api/seo/report
///
/// Markdown is returned as a download; any other format as JSON.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Response {
    let report = generate(&state, request.include_domain_analysis, request.base_url).await;
    tracing::info!(score = report.summary.overall_score, "SEO report generated");

    if request.format.as_deref() == Some("markdown") {
        let now = report.generated_at;
        return attachment(render_report_markdown(&report), "text/markdown", "md", now);
    }

    Json(json!({
        "success": true,
        "generatedAt": report.generated_at,
        "report": report,
    }))
    .into_response()
}
