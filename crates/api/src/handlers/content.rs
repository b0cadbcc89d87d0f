//! Handlers for locale alternates, page metadata and static content.

use axum::extract::{Path, Query, State};
use axum::http::header::CACHE_CONTROL;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use akrin_core::content::{blog_posts, case_study_hero, find_case_study, find_post, BlogPost};
use akrin_core::error::CoreError;
use akrin_core::frontmatter::{list_mdx_frontmatters, select_case_studies};
use akrin_core::locale::Locale;
use akrin_core::metadata::PageMetadata;
use akrin_core::route_map::{
    alternates_for_path, hreflang_links, normalize_path, HreflangLink, LocalizedPair,
};
use akrin_core::site::{site_page, SITE_NAME};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const CASE_STUDIES_CACHE: &str = "public, s-maxage=300, stale-while-revalidate=300";

#[derive(Debug, Deserialize)]
pub struct PathParams {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocaleParams {
    #[serde(default)]
    pub locale: Option<String>,
    /// Kept as text so a malformed value is ignored instead of rejected.
    #[serde(default)]
    pub limit: Option<String>,
}

impl LocaleParams {
    /// Requested locale; anything other than `ja` means English.
    fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .and_then(Locale::parse)
            .unwrap_or_default()
    }

    fn limit(&self) -> Option<usize> {
        let limit: i64 = self.limit.as_deref()?.trim().parse().ok()?;
        Some(limit.max(0) as usize)
    }
}

#[derive(Debug, Serialize)]
pub struct AlternatesView {
    pub path: String,
    pub locale: Locale,
    pub alternates: Option<&'static LocalizedPair>,
    pub hreflang: Vec<HreflangLink>,
}

/// List entry for a blog post; the full body is served by `get_post`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

impl From<&'static BlogPost> for BlogSummary {
    fn from(post: &'static BlogPost) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            image: post.image,
            author: post.author,
            date: post.date,
            read_time: post.read_time,
            category: post.category,
            tags: post.tags,
        }
    }
}

/// GET /api/alternates?path=
pub async fn alternates(
    State(state): State<AppState>,
    Query(params): Query<PathParams>,
) -> Json<DataResponse<AlternatesView>> {
    let path = normalize_path(params.path.as_deref().unwrap_or("/"));

    Json(DataResponse {
        data: AlternatesView {
            locale: Locale::from_path(&path),
            alternates: alternates_for_path(&path),
            hreflang: hreflang_links(&path, &state.config.site_base_url),
            path,
        },
    })
}

/// GET /api/page-metadata?path=&title=&description=
///
/// Title and description default to the page's configured SEO copy when the
/// English counterpart of the path is a known page.
pub async fn page_metadata(
    State(state): State<AppState>,
    Query(params): Query<PathParams>,
) -> Json<DataResponse<PageMetadata>> {
    let path = normalize_path(params.path.as_deref().unwrap_or("/"));
    let english = alternates_for_path(&path).map_or(path.as_str(), |pair| pair.en.as_str());
    let page = site_page(english);

    let title = params
        .title
        .as_deref()
        .or(page.map(|p| p.title))
        .unwrap_or(SITE_NAME);
    let description = params
        .description
        .as_deref()
        .or(page.map(|p| p.description))
        .unwrap_or_default();

    Json(DataResponse {
        data: PageMetadata::for_path(&path, title, description, &state.config.site_base_url),
    })
}

/// GET /api/blog?locale=
pub async fn list_posts(Query(params): Query<LocaleParams>) -> Json<DataResponse<Vec<BlogSummary>>> {
    let posts = blog_posts(params.locale())
        .iter()
        .map(BlogSummary::from)
        .collect();

    Json(DataResponse { data: posts })
}

/// GET /api/blog/{slug}?locale=
pub async fn get_post(
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<&'static BlogPost>>> {
    let post = find_post(params.locale(), &slug).ok_or(CoreError::NotFound {
        entity: "Blog post",
        key: slug,
    })?;

    Ok(Json(DataResponse { data: post }))
}

#[derive(Debug, Serialize)]
pub struct CaseStudyView {
    pub id: &'static str,
    pub slug: &'static str,
    pub locale: Locale,
    pub title: &'static str,
    pub hero: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<&'static [&'static str]>,
    pub alternates: Option<&'static LocalizedPair>,
}

/// GET /api/case-studies/{slug}?locale=
pub async fn get_case_study(
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> AppResult<Json<DataResponse<CaseStudyView>>> {
    let study = find_case_study(&slug).ok_or(CoreError::NotFound {
        entity: "Case study",
        key: slug,
    })?;
    let locale = params.locale();
    let path = format!("/case-studies/{}", study.slug);

    Ok(Json(DataResponse {
        data: CaseStudyView {
            id: study.id,
            slug: study.slug,
            locale,
            title: study.title(locale),
            hero: case_study_hero(study.slug),
            metrics: study.metrics,
            alternates: alternates_for_path(&path),
        },
    }))
}

/// GET /api/case-studies?locale=&limit=
///
/// Reads the frontmatter of both MDX directories, keeps the requested
/// locale and returns the newest first.
pub async fn list_case_studies(
    State(state): State<AppState>,
    Query(params): Query<LocaleParams>,
) -> AppResult<impl IntoResponse> {
    let en_dir = state.config.case_studies_en_dir.clone();
    let ja_dir = state.config.case_studies_ja_dir.clone();

    let all = tokio::task::spawn_blocking(move || {
        let mut items = list_mdx_frontmatters(&en_dir, Locale::En);
        items.extend(list_mdx_frontmatters(&ja_dir, Locale::Ja));
        items
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Case study listing failed: {e}")))?;

    let selected = select_case_studies(all, params.locale(), params.limit());

    Ok((
        [(CACHE_CONTROL, CASE_STUDIES_CACHE)],
        Json(DataResponse { data: selected }),
    ))
}
