pub mod content;
pub mod forms;
pub mod health;
pub mod seo;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /contact                       contact form (POST)
/// /book-reservation              consultation booking (POST)
/// /leads                         lead capture (POST)
/// /schedule                      scheduling tracking (POST)
/// /translate                     DeepL translation (POST)
///
/// /alternates                    EN/JA alternates for a path
/// /page-metadata                 canonical, hreflang and Open Graph metadata
/// /blog                          blog post summaries
/// /blog/{slug}                   one blog post
/// /case-studies                  case-study frontmatter listing
/// /case-studies/{slug}           one case study with its hero image
///
/// /seo/test-connection           SEranking connection test (GET, POST)
/// /seo/analyze                   connection test (GET), analysis (POST)
/// /seo/keywords                  tracking/research (GET), operations (POST)
/// /seo/audit/{id}                audit status and report
/// /seo/report                    aggregated SEO report (GET, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(forms::router())
        .merge(content::router())
        .nest("/seo", seo::router())
}
