//! Read-only content and locale routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// ```text
/// GET /alternates            -> alternates
/// GET /page-metadata         -> page_metadata
/// GET /blog                  -> list_posts
/// GET /blog/{slug}           -> get_post
/// GET /case-studies          -> list_case_studies
/// GET /case-studies/{slug}   -> get_case_study
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/alternates", get(content::alternates))
        .route("/page-metadata", get(content::page_metadata))
        .route("/blog", get(content::list_posts))
        .route("/blog/{slug}", get(content::get_post))
        .route("/case-studies", get(content::list_case_studies))
        .route("/case-studies/{slug}", get(content::get_case_study))
}
