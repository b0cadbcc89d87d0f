//! Crawler-facing documents served at the site root.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// ```text
/// GET /sitemap.xml   -> sitemap
/// GET /robots.txt    -> robots
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sitemap.xml", get(site::sitemap))
        .route("/robots.txt", get(site::robots))
}
