use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use chrono::Utc;

use akrin_core::robots::Robots;
use akrin_core::sitemap::{build_sitemap, render_sitemap_xml};

use crate::state::AppState;

const CRAWLER_CACHE: &str = "public, max-age=3600";

/// GET /sitemap.xml
pub async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let entries = build_sitemap(&state.config.site_base_url, Utc::now());
    tracing::debug!(entries = entries.len(), "Rendering sitemap");

    (
        [
            (CONTENT_TYPE, "application/xml; charset=utf-8"),
            (CACHE_CONTROL, CRAWLER_CACHE),
        ],
        render_sitemap_xml(&entries),
    )
}

/// GET /robots.txt
pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8"),
            (CACHE_CONTROL, CRAWLER_CACHE),
        ],
        Robots::new(&state.config.site_base_url).render(),
    )
}
