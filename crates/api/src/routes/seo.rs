//! SEO admin routes, mounted at `/api/seo`.

use axum::routing::get;
use axum::Router;

use crate::handlers::seo;
use crate::state::AppState;

/// ```text
/// GET  /test-connection   -> test_connection
/// POST /test-connection   -> probe_endpoints
/// GET  /analyze           -> analyze_test
/// POST /analyze           -> analyze
/// GET  /keywords          -> keywords
/// POST /keywords          -> keyword_operation
/// GET  /audit/{id}        -> audit_status
/// GET  /report            -> download_report
/// POST /report            -> generate_report
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/test-connection",
            get(seo::test_connection).post(seo::probe_endpoints),
        )
        .route("/analyze", get(seo::analyze_test).post(seo::analyze))
        .route("/keywords", get(seo::keywords).post(seo::keyword_operation))
        .route("/audit/{id}", get(seo::audit_status))
        .route("/report", get(seo::download_report).post(seo::generate_report))
}
