//! URL hygiene and locale tagging for page requests.
//!
//! - `/ja/ja/...` is redirected (301) to `/ja/...`.
//! - A non-root path ending in `/` is redirected (301) without it.
//! - Everything else passes through with an `x-akrin-lang` response header.
//!
//! API routes, `/health` and file-like paths (last segment contains a dot,
//! e.g. `sitemap.xml`) are left untouched.

use axum::extract::Request;
use axum::http::header::LOCATION;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use akrin_core::locale::Locale;

/// Response header carrying the inferred page locale.
pub const LANG_HEADER: HeaderName = HeaderName::from_static("x-akrin-lang");

const DOUBLE_JA_PREFIX: &str = "/ja/ja/";

fn is_exempt(path: &str) -> bool {
    path == "/api"
        || path.starts_with("/api/")
        || path == "/health"
        || path.starts_with("/_next/")
        || path
            .rsplit('/')
            .next()
            .is_some_and(|segment| segment.contains('.'))
}

/// Where a page path should be redirected, if anywhere.
///
/// Targets always start with exactly one `/`, so `Location` never names
/// another host.
pub fn redirect_target(path: &str) -> Option<String> {
    if let Some(rest) = path.strip_prefix(DOUBLE_JA_PREFIX) {
        return Some(format!("/ja/{rest}"));
    }
    if path != "/" && path.ends_with('/') {
        return Some(same_origin(&path[..path.len() - 1]));
    }
    None
}

/// Collapse leading slashes and backslashes into a single `/`.
fn same_origin(path: &str) -> String {
    format!("/{}", path.trim_start_matches(['/', '\\']))
}

pub async fn locale_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if is_exempt(&path) {
        return next.run(request).await;
    }

    if let Some(mut target) = redirect_target(&path) {
        if let Some(query) = request.uri().query() {
            target.push('?');
            target.push_str(query);
        }
        tracing::debug!(from = %path, to = %target, "Permanent redirect");
        return (StatusCode::MOVED_PERMANENTLY, [(LOCATION, target)]).into_response();
    }

    let locale = Locale::from_path(&path);
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(LANG_HEADER, HeaderValue::from_static(locale.as_str()));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_prefix_collapses() {
        assert_eq!(redirect_target("/ja/ja/services").as_deref(), Some("/ja/services"));
        assert_eq!(redirect_target("/ja/ja/").as_deref(), Some("/ja/"));
    }

    #[test]
    fn trailing_slash_is_removed_except_root() {
        assert_eq!(redirect_target("/about/").as_deref(), Some("/about"));
        assert_eq!(redirect_target("/"), None);
        assert_eq!(redirect_target("/ja"), None);
    }

    #[test]
    fn redirects_never_leave_the_site() {
        assert_eq!(redirect_target("//evil.example/").as_deref(), Some("/evil.example"));
        assert_eq!(redirect_target("///evil.example/x/").as_deref(), Some("/evil.example/x"));
        assert_eq!(redirect_target("/\\evil.example/").as_deref(), Some("/evil.example"));
        assert_eq!(redirect_target("//").as_deref(), Some("/"));
    }

    #[test]
    fn exempt_paths() {
        assert!(is_exempt("/api/contact"));
        assert!(is_exempt("/health"));
        assert!(is_exempt("/sitemap.xml"));
        assert!(is_exempt("/images/logo.webp"));
        assert!(!is_exempt("/apis"));
        assert!(!is_exempt("/ja/services"));
    }
}
