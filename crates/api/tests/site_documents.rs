//! Integration tests for `/sitemap.xml` and `/robots.txt`.

mod common;

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use common::{body_text, get};

#[tokio::test]
async fn sitemap_lists_pages_with_alternates() {
    let response = get(common::build_test_app(), "/sitemap.xml").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CONTENT_TYPE],
        "application/xml; charset=utf-8"
    );
    assert_eq!(response.headers()[CACHE_CONTROL], "public, max-age=3600");

    let xml = body_text(response).await;
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<loc>https://akrin.jp/services</loc>"));
    assert!(xml.contains("<loc>https://akrin.jp/ja/services</loc>"));
    assert!(xml.contains(
        "<xhtml:link rel=\"alternate\" hreflang=\"ja\" href=\"https://akrin.jp/ja/services\"/>"
    ));
    assert!(xml.contains(
        "<xhtml:link rel=\"alternate\" hreflang=\"x-default\" href=\"https://akrin.jp/services\"/>"
    ));
    assert!(xml.trim_end().ends_with("</urlset>"));
}

#[tokio::test]
async fn sitemap_is_not_tagged_with_a_locale() {
    let response = get(common::build_test_app(), "/sitemap.xml").await;
    assert!(response.headers().get("x-akrin-lang").is_none());
}

#[tokio::test]
async fn robots_points_at_sitemap() {
    let response = get(common::build_test_app(), "/robots.txt").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");

    let text = body_text(response).await;
    assert!(text.contains("Disallow: /api/*\n"));
    assert!(text.ends_with("Host: https://akrin.jp\nSitemap: https://akrin.jp/sitemap.xml\n"));
}
