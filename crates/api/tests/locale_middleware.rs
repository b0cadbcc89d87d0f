//! Integration tests for the locale redirects and `x-akrin-lang` tagging.

mod common;

use axum::http::header::LOCATION;
use axum::http::StatusCode;
use common::get;

#[tokio::test]
async fn double_japanese_prefix_redirects_permanently() {
    let response = get(common::build_test_app(), "/ja/ja/services?ref=nav").await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[LOCATION], "/ja/services?ref=nav");
}

#[tokio::test]
async fn trailing_slash_redirects_permanently() {
    let response = get(common::build_test_app(), "/about/").await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[LOCATION], "/about");
}

#[tokio::test]
async fn trailing_slash_redirect_stays_on_site() {
    let response = get(common::build_test_app(), "//evil.example/?q=1").await;

    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()[LOCATION], "/evil.example?q=1");
}

#[tokio::test]
async fn page_paths_are_tagged_with_their_locale() {
    let ja = get(common::build_test_app(), "/ja/services").await;
    assert_eq!(ja.headers()["x-akrin-lang"], "ja");

    let en = get(common::build_test_app(), "/services").await;
    assert_eq!(en.headers()["x-akrin-lang"], "en");

    // A path that merely starts with "ja" is English.
    let jazz = get(common::build_test_app(), "/jazz").await;
    assert_eq!(jazz.headers()["x-akrin-lang"], "en");
}

#[tokio::test]
async fn api_paths_are_left_alone() {
    let response = get(common::build_test_app(), "/api/blog/").await;

    assert_ne!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert!(response.headers().get("x-akrin-lang").is_none());
}
