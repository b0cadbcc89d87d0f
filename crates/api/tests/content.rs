//! Integration tests for alternates, page metadata, blog and case-study routes.

mod common;

use axum::http::header::CACHE_CONTROL;
use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Alternates and metadata
// ---------------------------------------------------------------------------

#[tokio::test]
async fn alternates_normalize_the_requested_path() {
    let response = get(common::build_test_app(), "/api/alternates?path=/services/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["path"], "/services");
    assert_eq!(data["locale"], "en");
    assert_eq!(data["alternates"]["en"], "/services");
    assert_eq!(data["alternates"]["ja"], "/ja/services");

    let hreflang = data["hreflang"].as_array().unwrap();
    assert_eq!(hreflang.len(), 3);
    assert_eq!(hreflang[2]["hreflang"], "x-default");
    assert_eq!(hreflang[2]["href"], "https://akrin.jp/services");
}

#[tokio::test]
async fn alternates_for_unmapped_path_are_null() {
    let response = get(common::build_test_app(), "/api/alternates?path=/not-a-page").await;

    let json = body_json(response).await;
    assert!(json["data"]["alternates"].is_null());
    assert!(json["data"]["hreflang"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn page_metadata_for_japanese_path() {
    let response = get(common::build_test_app(), "/api/page-metadata?path=/ja/services").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["lang"], "ja");
    assert_eq!(data["canonical"], "https://akrin.jp/ja/services");
    assert_eq!(data["languages"]["x-default"], "https://akrin.jp/services");
    assert_eq!(data["openGraph"]["locale"], "ja_JP");
    assert_eq!(data["openGraph"]["alternateLocale"], "en_US");
    assert!(!data["title"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn page_metadata_clamps_long_titles() {
    let title = "A".repeat(100);
    let uri = format!("/api/page-metadata?path=/contact&title={title}");
    let json = body_json(get(common::build_test_app(), &uri).await).await;

    assert_eq!(json["data"]["title"].as_str().unwrap().chars().count(), 65);
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blog_list_returns_summaries_for_locale() {
    let json = body_json(get(common::build_test_app(), "/api/blog?locale=ja").await).await;

    let posts = json["data"].as_array().unwrap();
    assert!(!posts.is_empty());
    assert!(posts.iter().all(|p| p.get("content").is_none()));
    assert!(posts
        .iter()
        .any(|p| p["slug"] == "future-of-it-infrastructure-japan"));
}

#[tokio::test]
async fn blog_post_by_slug() {
    let response = get(
        common::build_test_app(),
        "/api/blog/future-of-it-infrastructure-japan",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "future-of-it-infrastructure-japan");
    assert!(json["data"]["content"].as_str().unwrap().len() > 100);
}

#[tokio::test]
async fn missing_blog_post_returns_404() {
    let response = get(common::build_test_app(), "/api/blog/no-such-post").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Blog post 'no-such-post' not found");
}

// ---------------------------------------------------------------------------
// Case studies
// ---------------------------------------------------------------------------

fn write_mdx(dir: &std::path::Path, name: &str, title: &str, slug: &str, date: &str) {
    let body = format!("---\ntitle: \"{title}\"\nslug: {slug}\ndate: {date}\n---\n\nBody.\n");
    std::fs::write(dir.join(name), body).unwrap();
}

#[tokio::test]
async fn case_study_listing_reads_frontmatter_newest_first() {
    let en = tempfile::tempdir().unwrap();
    let ja = tempfile::tempdir().unwrap();
    write_mdx(en.path(), "a.mdx", "Older", "older-study", "2024-01-10");
    write_mdx(en.path(), "b.mdx", "Newer", "newer-study", "2025-02-01");
    write_mdx(en.path(), "c.mdx", "Hidden", "sdwan-retail-40-sites", "2025-06-01");
    write_mdx(ja.path(), "a.mdx", "古い事例", "older-study", "2024-01-10");

    let mut config = common::test_config();
    config.case_studies_en_dir = en.path().to_path_buf();
    config.case_studies_ja_dir = ja.path().to_path_buf();

    let response = get(
        common::build_test_app_with(config.clone(), None),
        "/api/case-studies?locale=en",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[CACHE_CONTROL],
        "public, s-maxage=300, stale-while-revalidate=300"
    );
    let json = body_json(response).await;
    let slugs: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(slugs, ["newer-study", "older-study"]);

    let limited = body_json(
        get(
            common::build_test_app_with(config.clone(), None),
            "/api/case-studies?locale=en&limit=1",
        )
        .await,
    )
    .await;
    assert_eq!(limited["data"].as_array().unwrap().len(), 1);

    let japanese = body_json(
        get(
            common::build_test_app_with(config, None),
            "/api/case-studies?locale=ja&limit=abc",
        )
        .await,
    )
    .await;
    let items = japanese["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["locale"], "ja");
}

#[tokio::test]
async fn case_study_listing_with_missing_directories_is_empty() {
    let json = body_json(get(common::build_test_app(), "/api/case-studies").await).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn case_study_detail_is_localized() {
    let response = get(
        common::build_test_app(),
        "/api/case-studies/cloud-migration-manufacturing?locale=ja",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["locale"], "ja");
    assert_eq!(data["title"], "製造業 クラウド移行（関東・大阪）");
    assert_eq!(
        data["hero"],
        "/images/case-studies/cloud-migration-manufacturing/cloud-migration.avif"
    );
    assert_eq!(
        data["alternates"]["ja"],
        "/ja/case-studies/cloud-migration-manufacturing"
    );
}

#[tokio::test]
async fn unknown_case_study_returns_404() {
    let response = get(common::build_test_app(), "/api/case-studies/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
