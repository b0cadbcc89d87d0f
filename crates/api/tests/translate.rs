//! Integration tests for `POST /api/translate`.

mod common;

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Form, Json, Router};
use common::{body_json, post_json};
use serde_json::json;

/// DeepL stub that prefixes the target language onto the text.
async fn spawn_deepl_stub() -> String {
    let router = Router::new().route(
        "/v2/translate",
        post(|Form(form): Form<HashMap<String, String>>| async move {
            if form.get("auth_key").map(String::as_str) != Some("test-key") {
                return (StatusCode::FORBIDDEN, "Wrong auth key").into_response();
            }
            let text = format!(
                "[{}] {}",
                form.get("target_lang").cloned().unwrap_or_default(),
                form.get("text").cloned().unwrap_or_default()
            );
            Json(json!({
                "translations": [{ "text": text, "detected_source_language": "EN" }]
            }))
            .into_response()
        }),
    );
    common::spawn_stub(router).await
}

fn deepl_config(base: &str, key: &str) -> akrin_api::config::ServerConfig {
    let mut config = common::test_config();
    config.deepl_api_key = Some(key.to_string());
    config.deepl_api_url = format!("{base}/v2/translate");
    config
}

#[tokio::test]
async fn translate_returns_text_and_detected_language() {
    let stub = spawn_deepl_stub().await;
    let app = common::build_test_app_with(deepl_config(&stub, "test-key"), None);

    let response = post_json(
        app,
        "/api/translate",
        json!({ "text": "Hello", "targetLang": "ja" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["translatedText"], "[JA] Hello");
    assert_eq!(json["detectedSourceLang"], "EN");
}

#[tokio::test]
async fn translate_without_key_is_not_configured() {
    let response = post_json(
        common::build_test_app(),
        "/api/translate",
        json!({ "text": "Hello", "targetLang": "ja" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_CONFIGURED");
    assert_eq!(json["error"], "DeepL API key not configured");
}

#[tokio::test]
async fn translate_requires_text_and_target() {
    let response = post_json(
        common::build_test_app(),
        "/api/translate",
        json!({ "text": "Hello" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Missing required fields");
}

#[tokio::test]
async fn upstream_rejection_is_reported_as_translation_failure() {
    let stub = spawn_deepl_stub().await;
    let app = common::build_test_app_with(deepl_config(&stub, "wrong-key"), None);

    let response = post_json(
        app,
        "/api/translate",
        json!({ "text": "Hello", "targetLang": "ja" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPSTREAM_ERROR");
    assert_eq!(json["error"], "Translation failed");
}
