//! Shared helpers for API integration tests.
//!
//! Requests go through [`build_app_router`] so every test runs against the
//! same middleware stack as production. Third-party services are replaced by
//! small axum stubs served on ephemeral local ports.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

use akrin_api::config::ServerConfig;
use akrin_api::router::build_app_router;
use akrin_api::state::AppState;
use akrin_mail::{EmailError, Mailer, OutgoingEmail};

/// Build a test `ServerConfig` with every integration disabled.
///
/// Case-study directories point at a path that does not exist, so listings
/// are empty unless a test overrides them.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        site_base_url: "https://akrin.jp".to_string(),
        sales_email: "sales@akrin.test".to_string(),
        business_email: "leads@akrin.test".to_string(),
        calendly_link: "https://calendly.com/akrin-test".to_string(),
        recaptcha_secret: None,
        recaptcha_verify_url: "http://127.0.0.1:9/siteverify".to_string(),
        deepl_api_key: None,
        deepl_api_url: "http://127.0.0.1:9/v2/translate".to_string(),
        seranking_api_key: None,
        seranking_api_base_url: "http://127.0.0.1:9".to_string(),
        seo_domain: "akrin.jp".to_string(),
        case_studies_en_dir: PathBuf::from("/nonexistent/en"),
        case_studies_ja_dir: PathBuf::from("/nonexistent/ja"),
    }
}

/// Build the full application router for `config` and an optional mailer.
pub fn build_test_app_with(config: ServerConfig, mailer: Option<Arc<dyn Mailer>>) -> Router {
    let state = AppState::new(config.clone(), mailer);
    build_app_router(state, &config)
}

/// Build the full application router with the default test configuration.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config(), None)
}

// ---------------------------------------------------------------------------
// Mailer double
// ---------------------------------------------------------------------------

/// Records every message instead of delivering it.
#[derive(Default, Clone)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), EmailError> {
        self.sent.lock().unwrap().push(email);
        Ok(())
    }
}

/// Fails every delivery.
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<(), EmailError> {
        Err(EmailError::Build("relay unavailable".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve `router` on `127.0.0.1:0` and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to get local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server failed");
    });
    format!("http://{addr}")
}
