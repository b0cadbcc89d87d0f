//! Shared helpers for client integration tests.
//!
//! Each test serves a small axum router on an ephemeral local port and
//! points the client under test at it.

use axum::Router;
use tokio::net::TcpListener;

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
