use std::future::Future;
use std::io;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api;

pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api::router()).layer(cors)
}

pub async fn run(addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app())
        .with_graceful_shutdown(wait_for_shutdown(tokio::signal::ctrl_c()))
        .await
        .context("Web server failed")
}

/// Resolve once `signal` fires. If the handler cannot be installed the server
/// keeps running until the process is killed.
async fn wait_for_shutdown(signal: impl Future<Output = io::Result<()>>) {
    match signal.await {
        Ok(()) => tracing::info!("Shutting down web server"),
        Err(e) => {
            tracing::error!("Failed to listen for ctrl-c, graceful shutdown disabled: {e}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_api_is_nested() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/categories")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app()
            .oneshot(Request::builder().uri("/categories").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_shutdown_waits_for_signal() {
        wait_for_shutdown(async { Ok::<(), io::Error>(()) }).await;

        let broken = wait_for_shutdown(async { Err::<(), _>(io::Error::other("no handler")) });
        let waited = tokio::time::timeout(Duration::from_millis(50), broken).await;
        assert!(waited.is_err(), "server must not stop when the handler fails");
    }
}
