//! Lightweight admin HTTP listener
//!
//! Exposes `/healthz` and `/metrics`, with the metrics text provided by the caller.

use axum::http::StatusCode;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

async fn healthz() -> &'static str {
    "OK"
}

/// Build the admin router without binding it; handy for in-process tests.
pub fn admin_router(metrics_fn: fn() -> (StatusCode, String)) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(move || async move { metrics_fn() }))
}

/// Bind `addr` and serve the admin router on the current runtime.
///
/// Binding happens before the task is spawned so a bad address fails startup
/// instead of disappearing into a background task.
pub async fn spawn_admin_server(
    addr: &str,
    metrics_fn: fn() -> (StatusCode, String),
) -> anyhow::Result<JoinHandle<()>> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("cannot bind admin listener on {addr}: {e}"))?;
    let local = listener.local_addr()?;
    info!(addr = %local, "admin server listening");
    let router = admin_router(metrics_fn);
    Ok(tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            error!(error = %e, "admin server stopped");
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn fake_metrics() -> (StatusCode, String) {
        (StatusCode::OK, "site_up 1\n".to_string())
    }

    #[tokio::test]
    async fn serves_healthz_and_metrics() {
        let router = admin_router(fake_metrics);

        let res = router
            .clone()
            .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = router.oneshot(Request::get("/metrics").body(Body::empty()).unwrap()).await.unwrap();
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"site_up 1\n");
    }

    #[tokio::test]
    async fn bad_address_fails_fast() {
        assert!(spawn_admin_server("not-an-address", fake_metrics).await.is_err());
    }
}
