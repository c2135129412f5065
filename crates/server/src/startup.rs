use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::storage::{MemStorage, Storage};

use crate::errors::StartupError;
use crate::metrics;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind `host:port`; the host may be a name such as `localhost`.
async fn bind_listener(addr: &str) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Runtime(format!("bind {addr}: {e}")))
}

/// Build the app from a validated config and serve until `shutdown` resolves.
pub async fn run_until<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let has_frontend = common::env::ensure_env(&cfg.server.static_dir).await?;

    metrics::init();
    if let Some(addr) = &cfg.admin.addr {
        let _admin = common::admin_http::spawn_admin_server(addr, metrics::render).await?;
    }

    // 进程内唯一的存储实例，启动时完成服务目录初始化
    let store: Arc<dyn Storage> = Arc::new(MemStorage::new());
    let state = AppState::new(store, cfg.business.clone());

    let static_dir = has_frontend.then_some(cfg.server.static_dir.as_str());
    let app: Router = routes::build_router(state, build_cors(), static_dir);

    let listener = bind_listener(&cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, whatsapp_phone = %cfg.business.whatsapp_phone, "site server listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("site server stopped");
    Ok(())
}

/// Public entry: serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_until(cfg, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn binds_host_names() {
        let listener = bind_listener("localhost:0").await.expect("localhost resolves");
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn serves_on_localhost_until_shutdown() -> anyhow::Result<()> {
        let mut cfg = configs::load_from_str(
            r#"
[server]
host = "localhost"
port = 0
static_dir = "./no-frontend-here"

[business]
whatsapp_phone = "26771234567"
"#,
        )?;
        cfg.admin.addr = None;
        run_until(cfg, async {}).await
    }
}
