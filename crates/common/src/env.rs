//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the router is built.

use tracing::{info, warn};

/// Check that the pre-built frontend directory is present.
///
/// A missing directory is not fatal: the JSON API still works, only the
/// static pages will 404. Returns whether the directory was found.
pub async fn ensure_env(static_dir: &str) -> anyhow::Result<bool> {
    match tokio::fs::metadata(static_dir).await {
        Ok(meta) if meta.is_dir() => {
            info!(%static_dir, "serving frontend assets");
            Ok(true)
        }
        Ok(_) => Err(anyhow::anyhow!("{static_dir} exists but is not a directory")),
        Err(_) => {
            warn!(%static_dir, "frontend assets directory not found; static pages will 404");
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_dir_is_not_fatal() {
        let found = ensure_env("/definitely/not/here/frontend").await.unwrap();
        assert!(!found);
    }

    #[tokio::test]
    async fn existing_dir_is_found() {
        let dir = std::env::temp_dir();
        let found = ensure_env(dir.to_str().unwrap()).await.unwrap();
        assert!(found);
    }
}
