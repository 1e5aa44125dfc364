//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Pages the web layer serves out of the frontend directory.
pub const PAGE_FILES: [&str; 3] = ["index.html", "students.html", "add_student.html"];

/// Warn on a missing frontend directory or page; create the data directory
/// when one is needed by the configured storage backend.
pub async fn ensure_env(frontend_dir: &str, data_dir: Option<&Path>) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend directory not found; pages will 404");
    } else {
        for page in PAGE_FILES {
            let path = Path::new(frontend_dir).join(page);
            if tokio::fs::metadata(&path).await.is_err() {
                warn!(page = %path.display(), "page file missing");
            }
        }
    }
    if let Some(dir) = data_dir {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_data_dir() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("ensure_env_{}", std::process::id()));
        let data = root.join("nested/data");
        ensure_env("/nonexistent-frontend", Some(&data)).await?;
        assert!(tokio::fs::metadata(&data).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }
}
