//! Filesystem bootstrap helpers
//!
//! Make sure the directories a deployment writes into exist before anything
//! tries to open files there.

use std::path::Path;

use tracing::{debug, info};

/// Create `dir` (and parents) if it does not exist yet.
pub async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if tokio::fs::metadata(dir).await.is_ok() {
        debug!(dir = %dir.display(), "data directory present");
        return Ok(());
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(dir = %dir.display(), "created data directory");
    Ok(())
}

/// Create the parent directory of `file` if it has one.
pub async fn ensure_parent_dir(file: &Path) -> anyhow::Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => ensure_dir(parent).await,
        _ => Ok(()),
    }
}
