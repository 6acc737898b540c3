//! Crash-safe file replacement.

use crate::{DbError, Result as DbErrorResult};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TEMP_ID: AtomicU64 = AtomicU64::new(0);

/// Replace `path` with `contents` via a sibling temp file and a rename.
///
/// Readers see either the old file or the new one, never a partial write.
/// Each call gets its own temp name, so concurrent writers to one target
/// only race on the final rename (last one wins).
pub async fn write_atomic(path: &Path, contents: &[u8]) -> DbErrorResult<()> {
    let temp_path = temp_path_for(path);

    if let Err(e) = tokio::fs::write(&temp_path, contents).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(DbError::io(&temp_path, e));
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(DbError::io(path, e));
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let id = NEXT_TEMP_ID.fetch_add(1, Ordering::Relaxed);

    path.with_file_name(format!(".{}.{}.{}.tmp", file_name, std::process::id(), id))
}
