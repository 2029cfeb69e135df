use std::path::{Path, PathBuf};
use std::time::SystemTime;

use bytes::Bytes;

use crate::error::CoverError;

/// Extensions a cached cover may carry, in probe order
pub const COVER_EXTENSIONS: [&str; 3] = ["jpg", "png", "webp"];

const MILLIS_PER_DAY: u128 = 86_400_000;

/// Cache file name for a source folder
pub fn cache_file_name(dir_name: &str, extension: &str) -> String {
    format!("{dir_name}.{extension}")
}

/// A cached cover is fresh while its age stays below the TTL.
/// Timestamps in the future never count as fresh.
pub fn is_fresh(modified: SystemTime, now: SystemTime, ttl_days: u64) -> bool {
    match now.duration_since(modified) {
        Ok(age) => age.as_millis() < u128::from(ttl_days) * MILLIS_PER_DAY,
        Err(_) => false,
    }
}

/// Find a fresh cached cover for a source.
///
/// Probes the known extensions in order and returns the first fresh file.
/// Stale files are passed over, they get replaced by the next download.
pub async fn find_fresh_cached(
    cache_dir: &Path,
    dir_name: &str,
    ttl_days: u64,
) -> Option<PathBuf> {
    for ext in COVER_EXTENSIONS {
        let path = cache_dir.join(cache_file_name(dir_name, ext));

        let Ok(metadata) = tokio::fs::metadata(&path).await else {
            continue;
        };
        let Ok(modified) = metadata.modified() else {
            continue;
        };

        if is_fresh(modified, SystemTime::now(), ttl_days) {
            return Some(path);
        }
    }

    None
}

/// Pick the cache file extension for an artwork URL.
///
/// Looks at the last path segment with query and fragment stripped. Anything
/// that is not clearly png or webp is stored as jpg.
pub fn extension_for_url(url: &str) -> &'static str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    let ext = file.rsplit('.').next().unwrap_or("").to_ascii_lowercase();

    match ext.as_str() {
        "png" => "png",
        "webp" => "webp",
        _ => "jpg",
    }
}

/// Write downloaded artwork into the cache.
///
/// After a successful write the other known extensions for the same source
/// are deleted best-effort, so at most one cover per source survives.
pub async fn store_cover(
    cache_dir: &Path,
    dir_name: &str,
    extension: &str,
    bytes: &Bytes,
) -> Result<PathBuf, CoverError> {
    tokio::fs::create_dir_all(cache_dir)
        .await
        .map_err(|e| CoverError::CacheWriteFailed {
            path: cache_dir.to_path_buf(),
            source: e,
        })?;

    let path = cache_dir.join(cache_file_name(dir_name, extension));
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| CoverError::CacheWriteFailed {
            path: path.clone(),
            source: e,
        })?;

    for other in COVER_EXTENSIONS {
        if other == extension {
            continue;
        }
        let stale = cache_dir.join(cache_file_name(dir_name, other));
        let _ = tokio::fs::remove_file(&stale).await;
    }

    Ok(path)
}
