// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cover artwork resolution: cache, explicit URLs and remote search

mod cache;
mod search;

pub use cache::{
    cache_file_name, extension_for_url, find_fresh_cached, is_fresh, store_cover,
    COVER_EXTENSIONS,
};
pub use search::search_artwork;

use std::path::PathBuf;
use std::time::Duration;

use bytes::Bytes;

use crate::config::{CoverConfig, CoverProvider};
use crate::error::CoverError;
use crate::http::HttpClient;
use crate::library::PodcastSource;
use crate::urls;

/// Outcome of a cover resolution attempt.
///
/// Resolution never fails a feed build. Failures come back as `Degraded`
/// so the caller can report them and fall back to its default artwork.
#[derive(Debug)]
pub enum CoverOutcome {
    /// A cover file sits in the cache, served under `route`
    Resolved { route: String, path: PathBuf },
    /// Lookup is disabled or turned up nothing
    NotFound,
    /// Lookup was attempted and failed
    Degraded(CoverError),
}

/// Resolve cover artwork for a podcast source.
///
/// Checks the local cache first, then determines an artwork URL from the
/// explicit configuration or the search provider, downloads it and stores
/// it in the cache. With artwork fetching disabled this returns `NotFound`
/// without touching the cache or the network.
pub async fn resolve_cover<C: HttpClient + ?Sized>(
    client: &C,
    source: &PodcastSource,
    config: &CoverConfig,
) -> CoverOutcome {
    if !config.fetch_enabled || config.provider == CoverProvider::None {
        return CoverOutcome::NotFound;
    }

    if let Some(path) =
        cache::find_fresh_cached(&config.cache_dir, &source.dir_name, config.ttl_days).await
    {
        return cached_outcome(path);
    }

    let artwork_url = match artwork_url(client, source, config).await {
        Ok(Some(url)) => url,
        Ok(None) => return CoverOutcome::NotFound,
        Err(e) => return CoverOutcome::Degraded(e),
    };

    match download_cover(client, &artwork_url, &source.dir_name, config).await {
        Ok(path) => cached_outcome(path),
        Err(e) => CoverOutcome::Degraded(e),
    }
}

/// Outcome for a file that now lives in the cache
fn cached_outcome(path: PathBuf) -> CoverOutcome {
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    let route = urls::cover_route(file_name);
    CoverOutcome::Resolved { route, path }
}

/// Determine the artwork URL for a source.
///
/// An explicitly configured image URL wins and skips the search provider
/// entirely. Otherwise the search term falls back from the configured term
/// to the podcast title to the folder name.
async fn artwork_url<C: HttpClient + ?Sized>(
    client: &C,
    source: &PodcastSource,
    config: &CoverConfig,
) -> Result<Option<String>, CoverError> {
    if let Some(explicit) = source.config.cover_image_url.as_deref()
        && !explicit.is_empty()
    {
        return Ok(Some(explicit.to_string()));
    }

    let term = search_term(source);
    search::search_artwork(client, config, &term).await
}

/// First non-empty of the configured search term, the title, the folder name
fn search_term(source: &PodcastSource) -> String {
    [
        source.config.cover_search_term.as_deref().unwrap_or_default(),
        source.config.title.as_str(),
        source.dir_name.as_str(),
    ]
    .into_iter()
    .map(str::trim)
    .find(|term| !term.is_empty())
    .unwrap_or_default()
    .to_string()
}

async fn download_cover<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
    dir_name: &str,
    config: &CoverConfig,
) -> Result<PathBuf, CoverError> {
    let bytes = get_with_timeout(client, url, config.timeout_ms).await?;
    let extension = cache::extension_for_url(url);
    cache::store_cover(&config.cache_dir, dir_name, extension, &bytes).await
}

/// GET with a hard timeout. When the timeout elapses the request future is
/// dropped, which aborts the transfer mid-flight.
async fn get_with_timeout<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
    timeout_ms: u64,
) -> Result<Bytes, CoverError> {
    match tokio::time::timeout(Duration::from_millis(timeout_ms), client.get_bytes(url)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(CoverError::TimedOut {
            url: url.to_string(),
            timeout_ms,
        }),
    }
}
