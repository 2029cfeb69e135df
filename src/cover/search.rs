// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;
use url::Url;

use crate::config::CoverConfig;
use crate::error::CoverError;
use crate::http::HttpClient;

const SEARCH_URL: &str = "https://itunes.apple.com/search";
const RESULT_LIMIT: &str = "3";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchResult {
    #[serde(rename = "artworkUrl600")]
    artwork_url_600: Option<String>,
    #[serde(rename = "artworkUrl512")]
    artwork_url_512: Option<String>,
    #[serde(rename = "artworkUrl100")]
    artwork_url_100: Option<String>,
}

impl SearchResult {
    /// Largest artwork size on offer, skipping missing and empty entries
    fn best_artwork(&self) -> Option<&str> {
        [
            &self.artwork_url_600,
            &self.artwork_url_512,
            &self.artwork_url_100,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
        .find(|url| !url.is_empty())
    }
}

/// Look up podcast artwork on the iTunes Search API.
///
/// Only the first matching podcast is considered. `Ok(None)` means the
/// search worked but produced no usable artwork.
pub async fn search_artwork<C: HttpClient + ?Sized>(
    client: &C,
    config: &CoverConfig,
    term: &str,
) -> Result<Option<String>, CoverError> {
    let url = Url::parse_with_params(
        SEARCH_URL,
        [
            ("term", term),
            ("entity", "podcast"),
            ("limit", RESULT_LIMIT),
            ("country", config.country.as_str()),
        ],
    )?;

    let bytes = super::get_with_timeout(client, url.as_str(), config.timeout_ms).await?;
    let response: SearchResponse = serde_json::from_slice(&bytes)?;

    Ok(response
        .results
        .first()
        .and_then(SearchResult::best_artwork)
        .map(String::from))
}
