// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const PODCAST_CONFIG_FILENAME: &str = "podcast.json";

/// Per-folder podcast configuration parsed from podcast.json.
///
/// Every field has a default so a minimal `{"title": "…"}` file is enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PodcastConfig {
    pub title: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub language: String,
    pub category: String,
    pub explicit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_search_term: Option<String>,
}

impl Default for PodcastConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            email: String::new(),
            language: "en".to_string(),
            category: "Technology".to_string(),
            explicit: false,
            site_url: None,
            cover_image_url: None,
            cover_search_term: None,
        }
    }
}

/// Check whether a folder carries a podcast.json and is therefore a source
pub fn has_podcast_config(dir: &Path) -> bool {
    dir.join(PODCAST_CONFIG_FILENAME).is_file()
}

/// Read and parse the podcast.json inside a source folder
pub fn read_podcast_config(dir: &Path) -> Result<PodcastConfig, ConfigError> {
    let path = dir.join(PODCAST_CONFIG_FILENAME);

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
        path: path.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ParseFailed { path, source: e })
}
