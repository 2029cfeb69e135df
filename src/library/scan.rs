use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::ScanError;
use crate::library::config::{has_podcast_config, read_podcast_config, PodcastConfig};

/// File extensions recognized as podcast episodes
const AUDIO_EXTENSIONS: [&str; 7] = ["mp3", "m4a", "aac", "ogg", "opus", "wav", "flac"];

/// One podcast folder with its configuration and ordered episode list
#[derive(Debug, Clone)]
pub struct PodcastSource {
    /// Folder name, doubles as the source identifier and cover cache key
    pub dir_name: String,
    /// Path of the folder inside the library
    pub dir_path: PathBuf,
    /// Parsed per-folder configuration
    pub config: PodcastConfig,
    /// Episodes ordered oldest first
    pub episodes: Vec<Episode>,
    /// Server route of the resolved cover, filled in during feed assembly
    pub cover_route: Option<String>,
    /// Local path of the resolved cover, filled in during feed assembly
    pub cover_path: Option<PathBuf>,
}

/// A single audio file inside a source folder
#[derive(Debug, Clone)]
pub struct Episode {
    /// Display title, the file name without its extension
    pub title: String,
    pub file_name: String,
    pub file_path: PathBuf,
    /// Publication date, taken from the file modification time
    pub pub_date: DateTime<Utc>,
}

/// Result of scanning a library directory
#[derive(Debug)]
pub struct LibraryScan {
    /// Usable podcast sources, ordered by folder name
    pub sources: Vec<PodcastSource>,
    /// Folders that had a podcast.json but could not be loaded
    pub skipped: Vec<SkippedFolder>,
}

#[derive(Debug, Clone)]
pub struct SkippedFolder {
    pub dir_name: String,
    pub reason: String,
}

/// Scan the library root for podcast folders.
///
/// A folder is a source iff it contains a podcast.json. Hidden folders are
/// ignored, which keeps the cache and feed output directories out of the
/// scan when they live under the library root. A folder whose podcast.json
/// cannot be read or parsed is reported as skipped instead of failing the
/// whole scan.
pub fn scan_library(root: &Path) -> Result<LibraryScan, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::LibraryNotFound(root.to_path_buf()));
    }

    let entries = std::fs::read_dir(root).map_err(|e| ScanError::ReadDirectoryFailed {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut sources = Vec::new();
    let mut skipped = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::ReadDirectoryFailed {
            path: root.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        let Some(dir_name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
            continue;
        };

        if dir_name.starts_with('.') || !path.is_dir() {
            continue;
        }

        if !has_podcast_config(&path) {
            continue;
        }

        match scan_source(&path, &dir_name) {
            Ok(source) => sources.push(source),
            Err(e) => skipped.push(SkippedFolder {
                dir_name,
                reason: e.to_string(),
            }),
        }
    }

    sources.sort_by(|a, b| a.dir_name.cmp(&b.dir_name));

    Ok(LibraryScan { sources, skipped })
}

/// Load a single podcast folder: parse its config and collect its episodes
pub fn scan_source(dir_path: &Path, dir_name: &str) -> Result<PodcastSource, ScanError> {
    let mut config = read_podcast_config(dir_path)?;
    if config.title.trim().is_empty() {
        config.title = dir_name.to_string();
    }

    let entries = std::fs::read_dir(dir_path).map_err(|e| ScanError::ReadDirectoryFailed {
        path: dir_path.to_path_buf(),
        source: e,
    })?;

    let mut episodes = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| ScanError::ReadDirectoryFailed {
            path: dir_path.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()).map(String::from) else {
            continue;
        };

        if file_name.starts_with('.') || !is_audio_file(&file_name) {
            continue;
        }

        let title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&file_name)
            .to_string();
        let pub_date = modified_time(&path);

        episodes.push(Episode {
            title,
            file_name,
            file_path: path,
            pub_date,
        });
    }

    episodes.sort_by(episode_order);

    Ok(PodcastSource {
        dir_name: dir_name.to_string(),
        dir_path: dir_path.to_path_buf(),
        config,
        episodes,
        cover_route: None,
        cover_path: None,
    })
}

fn is_audio_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Oldest first, file name as tie breaker for identical timestamps
fn episode_order(a: &Episode, b: &Episode) -> Ordering {
    a.pub_date
        .cmp(&b.pub_date)
        .then_with(|| a.file_name.cmp(&b.file_name))
}

/// Modification time as UTC. Files the filesystem cannot date sort oldest.
fn modified_time(path: &Path) -> DateTime<Utc> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or(DateTime::UNIX_EPOCH)
}
