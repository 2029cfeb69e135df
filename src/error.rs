use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to a remote HTTP endpoint
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Errors that can occur when reading a folder's podcast.json
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON in {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors that can occur when scanning the podcast library
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Library directory does not exist: {0}")]
    LibraryNotFound(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur while resolving cover artwork.
///
/// These are never propagated out of the resolver; they ride inside
/// `CoverOutcome::Degraded` so callers can log them if they care.
#[derive(Error, Debug)]
pub enum CoverError {
    #[error("Invalid artwork search URL: {0}")]
    InvalidSearchUrl(#[from] url::ParseError),

    #[error("Artwork request failed: {0}")]
    RequestFailed(#[from] HttpError),

    #[error("Artwork search returned malformed JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Artwork request timed out after {timeout_ms} ms: {url}")]
    TimedOut { url: String, timeout_ms: u64 },

    #[error("Failed to write cover cache file {path}: {source}")]
    CacheWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level errors for publishing a library of feeds
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to create feeds directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write feed file {path}: {source}")]
    WriteFeedFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
