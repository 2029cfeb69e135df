//! Library directory scanning and per-folder configuration

mod config;
mod scan;

pub use config::{has_podcast_config, read_podcast_config, PodcastConfig};
pub use scan::{scan_library, scan_source, Episode, LibraryScan, PodcastSource, SkippedFolder};
