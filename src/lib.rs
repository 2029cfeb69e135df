pub mod config;
pub mod cover;
pub mod error;
pub mod feed;
pub mod http;
pub mod library;
pub mod progress;
pub mod publish;
pub mod shownotes;
pub mod urls;

// Re-export main types for convenience
pub use config::{AppConfig, CoverConfig, CoverProvider, InlineMode, ShownotesConfig, Verbosity};
pub use cover::{resolve_cover, CoverOutcome};
pub use error::{ConfigError, CoverError, HttpError, PublishError, ScanError};
pub use feed::{generate_feed, media_type, FeedOptions};
pub use http::{HttpClient, ReqwestClient};
pub use library::{scan_library, Episode, LibraryScan, PodcastConfig, PodcastSource};
pub use progress::{NoopReporter, ProgressEvent, ProgressReporter, SharedProgressReporter};
pub use publish::{publish_library, PublishResult};
pub use shownotes::{build_shownotes, Attachment, AttachmentKind, Shownotes};
