use std::sync::Arc;

/// Events emitted while a library of feeds is published
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// The library directory is being scanned for podcast folders
    ScanningLibrary { path: String },

    /// Scanning finished
    LibraryScanned {
        /// Number of usable podcast sources found
        sources: usize,
        /// Number of folders skipped (unreadable or broken config)
        skipped: usize,
    },

    /// A folder was skipped during the scan
    FolderSkipped { dir_name: String, reason: String },

    /// A source's feed is being generated
    ProcessingSource {
        dir_name: String,
        title: String,
        episodes: usize,
    },

    /// Cover artwork was resolved for a source
    CoverResolved { dir_name: String, route: String },

    /// No cover artwork could be resolved for a source.
    ///
    /// `reason` is set when resolution degraded on a failure, and empty
    /// when there was simply nothing to find.
    CoverUnavailable {
        dir_name: String,
        reason: Option<String>,
    },

    /// A feed document was written to disk
    FeedWritten {
        dir_name: String,
        path: String,
        bytes: usize,
    },

    /// A source could not be published
    SourceFailed { dir_name: String, error: String },

    /// The publish run completed
    RunCompleted { published: usize, failed: usize },
}

/// Trait for reporting progress events during a publish run.
///
/// Implementations can use this to display progress bars, log messages,
/// or collect statistics.
pub trait ProgressReporter: Send + Sync {
    /// Report a progress event
    fn report(&self, event: ProgressEvent);
}

/// A shared reference to a progress reporter
pub type SharedProgressReporter = Arc<dyn ProgressReporter>;

/// A no-op progress reporter that silently ignores all events.
/// Useful for tests or quiet mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: ProgressEvent) {
        // Intentionally empty
    }
}

impl NoopReporter {
    /// Create a new NoopReporter wrapped in an Arc
    pub fn shared() -> SharedProgressReporter {
        Arc::new(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_reporter_handles_all_events() {
        let reporter = NoopReporter;

        reporter.report(ProgressEvent::ScanningLibrary {
            path: "/srv/podcasts".to_string(),
        });

        reporter.report(ProgressEvent::LibraryScanned {
            sources: 3,
            skipped: 1,
        });

        reporter.report(ProgressEvent::FolderSkipped {
            dir_name: "broken".to_string(),
            reason: "invalid config".to_string(),
        });

        reporter.report(ProgressEvent::ProcessingSource {
            dir_name: "daily-news".to_string(),
            title: "Daily News".to_string(),
            episodes: 12,
        });

        reporter.report(ProgressEvent::CoverResolved {
            dir_name: "daily-news".to_string(),
            route: "/covers/daily-news.jpg".to_string(),
        });

        reporter.report(ProgressEvent::CoverUnavailable {
            dir_name: "daily-news".to_string(),
            reason: Some("request timed out".to_string()),
        });

        reporter.report(ProgressEvent::FeedWritten {
            dir_name: "daily-news".to_string(),
            path: ".feeds/daily-news.xml".to_string(),
            bytes: 4096,
        });

        reporter.report(ProgressEvent::SourceFailed {
            dir_name: "daily-news".to_string(),
            error: "disk full".to_string(),
        });

        reporter.report(ProgressEvent::RunCompleted {
            published: 3,
            failed: 0,
        });
    }
}
