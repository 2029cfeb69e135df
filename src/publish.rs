// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use crate::config::AppConfig;
use crate::error::PublishError;
use crate::feed::{generate_feed, FeedOptions};
use crate::http::HttpClient;
use crate::library::scan_library;
use crate::progress::{ProgressEvent, SharedProgressReporter};

/// Result of a publish run
#[derive(Debug, Clone)]
pub struct PublishResult {
    /// Number of feed documents written
    pub published: usize,
    /// Number of sources whose feed could not be written
    pub failed: usize,
    /// Details of failed sources (folder name, error message)
    pub failed_sources: Vec<(String, String)>,
}

/// Publish every podcast source under a library directory.
///
/// This is the main entry point for the library. It:
/// 1. Scans the library for podcast folders
/// 2. Generates each source's feed document, resolving covers on the way
/// 3. Writes each document to `<feeds_dir>/<folder name>.xml`
///
/// Feed generation itself never fails. A source counts as failed only when
/// its document cannot be written to disk, and a failed source never stops
/// the rest of the run.
pub async fn publish_library<C: HttpClient + ?Sized>(
    client: &C,
    library_dir: &Path,
    feeds_dir: &Path,
    options: &FeedOptions,
    config: &AppConfig,
    reporter: SharedProgressReporter,
) -> Result<PublishResult, PublishError> {
    reporter.report(ProgressEvent::ScanningLibrary {
        path: library_dir.display().to_string(),
    });

    let scan = scan_library(library_dir)?;

    for folder in &scan.skipped {
        reporter.report(ProgressEvent::FolderSkipped {
            dir_name: folder.dir_name.clone(),
            reason: folder.reason.clone(),
        });
    }

    reporter.report(ProgressEvent::LibraryScanned {
        sources: scan.sources.len(),
        skipped: scan.skipped.len(),
    });

    tokio::fs::create_dir_all(feeds_dir).await.map_err(|e| {
        PublishError::CreateDirectoryFailed {
            path: feeds_dir.to_path_buf(),
            source: e,
        }
    })?;

    let mut published = 0;
    let mut failed_sources: Vec<(String, String)> = Vec::new();

    for mut source in scan.sources {
        reporter.report(ProgressEvent::ProcessingSource {
            dir_name: source.dir_name.clone(),
            title: source.config.title.clone(),
            episodes: source.episodes.len(),
        });

        let xml = generate_feed(client, &mut source, options, config, &reporter).await;

        let feed_path = feeds_dir.join(format!("{}.xml", source.dir_name));
        match tokio::fs::write(&feed_path, &xml).await {
            Ok(()) => {
                published += 1;
                reporter.report(ProgressEvent::FeedWritten {
                    dir_name: source.dir_name.clone(),
                    path: feed_path.display().to_string(),
                    bytes: xml.len(),
                });
            }
            Err(e) => {
                let error = PublishError::WriteFeedFailed {
                    path: feed_path,
                    source: e,
                };
                reporter.report(ProgressEvent::SourceFailed {
                    dir_name: source.dir_name.clone(),
                    error: error.to_string(),
                });
                failed_sources.push((source.dir_name.clone(), error.to_string()));
            }
        }
    }

    let failed = failed_sources.len();

    reporter.report(ProgressEvent::RunCompleted { published, failed });

    Ok(PublishResult {
        published,
        failed,
        failed_sources,
    })
}
