use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{ProgressBar, ProgressStyle};

use podshelf::shownotes::format_bytes;
use podshelf::{
    publish_library, AppConfig, CoverConfig, CoverProvider, FeedOptions, InlineMode, NoopReporter,
    ProgressEvent, ProgressReporter, ReqwestClient, SharedProgressReporter, ShownotesConfig,
    Verbosity,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static SEARCH: Emoji<'_, '_> = Emoji("🔍 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static PICTURE: Emoji<'_, '_> = Emoji("🖼️  ", "[o] ");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "[+] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "x ");

/// Publish folders of audio files as podcast RSS feeds
#[derive(Parser, Debug)]
#[command(name = "podshelf")]
#[command(about = "Publish folders of audio files as podcast RSS feeds")]
#[command(version)]
struct Args {
    /// Library directory containing one folder per podcast
    library: PathBuf,

    /// Base URL the static file server is reachable under
    #[arg(short, long, default_value = "http://localhost:8080")]
    base_url: String,

    /// Directory the feed documents are written to (default: <library>/.feeds)
    #[arg(long)]
    feeds_dir: Option<PathBuf>,

    /// Directory downloaded covers are cached in (default: <library>/.covers)
    #[arg(long)]
    covers_dir: Option<PathBuf>,

    /// Cover used when no artwork can be resolved
    #[arg(long, default_value = "/default-cover.jpg")]
    default_cover: String,

    /// Disable cover artwork fetching entirely
    #[arg(long)]
    no_covers: bool,

    /// Artwork search provider (itunes, none)
    #[arg(long, default_value = "itunes")]
    cover_provider: CoverProvider,

    /// Country code for the artwork search
    #[arg(long, default_value = "us")]
    country: String,

    /// Days a cached cover stays fresh
    #[arg(long, default_value = "30")]
    cover_ttl_days: u64,

    /// Hard timeout for artwork requests in milliseconds
    #[arg(long, default_value = "10000")]
    cover_timeout_ms: u64,

    /// Shownotes verbosity (title, full)
    #[arg(long, default_value = "full")]
    shownotes: Verbosity,

    /// Attachment inlining in shownotes (none, images, all)
    #[arg(long, default_value = "none")]
    inline_attachments: InlineMode,

    /// Character limit for inlined note attachments
    #[arg(long, default_value = "2000")]
    max_inline_chars: usize,

    /// Quiet mode - suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

/// Progress reporter using indicatif for terminal output
struct ConsoleReporter {
    main_bar: ProgressBar,
}

impl ConsoleReporter {
    fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let main_bar = ProgressBar::new_spinner();
        main_bar.set_style(style);
        main_bar.enable_steady_tick(std::time::Duration::from_millis(100));

        Self { main_bar }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::ScanningLibrary { path } => {
                self.main_bar
                    .set_message(format!("{SEARCH}Scanning library: {}", path.cyan()));
            }

            ProgressEvent::LibraryScanned { sources, skipped } => {
                let mut message = format!(
                    "{HEADPHONES}{} podcast folders found",
                    sources.to_string().cyan()
                );
                if skipped > 0 {
                    message.push_str(&format!(", {} skipped", skipped.to_string().yellow()));
                }
                self.main_bar.set_message(message);
            }

            ProgressEvent::FolderSkipped { dir_name, reason } => {
                self.main_bar.println(format!(
                    "{WARNING}{} skipped - {}",
                    dir_name.yellow(),
                    reason.dimmed()
                ));
            }

            ProgressEvent::ProcessingSource {
                title, episodes, ..
            } => {
                self.main_bar.set_message(format!(
                    "{HEADPHONES}{} • {} episodes",
                    title.bold(),
                    episodes.to_string().cyan()
                ));
            }

            ProgressEvent::CoverResolved { route, .. } => {
                self.main_bar
                    .println(format!("  {PICTURE}cover {}", route.dimmed()));
            }

            ProgressEvent::CoverUnavailable { dir_name, reason } => {
                if let Some(reason) = reason {
                    self.main_bar.println(format!(
                        "{WARNING}{} cover unavailable - {}",
                        dir_name.yellow(),
                        reason.red()
                    ));
                }
            }

            ProgressEvent::FeedWritten {
                dir_name, bytes, ..
            } => {
                self.main_bar.println(format!(
                    "{SUCCESS}{} {}",
                    dir_name.green(),
                    format_bytes(bytes as u64).dimmed()
                ));
            }

            ProgressEvent::SourceFailed { dir_name, error } => {
                self.main_bar.println(format!(
                    "{FAILURE}{} - {}",
                    dir_name.red(),
                    error.red()
                ));
            }

            ProgressEvent::RunCompleted { published, failed } => {
                self.main_bar.finish_and_clear();
                println!(
                    "\n{PARTY}{} {} feeds written, {} failed",
                    "Publish complete:".bold().green(),
                    published.to_string().green().bold(),
                    if failed > 0 {
                        failed.to_string().red().bold()
                    } else {
                        failed.to_string().green()
                    }
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "\n{}{} {}\n",
        MICROPHONE,
        "podshelf".bold().magenta(),
        "- Podcast Feed Publisher".dimmed()
    );

    let feeds_dir = args
        .feeds_dir
        .clone()
        .unwrap_or_else(|| args.library.join(".feeds"));
    let covers_dir = args
        .covers_dir
        .clone()
        .unwrap_or_else(|| args.library.join(".covers"));

    let config = AppConfig {
        covers: CoverConfig {
            fetch_enabled: !args.no_covers,
            provider: args.cover_provider,
            country: args.country.clone(),
            ttl_days: args.cover_ttl_days,
            timeout_ms: args.cover_timeout_ms,
            cache_dir: covers_dir,
        },
        shownotes: ShownotesConfig {
            verbosity: args.shownotes,
            inline_attachments: args.inline_attachments,
            max_inline_chars: args.max_inline_chars,
        },
    };

    let options = FeedOptions {
        base_url: args.base_url.trim_end_matches('/').to_string(),
        default_cover_url: args.default_cover.clone(),
    };

    let client = ReqwestClient::new();

    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else {
        Arc::new(ConsoleReporter::new())
    };

    let result = publish_library(
        &client,
        &args.library,
        &feeds_dir,
        &options,
        &config,
        reporter,
    )
    .await
    .context("Failed to publish library")?;

    if !args.quiet && !result.failed_sources.is_empty() {
        println!("\n{}", "Failed sources:".red().bold());
        for (dir_name, error) in &result.failed_sources {
            println!("  {}{} - {}", CROSS, dir_name.yellow(), error.dimmed());
        }
    }

    if !args.quiet {
        println!(
            "\n{FOLDER}Feeds: {}\n",
            feeds_dir.display().to_string().cyan()
        );
    }

    if result.failed > 0 && result.published == 0 {
        std::process::exit(1);
    }

    Ok(())
}
