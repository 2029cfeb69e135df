// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Feed assembly: one RSS 2.0 document with iTunes and Atom extensions
//! per podcast source

use std::path::Path;

use chrono::{Datelike, Utc};
use rss::extension::atom::{AtomExtension, Link};
use rss::extension::itunes::{
    ITunesCategoryBuilder, ITunesChannelExtensionBuilder, ITunesItemExtensionBuilder,
    ITunesOwnerBuilder,
};
use rss::{ChannelBuilder, EnclosureBuilder, GuidBuilder, ImageBuilder, Item, ItemBuilder};

use crate::config::{AppConfig, Verbosity};
use crate::cover::{resolve_cover, CoverOutcome};
use crate::http::HttpClient;
use crate::library::{Episode, PodcastConfig, PodcastSource};
use crate::progress::{ProgressEvent, SharedProgressReporter};
use crate::shownotes::{build_shownotes, format_bytes};
use crate::urls;

const PLACEHOLDER_DURATION: &str = "0:00";

/// Caller-supplied serving options for feed generation
#[derive(Debug, Clone)]
pub struct FeedOptions {
    /// Base URL the static file server is reachable under
    pub base_url: String,
    /// Cover URL or path used when no artwork can be resolved
    pub default_cover_url: String,
}

/// MIME type served for an audio file
pub fn media_type(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("m4a") => "audio/x-m4a",
        Some("wav") => "audio/wav",
        _ => "audio/mpeg",
    }
}

/// Generate the complete RSS document for one source.
///
/// Cover resolution runs once per call and augments the source's cover
/// fields on success. Episodes are rendered sequentially in their stored
/// order. Missing data degrades (zero enclosure lengths, title-only
/// content), it never fails the build.
pub async fn generate_feed<C: HttpClient + ?Sized>(
    client: &C,
    source: &mut PodcastSource,
    options: &FeedOptions,
    config: &AppConfig,
    reporter: &SharedProgressReporter,
) -> String {
    resolve_and_report_cover(client, source, config, reporter).await;

    let cover = channel_cover_url(source, options).await;

    let mut items = Vec::with_capacity(source.episodes.len());
    for episode in &source.episodes {
        items.push(build_item(source, episode, options, config).await);
    }

    let updated = source
        .episodes
        .last()
        .map(|e| e.pub_date)
        .unwrap_or_else(Utc::now);

    let site_link = match source.config.site_url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => options.base_url.clone(),
    };

    let copyright_holder = non_empty(&source.config.author)
        .unwrap_or_else(|| source.config.title.clone());
    let copyright = format!("© {} {}", Utc::now().year(), copyright_holder);

    let image = ImageBuilder::default()
        .url(cover.clone())
        .title(source.config.title.clone())
        .link(site_link.clone())
        .build();

    let self_link = Link {
        href: urls::feed_url(&options.base_url, &source.dir_name),
        rel: "self".to_string(),
        mime_type: Some("application/rss+xml".to_string()),
        ..Link::default()
    };

    let channel = ChannelBuilder::default()
        .title(source.config.title.clone())
        .link(site_link)
        .description(source.config.description.clone())
        .language(Some(source.config.language.clone()))
        .copyright(Some(copyright))
        .managing_editor(author_field(&source.config))
        .last_build_date(Some(updated.to_rfc2822()))
        .generator(Some(format!("podshelf {}", env!("CARGO_PKG_VERSION"))))
        .image(Some(image))
        .itunes_ext(Some(itunes_channel(source, &cover)))
        .atom_ext(Some(AtomExtension {
            links: vec![self_link],
        }))
        .items(items)
        .build();

    channel.to_string()
}

async fn resolve_and_report_cover<C: HttpClient + ?Sized>(
    client: &C,
    source: &mut PodcastSource,
    config: &AppConfig,
    reporter: &SharedProgressReporter,
) {
    match resolve_cover(client, source, &config.covers).await {
        CoverOutcome::Resolved { route, path } => {
            reporter.report(ProgressEvent::CoverResolved {
                dir_name: source.dir_name.clone(),
                route: route.clone(),
            });
            source.cover_route = Some(route);
            source.cover_path = Some(path);
        }
        CoverOutcome::NotFound => {
            reporter.report(ProgressEvent::CoverUnavailable {
                dir_name: source.dir_name.clone(),
                reason: None,
            });
        }
        CoverOutcome::Degraded(e) => {
            reporter.report(ProgressEvent::CoverUnavailable {
                dir_name: source.dir_name.clone(),
                reason: Some(e.to_string()),
            });
        }
    }
}

/// Channel image URL.
///
/// A resolved or pre-existing cover wins, absolutized against the base URL
/// unless it already carries a scheme. Then a `cover.jpg` next to the audio
/// files, served like any other file. Then the caller's default.
async fn channel_cover_url(source: &PodcastSource, options: &FeedOptions) -> String {
    if let Some(route) = source.cover_route.as_deref() {
        return urls::absolutize(&options.base_url, route);
    }

    let local_cover = source.dir_path.join("cover.jpg");
    if tokio::fs::try_exists(&local_cover).await.unwrap_or(false) {
        return urls::audio_url(&options.base_url, &source.dir_name, "cover.jpg");
    }

    urls::absolutize(&options.base_url, &options.default_cover_url)
}

async fn build_item(
    source: &PodcastSource,
    episode: &Episode,
    options: &FeedOptions,
    config: &AppConfig,
) -> Item {
    let link = urls::audio_url(&options.base_url, &source.dir_name, &episode.file_name);

    let size_bytes = tokio::fs::metadata(&episode.file_path)
        .await
        .map(|m| m.len())
        .unwrap_or(0);

    let notes = build_shownotes(
        source,
        episode,
        size_bytes,
        &link,
        &options.base_url,
        &config.shownotes,
    )
    .await;

    let description = match config.shownotes.verbosity {
        Verbosity::Title => episode.title.clone(),
        Verbosity::Full => format!("{} ({})", episode.title, format_bytes(size_bytes)),
    };

    let content = if notes.html.is_empty() {
        format!("<p>{}</p>", html_escape::encode_text(&episode.title))
    } else {
        notes.html
    };

    let guid = GuidBuilder::default()
        .value(link.clone())
        .permalink(true)
        .build();

    let enclosure = EnclosureBuilder::default()
        .url(link.clone())
        .length(size_bytes.to_string())
        .mime_type(media_type(&episode.file_name).to_string())
        .build();

    let itunes = ITunesItemExtensionBuilder::default()
        .subtitle(Some(episode.title.clone()))
        .summary(Some(notes.plain))
        .duration(Some(PLACEHOLDER_DURATION.to_string()))
        .explicit(Some(source.config.explicit.to_string()))
        .episode_type(Some("full".to_string()))
        .build();

    ItemBuilder::default()
        .title(Some(episode.title.clone()))
        .link(Some(link))
        .guid(Some(guid))
        .description(Some(description))
        .content(Some(content))
        .pub_date(Some(episode.pub_date.to_rfc2822()))
        .author(author_field(&source.config))
        .enclosure(Some(enclosure))
        .itunes_ext(Some(itunes))
        .build()
}

fn itunes_channel(
    source: &PodcastSource,
    cover: &str,
) -> rss::extension::itunes::ITunesChannelExtension {
    let category = ITunesCategoryBuilder::default()
        .text(source.config.category.clone())
        .build();

    let owner_name = non_empty(&source.config.author);
    let owner_email = non_empty(&source.config.email);
    let owner = if owner_name.is_none() && owner_email.is_none() {
        None
    } else {
        Some(
            ITunesOwnerBuilder::default()
                .name(owner_name)
                .email(owner_email)
                .build(),
        )
    };

    ITunesChannelExtensionBuilder::default()
        .author(non_empty(&source.config.author))
        .image(Some(cover.to_string()))
        .explicit(Some(source.config.explicit.to_string()))
        .summary(Some(source.config.description.clone()))
        .owner(owner)
        .categories(vec![category])
        .r#type(Some("episodic".to_string()))
        .build()
}

/// RSS author value from the configured contact data
fn author_field(config: &PodcastConfig) -> Option<String> {
    let email = config.email.trim();
    let name = config.author.trim();

    match (email.is_empty(), name.is_empty()) {
        (false, false) => Some(format!("{email} ({name})")),
        (false, true) => Some(email.to_string()),
        (true, false) => Some(name.to_string()),
        (true, true) => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{DateTime, TimeZone};
    use rss::Channel;
    use tempfile::tempdir;

    use crate::library::scan_source;
    use crate::progress::NoopReporter;

    /// Never reached in these tests, covers stay disabled
    struct PanickingClient;

    #[async_trait::async_trait]
    impl HttpClient for PanickingClient {
        async fn get_bytes(&self, url: &str) -> Result<bytes::Bytes, crate::error::HttpError> {
            panic!("unexpected request to {url}");
        }
    }

    fn options() -> FeedOptions {
        FeedOptions {
            base_url: "http://localhost:8080".to_string(),
            default_cover_url: "/default-cover.jpg".to_string(),
        }
    }

    fn offline_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.covers.fetch_enabled = false;
        config
    }

    fn make_source(dir_path: &Path) -> PodcastSource {
        PodcastSource {
            dir_name: "show".to_string(),
            dir_path: dir_path.to_path_buf(),
            config: PodcastConfig {
                title: "My Show".to_string(),
                description: "A show about things".to_string(),
                author: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                ..PodcastConfig::default()
            },
            episodes: Vec::new(),
            cover_route: None,
            cover_path: None,
        }
    }

    fn make_episode(dir_path: &Path, file_name: &str, timestamp: i64) -> Episode {
        Episode {
            title: Path::new(file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap()
                .to_string(),
            file_name: file_name.to_string(),
            file_path: dir_path.join(file_name),
            pub_date: Utc.timestamp_opt(timestamp, 0).unwrap(),
        }
    }

    async fn generate(source: &mut PodcastSource) -> Channel {
        generate_with(source, &offline_config()).await
    }

    async fn generate_with(source: &mut PodcastSource, config: &AppConfig) -> Channel {
        let xml = generate_feed(
            &PanickingClient,
            source,
            &options(),
            config,
            &NoopReporter::shared(),
        )
        .await;
        Channel::read_from(xml.as_bytes()).expect("generated feed should parse")
    }

    // === Media types ===

    #[test]
    fn maps_audio_extensions_to_mime_types() {
        assert_eq!(media_type("ep.mp3"), "audio/mpeg");
        assert_eq!(media_type("ep.m4a"), "audio/x-m4a");
        assert_eq!(media_type("ep.wav"), "audio/wav");
        assert_eq!(media_type("ep.flac"), "audio/mpeg");
        assert_eq!(media_type("ep.ogg"), "audio/mpeg");
        assert_eq!(media_type("ep"), "audio/mpeg");
    }

    #[test]
    fn media_type_ignores_case() {
        assert_eq!(media_type("ep.M4A"), "audio/x-m4a");
        assert_eq!(media_type("ep.WAV"), "audio/wav");
    }

    // === Channel shape ===

    #[tokio::test]
    async fn empty_source_produces_a_valid_feed_dated_now() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());

        let channel = generate(&mut source).await;

        assert_eq!(channel.title(), "My Show");
        assert_eq!(channel.description(), "A show about things");
        assert!(channel.items().is_empty());

        let built = DateTime::parse_from_rfc2822(channel.last_build_date().unwrap()).unwrap();
        let age = Utc::now().signed_duration_since(built.with_timezone(&Utc));
        assert!(age.num_seconds().abs() < 60);
    }

    #[tokio::test]
    async fn channel_carries_the_configured_metadata() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());
        source.config.language = "de".to_string();
        source.config.site_url = Some("https://myshow.example".to_string());

        let channel = generate(&mut source).await;

        assert_eq!(channel.link(), "https://myshow.example");
        assert_eq!(channel.language(), Some("de"));
        assert_eq!(
            channel.managing_editor(),
            Some("jane@example.com (Jane Doe)")
        );

        let copyright = channel.copyright().unwrap();
        assert!(copyright.starts_with("© "));
        assert!(copyright.ends_with("Jane Doe"));
        assert!(copyright.contains(&Utc::now().year().to_string()));

        let generator = channel.generator().unwrap();
        assert!(generator.starts_with("podshelf "));
    }

    #[tokio::test]
    async fn missing_site_url_links_to_the_base_url() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());

        let channel = generate(&mut source).await;
        assert_eq!(channel.link(), "http://localhost:8080");
    }

    #[tokio::test]
    async fn last_build_date_matches_the_newest_episode() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("old.mp3"), b"a").unwrap();
        std::fs::write(dir.path().join("new.mp3"), b"b").unwrap();

        let mut source = make_source(dir.path());
        source.episodes = vec![
            make_episode(dir.path(), "old.mp3", 1_600_000_000),
            make_episode(dir.path(), "new.mp3", 1_700_000_000),
        ];

        let channel = generate(&mut source).await;

        let built = DateTime::parse_from_rfc2822(channel.last_build_date().unwrap()).unwrap();
        assert_eq!(built.timestamp(), 1_700_000_000);
    }

    #[tokio::test]
    async fn atom_self_link_points_at_the_feed_document() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());
        source.dir_name = "My Show".to_string();

        let channel = generate(&mut source).await;

        let atom = channel.atom_ext().unwrap();
        assert_eq!(atom.links().len(), 1);
        assert_eq!(
            atom.links()[0].href(),
            "http://localhost:8080/feeds/My%20Show.xml"
        );
        assert_eq!(atom.links()[0].rel(), "self");
        assert_eq!(atom.links()[0].mime_type(), Some("application/rss+xml"));
    }

    #[tokio::test]
    async fn itunes_channel_block_is_complete() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());

        let channel = generate(&mut source).await;

        let itunes = channel.itunes_ext().unwrap();
        assert_eq!(itunes.author(), Some("Jane Doe"));
        assert_eq!(itunes.summary(), Some("A show about things"));
        assert_eq!(itunes.explicit(), Some("false"));
        assert_eq!(itunes.r#type(), Some("episodic"));
        assert_eq!(itunes.categories().len(), 1);
        assert_eq!(itunes.categories()[0].text(), "Technology");

        let owner = itunes.owner().unwrap();
        assert_eq!(owner.name(), Some("Jane Doe"));
        assert_eq!(owner.email(), Some("jane@example.com"));
    }

    // === Cover precedence ===

    #[tokio::test]
    async fn resolved_cover_route_wins_and_is_absolutized() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());
        source.cover_route = Some("/covers/show.jpg".to_string());

        let channel = generate(&mut source).await;

        let image = channel.image().unwrap();
        assert_eq!(image.url(), "http://localhost:8080/covers/show.jpg");
        assert_eq!(
            channel.itunes_ext().unwrap().image(),
            Some("http://localhost:8080/covers/show.jpg")
        );
    }

    #[tokio::test]
    async fn absolute_cover_url_is_used_verbatim() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());
        source.cover_route = Some("https://cdn.example/art.png".to_string());

        let channel = generate(&mut source).await;
        assert_eq!(channel.image().unwrap().url(), "https://cdn.example/art.png");
    }

    #[tokio::test]
    async fn local_cover_jpg_is_served_when_nothing_is_resolved() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("cover.jpg"), b"img").unwrap();
        let mut source = make_source(dir.path());

        let channel = generate(&mut source).await;
        assert_eq!(
            channel.image().unwrap().url(),
            "http://localhost:8080/audio/show/cover.jpg"
        );
    }

    #[tokio::test]
    async fn default_cover_is_the_last_resort() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());

        let channel = generate(&mut source).await;
        assert_eq!(
            channel.image().unwrap().url(),
            "http://localhost:8080/default-cover.jpg"
        );
    }

    #[tokio::test]
    async fn cached_cover_survives_into_the_feed() {
        let dir = tempdir().unwrap();
        let cache = tempdir().unwrap();
        std::fs::write(cache.path().join("show.jpg"), b"cached art").unwrap();

        let mut config = AppConfig::default();
        config.covers.cache_dir = cache.path().to_path_buf();

        let mut source = make_source(dir.path());
        let channel = generate_with(&mut source, &config).await;

        assert_eq!(
            channel.image().unwrap().url(),
            "http://localhost:8080/covers/show.jpg"
        );
        assert_eq!(source.cover_route.as_deref(), Some("/covers/show.jpg"));
        assert_eq!(source.cover_path, Some(cache.path().join("show.jpg")));
    }

    // === Items ===

    #[tokio::test]
    async fn items_follow_episode_order_with_served_links() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("Episode 1.mp3"), b"aaaa").unwrap();
        std::fs::write(dir.path().join("Episode 2.mp3"), b"bbbb").unwrap();

        let mut source = make_source(dir.path());
        source.episodes = vec![
            make_episode(dir.path(), "Episode 1.mp3", 1_600_000_000),
            make_episode(dir.path(), "Episode 2.mp3", 1_700_000_000),
        ];

        let channel = generate(&mut source).await;

        let items = channel.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title(), Some("Episode 1"));
        assert_eq!(items[1].title(), Some("Episode 2"));
        assert_eq!(
            items[0].link(),
            Some("http://localhost:8080/audio/show/Episode%201.mp3")
        );

        let guid = items[0].guid().unwrap();
        assert_eq!(guid.value(), items[0].link().unwrap());
        assert!(guid.is_permalink());
    }

    #[tokio::test]
    async fn enclosure_carries_length_and_mime_type() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ep1.m4a"), b"0123456789").unwrap();

        let mut source = make_source(dir.path());
        source.episodes = vec![make_episode(dir.path(), "ep1.m4a", 1_700_000_000)];

        let channel = generate(&mut source).await;

        let enclosure = channel.items()[0].enclosure().unwrap();
        assert_eq!(enclosure.length(), "10");
        assert_eq!(enclosure.mime_type(), "audio/x-m4a");
        assert_eq!(
            enclosure.url(),
            "http://localhost:8080/audio/show/ep1.m4a"
        );
    }

    #[tokio::test]
    async fn missing_audio_file_degrades_to_a_zero_length() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());
        source.episodes = vec![make_episode(dir.path(), "ghost.mp3", 1_700_000_000)];

        let channel = generate(&mut source).await;

        let item = &channel.items()[0];
        assert_eq!(item.enclosure().unwrap().length(), "0");
        assert_eq!(item.description(), Some("ghost (0 B)"));
    }

    #[tokio::test]
    async fn full_mode_description_carries_the_size() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ep1.mp3"), vec![0u8; 1536]).unwrap();

        let mut source = make_source(dir.path());
        source.episodes = vec![make_episode(dir.path(), "ep1.mp3", 1_700_000_000)];

        let channel = generate(&mut source).await;
        assert_eq!(channel.items()[0].description(), Some("ep1 (1.50 KB)"));
    }

    #[tokio::test]
    async fn title_mode_description_is_the_bare_title() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ep1.mp3"), b"audio").unwrap();

        let mut config = offline_config();
        config.shownotes.verbosity = Verbosity::Title;

        let mut source = make_source(dir.path());
        source.episodes = vec![make_episode(dir.path(), "ep1.mp3", 1_700_000_000)];

        let channel = generate_with(&mut source, &config).await;

        let item = &channel.items()[0];
        assert_eq!(item.description(), Some("ep1"));
        assert_eq!(item.content(), Some("<p>ep1</p>"));
    }

    #[tokio::test]
    async fn content_and_itunes_block_carry_the_shownotes() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ep1.mp3"), b"audio").unwrap();

        let mut source = make_source(dir.path());
        source.episodes = vec![make_episode(dir.path(), "ep1.mp3", 1_700_000_000)];

        let channel = generate(&mut source).await;

        let item = &channel.items()[0];
        let content = item.content().unwrap();
        assert!(content.starts_with("<p>ep1</p>"));
        assert!(content.contains("<li>Podcast: My Show</li>"));

        let itunes = item.itunes_ext().unwrap();
        assert_eq!(itunes.subtitle(), Some("ep1"));
        assert!(itunes.summary().unwrap().starts_with("ep1\n"));
        assert_eq!(itunes.duration(), Some("0:00"));
        assert_eq!(itunes.explicit(), Some("false"));
        assert_eq!(itunes.episode_type(), Some("full"));
    }

    #[tokio::test]
    async fn item_pub_dates_are_rfc2822() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("ep1.mp3"), b"audio").unwrap();

        let mut source = make_source(dir.path());
        source.episodes = vec![make_episode(dir.path(), "ep1.mp3", 1_700_000_000)];

        let channel = generate(&mut source).await;

        let pub_date = channel.items()[0].pub_date().unwrap();
        let parsed = DateTime::parse_from_rfc2822(pub_date).unwrap();
        assert_eq!(parsed.timestamp(), 1_700_000_000);
    }

    // === Scanner integration ===

    #[tokio::test]
    async fn scanned_source_feeds_straight_into_generation() {
        let root = tempdir().unwrap();
        let dir = root.path().join("daily-news");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(
            dir.join("podcast.json"),
            r#"{"title": "Daily News", "author": "Newsroom"}"#,
        )
        .unwrap();
        std::fs::write(dir.join("monday.mp3"), b"audio").unwrap();

        let mut source = scan_source(&dir, "daily-news").unwrap();
        let channel = generate(&mut source).await;

        assert_eq!(channel.title(), "Daily News");
        assert_eq!(channel.items().len(), 1);
        assert_eq!(
            channel.items()[0].link(),
            Some("http://localhost:8080/audio/daily-news/monday.mp3")
        );
    }

    // === Author field ===

    #[test]
    fn author_field_combines_email_and_name() {
        let mut config = PodcastConfig {
            author: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            ..PodcastConfig::default()
        };
        assert_eq!(
            author_field(&config).as_deref(),
            Some("jane@example.com (Jane)")
        );

        config.author = String::new();
        assert_eq!(author_field(&config).as_deref(), Some("jane@example.com"));

        config.author = "Jane".to_string();
        config.email = String::new();
        assert_eq!(author_field(&config).as_deref(), Some("Jane"));

        config.author = String::new();
        assert_eq!(author_field(&config), None);
    }

    #[tokio::test]
    async fn absent_contact_data_leaves_author_fields_empty() {
        let dir = tempdir().unwrap();
        let mut source = make_source(dir.path());
        source.config.author = String::new();
        source.config.email = String::new();

        let channel = generate(&mut source).await;

        assert_eq!(channel.managing_editor(), None);
        let itunes = channel.itunes_ext().unwrap();
        assert_eq!(itunes.author(), None);
        assert!(itunes.owner().is_none());

        let copyright = channel.copyright().unwrap();
        assert!(copyright.ends_with("My Show"));
    }

    // === Episode paths outside the source dir ===

    #[tokio::test]
    async fn episode_size_is_read_from_its_own_path() {
        let dir = tempdir().unwrap();
        let elsewhere = tempdir().unwrap();
        std::fs::write(elsewhere.path().join("ep1.mp3"), b"12345").unwrap();

        let mut source = make_source(dir.path());
        source.episodes = vec![Episode {
            title: "ep1".to_string(),
            file_name: "ep1.mp3".to_string(),
            file_path: elsewhere.path().join("ep1.mp3"),
            pub_date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }];

        let channel = generate(&mut source).await;
        assert_eq!(channel.items()[0].enclosure().unwrap().length(), "5");
    }
}
