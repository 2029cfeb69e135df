//! Shownotes rendering: plain text and HTML descriptions for feed items

mod attachments;
mod format;

pub use attachments::{
    find_attachments, kind_for_extension, Attachment, AttachmentKind, SIDECAR_EXTENSIONS,
};
pub use format::{format_bytes, format_utc};

use crate::config::{InlineMode, ShownotesConfig, Verbosity};
use crate::library::{Episode, PodcastSource};

/// Rendered shownotes for one episode
#[derive(Debug, Clone)]
pub struct Shownotes {
    pub plain: String,
    pub html: String,
}

/// Build plain and HTML shownotes for one episode.
///
/// In `Title` mode the result is just the episode title and no sidecar
/// lookup happens at all. `Full` mode renders the metadata block and,
/// depending on the inline mode, embeds image and note attachments.
pub async fn build_shownotes(
    source: &PodcastSource,
    episode: &Episode,
    size_bytes: u64,
    audio_url: &str,
    base_url: &str,
    config: &ShownotesConfig,
) -> Shownotes {
    if config.verbosity == Verbosity::Title {
        return Shownotes {
            plain: episode.title.clone(),
            html: title_paragraph(&episode.title),
        };
    }

    let attachments = find_attachments(
        &source.dir_path,
        &episode.file_name,
        &source.dir_name,
        base_url,
        config.max_inline_chars,
    )
    .await;

    Shownotes {
        plain: render_plain(source, episode, size_bytes, audio_url, &attachments),
        html: render_html(
            source,
            episode,
            size_bytes,
            audio_url,
            &attachments,
            config.inline_attachments,
        ),
    }
}

fn title_paragraph(title: &str) -> String {
    format!("<p>{}</p>", html_escape::encode_text(title))
}

fn render_plain(
    source: &PodcastSource,
    episode: &Episode,
    size_bytes: u64,
    audio_url: &str,
    attachments: &[Attachment],
) -> String {
    let mut lines = vec![
        episode.title.clone(),
        String::new(),
        format!("Podcast: {}", source.config.title),
        format!("Published: {}", format_utc(&episode.pub_date)),
        format!("File: {}", episode.file_name),
        format!("Size: {}", format_bytes(size_bytes)),
        format!("Audio: {audio_url}"),
    ];

    if !attachments.is_empty() {
        let names: Vec<&str> = attachments.iter().map(|a| a.file_name.as_str()).collect();
        lines.push(format!("Attachments: {}", names.join(", ")));
    }

    lines.join("\n")
}

fn render_html(
    source: &PodcastSource,
    episode: &Episode,
    size_bytes: u64,
    audio_url: &str,
    attachments: &[Attachment],
    inline: InlineMode,
) -> String {
    let mut html = title_paragraph(&episode.title);

    html.push_str("\n<ul>\n");
    push_field(&mut html, "Podcast", &source.config.title);
    push_field(&mut html, "Published", &format_utc(&episode.pub_date));
    push_field(&mut html, "File", &episode.file_name);
    push_field(&mut html, "Size", &format_bytes(size_bytes));
    push_field(&mut html, "Audio", audio_url);

    if !attachments.is_empty() {
        html.push_str("<li>Attachments:<ul>\n");
        for attachment in attachments {
            html.push_str(&format!(
                "<li><a href=\"{}\">{}</a></li>\n",
                html_escape::encode_double_quoted_attribute(&attachment.url),
                html_escape::encode_text(&attachment.file_name),
            ));
        }
        html.push_str("</ul></li>\n");
    }

    html.push_str("</ul>");

    if matches!(inline, InlineMode::Images | InlineMode::All) {
        push_image_section(&mut html, attachments);
    }
    if inline == InlineMode::All {
        push_notes_section(&mut html, attachments);
    }

    html
}

fn push_field(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<li>{label}: {}</li>\n",
        html_escape::encode_text(value)
    ));
}

/// Image attachments as linked, width-constrained previews
fn push_image_section(html: &mut String, attachments: &[Attachment]) {
    let images = attachments.iter().filter(|a| a.kind == AttachmentKind::Image);

    let mut heading_written = false;
    for image in images {
        if !heading_written {
            html.push_str("\n<h3>Images</h3>");
            heading_written = true;
        }
        html.push_str(&format!(
            "\n<p><a href=\"{url}\"><img src=\"{url}\" alt=\"{alt}\" style=\"max-width:100%\"/></a></p>",
            url = html_escape::encode_double_quoted_attribute(&image.url),
            alt = html_escape::encode_double_quoted_attribute(&image.file_name),
        ));
    }
}

/// Text attachments as links, each followed by its inline content when present
fn push_notes_section(html: &mut String, attachments: &[Attachment]) {
    let notes = attachments.iter().filter(|a| a.kind == AttachmentKind::Text);

    let mut heading_written = false;
    for note in notes {
        if !heading_written {
            html.push_str("\n<h3>Notes</h3>");
            heading_written = true;
        }
        html.push_str(&format!(
            "\n<p><a href=\"{}\">{}</a></p>",
            html_escape::encode_double_quoted_attribute(&note.url),
            html_escape::encode_text(&note.file_name),
        ));
        if let Some(text) = note.inline_text.as_deref()
            && !text.is_empty()
        {
            html.push_str(&format!("\n<pre>{}</pre>", html_escape::encode_text(text)));
        }
    }
}
