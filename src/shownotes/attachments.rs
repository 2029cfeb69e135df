// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::urls;

/// Sidecar extensions probed next to each audio file, in presentation order
pub const SIDECAR_EXTENSIONS: [&str; 12] = [
    "pdf", "doc", "docx", "epub", "mobi", "azw3", "txt", "md", "jpg", "jpeg", "png", "webp",
];

/// Classification of a sidecar file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Text,
    Pdf,
    Doc,
    Other,
}

/// A supplementary file found next to an episode's audio file
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    /// Served URL of the file
    pub url: String,
    pub kind: AttachmentKind,
    /// Truncated file content, populated for `Text` attachments only
    pub inline_text: Option<String>,
}

pub fn kind_for_extension(extension: &str) -> AttachmentKind {
    match extension {
        "jpg" | "jpeg" | "png" | "webp" => AttachmentKind::Image,
        "txt" | "md" => AttachmentKind::Text,
        "pdf" => AttachmentKind::Pdf,
        "doc" | "docx" => AttachmentKind::Doc,
        _ => AttachmentKind::Other,
    }
}

/// Probe for sidecar files sharing the audio file's stem.
///
/// The probe list is fixed, so the result order is deterministic and
/// independent of filesystem enumeration order. Text attachments carry
/// their content inline, truncated to `max_chars` characters; unreadable
/// text files keep an empty inline text instead of being dropped.
pub async fn find_attachments(
    dir_path: &Path,
    audio_file_name: &str,
    dir_name: &str,
    base_url: &str,
    max_chars: usize,
) -> Vec<Attachment> {
    let stem = Path::new(audio_file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(audio_file_name);

    let mut attachments = Vec::new();

    for ext in SIDECAR_EXTENSIONS {
        let file_name = format!("{stem}.{ext}");
        let path = dir_path.join(&file_name);

        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            continue;
        }

        let kind = kind_for_extension(ext);
        let inline_text = match kind {
            AttachmentKind::Text => Some(read_inline_text(&path, max_chars).await),
            _ => None,
        };

        attachments.push(Attachment {
            url: urls::audio_url(base_url, dir_name, &file_name),
            file_name,
            kind,
            inline_text,
        });
    }

    attachments
}

/// Read the head of a text sidecar, truncated to a character budget.
///
/// Reads at most four bytes per allowed character before decoding, the
/// UTF-8 worst case, with a 1 KiB floor.
async fn read_inline_text(path: &Path, max_chars: usize) -> String {
    let budget = std::cmp::max(1024, max_chars.saturating_mul(4)) as u64;

    let Ok(file) = File::open(path).await else {
        return String::new();
    };

    let mut buffer = Vec::new();
    if file.take(budget).read_to_end(&mut buffer).await.is_err() {
        return String::new();
    }

    let text = String::from_utf8_lossy(&buffer);
    text.chars().take(max_chars).collect()
}
