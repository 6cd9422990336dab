//! Media source classification.
//!
//! The upload field accepts free-form input: a pasted YouTube link, a data
//! URL, a remote URL, a bare file name. Classification decides how the
//! preview renders (iframe / img / video) and how the source is stored.
//! Malformed or empty input is tolerated, never an error.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use url::Url;

use crate::media::MediaKind;

/// Where a media source points, and how to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Empty or whitespace-only input.
    Empty,
    /// A YouTube watch/share link, normalized to its embed URL (iframe).
    Youtube { embed_url: String },
    /// An inline `data:` URL.
    DataUrl { kind: MediaKind },
    /// An absolute http(s) URL.
    Remote { url: String, kind: MediaKind },
    /// A site-local path.
    Local { path: String, kind: MediaKind },
}

/// Classify a raw source string.
pub fn classify_source(input: &str) -> MediaSource {
    let input = input.trim();
    if input.is_empty() {
        return MediaSource::Empty;
    }

    if let Some(rest) = input.strip_prefix("data:") {
        let mime = rest.split([';', ',']).next().unwrap_or("");
        return MediaSource::DataUrl {
            kind: kind_from_mime(mime),
        };
    }

    if let Ok(url) = Url::parse(input) {
        if matches!(url.scheme(), "http" | "https") {
            if let Some(embed_url) = youtube_embed_url(&url) {
                return MediaSource::Youtube { embed_url };
            }
            return MediaSource::Remote {
                url: input.to_string(),
                kind: media_kind_for_path(url.path()),
            };
        }
    }

    MediaSource::Local {
        path: input.to_string(),
        kind: media_kind_for_path(input),
    }
}

/// Turn a YouTube watch/share/embed URL into the canonical embed URL.
fn youtube_embed_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    let video_id = if host == "youtu.be" {
        url.path_segments()?.next().map(str::to_string)
    } else if host == "youtube.com" || host.ends_with(".youtube.com") {
        if url.path() == "/watch" {
            url.query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())
        } else {
            url.path().strip_prefix("/embed/").map(str::to_string)
        }
    } else {
        None
    }?;

    let video_id = video_id.trim_matches('/');
    if video_id.is_empty()
        || !video_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return None;
    }
    Some(format!("https://www.youtube.com/embed/{video_id}"))
}

/// Infer image/video from the file extension.
pub fn media_kind_for_path(path: &str) -> MediaKind {
    let guess = mime_guess::from_path(path);
    match guess.first() {
        Some(mime) => kind_from_mime(mime.essence_str()),
        None => MediaKind::Unknown,
    }
}

fn kind_from_mime(mime: &str) -> MediaKind {
    if mime.starts_with("image/") {
        MediaKind::Image
    } else if mime.starts_with("video/") {
        MediaKind::Video
    } else {
        MediaKind::Unknown
    }
}

/// Root a bare relative image path under `/images/` (applied on blur).
///
/// Already-rooted paths, URLs, data URLs, and anchors pass through; empty
/// input returns early unchanged.
pub fn normalize_local_path(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return input.to_string();
    }
    if trimmed.starts_with('/')
        || trimmed.starts_with('#')
        || trimmed.starts_with("data:")
        || trimmed.contains("://")
    {
        return trimmed.to_string();
    }
    format!("/images/{trimmed}")
}

/// Encode raw bytes as a `data:` URL (the file-picker path).
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

/// What arrived on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteContent {
    /// Raw image bytes (e.g. a screenshot) with their MIME type.
    Image { mime: String, bytes: Vec<u8> },
    /// Plain text - treated as a source string.
    Text(String),
}

/// How a paste should be applied to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteKind {
    /// Store the pasted image inline as a data URL.
    InlineImage { data_url: String },
    /// Classify the pasted text as a source.
    Source(MediaSource),
}

/// Decide what to do with clipboard content.
pub fn classify_paste(content: PasteContent) -> PasteKind {
    match content {
        PasteContent::Image { mime, bytes } => PasteKind::InlineImage {
            data_url: to_data_url(&mime, &bytes),
        },
        PasteContent::Text(text) => PasteKind::Source(classify_source(&text)),
    }
}
