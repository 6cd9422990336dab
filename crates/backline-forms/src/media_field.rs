//! Media upload field: a leaf widget over an optional media item.
//!
//! Source strings are classified on entry (YouTube links become embed
//! URLs, extensions pick image vs video) and normalized on blur. Display
//! flags only apply to the media kind they belong to; a mismatched toggle
//! is ignored.

use backline_config::classify::{
    MediaSource, PasteContent, classify_source, normalize_local_path, to_data_url,
};
use backline_config::{MediaItem, MediaKind};

#[derive(Debug, Clone, PartialEq)]
pub enum MediaFieldEdit {
    /// The source input changed.
    SetSource(String),
    /// Clipboard content arrived on the field.
    Paste(PasteContent),
    /// The source input lost focus - bare file names get rooted.
    NormalizeSource,
    ToggleTransparentBackground,
    ToggleAnimatedGif,
    Clear,
}

pub fn apply(field: &Option<MediaItem>, edit: MediaFieldEdit) -> Option<MediaItem> {
    match edit {
        MediaFieldEdit::SetSource(input) => set_source(field, &input),
        MediaFieldEdit::Paste(content) => match content {
            // A pasted image (screenshot) is stored inline.
            PasteContent::Image { mime, bytes } => {
                Some(MediaItem::image(to_data_url(&mime, &bytes)))
            }
            PasteContent::Text(text) => set_source(field, &text),
        },
        MediaFieldEdit::NormalizeSource => field.as_ref().map(|item| {
            let normalized = normalize_local_path(item.src());
            item.clone().with_src(normalized)
        }),
        MediaFieldEdit::ToggleTransparentBackground => field.clone().map(|item| match item {
            MediaItem::Image {
                src,
                transparent_background,
            } => MediaItem::Image {
                src,
                transparent_background: !transparent_background,
            },
            other => {
                tracing::debug!("transparent-background toggle on non-image ignored");
                other
            }
        }),
        MediaFieldEdit::ToggleAnimatedGif => field.clone().map(|item| match item {
            MediaItem::Video {
                src,
                as_animated_gif,
            } => MediaItem::Video {
                src,
                as_animated_gif: !as_animated_gif,
            },
            other => {
                tracing::debug!("animated-gif toggle on non-video ignored");
                other
            }
        }),
        MediaFieldEdit::Clear => None,
    }
}

fn set_source(field: &Option<MediaItem>, input: &str) -> Option<MediaItem> {
    let (src, kind) = match classify_source(input) {
        // Empty input leaves the field as it was.
        MediaSource::Empty => return field.clone(),
        MediaSource::Youtube { embed_url } => (embed_url, MediaKind::Video),
        MediaSource::DataUrl { kind } => (input.to_string(), kind),
        MediaSource::Remote { url, kind } => (url, kind),
        MediaSource::Local { path, kind } => (path, kind),
    };

    let same_kind = field.as_ref().is_some_and(|item| item.kind() == kind);
    if same_kind {
        // Keep the existing flags when only the source changed.
        return field.as_ref().map(|item| item.clone().with_src(src));
    }
    Some(match kind {
        MediaKind::Video => MediaItem::video(src),
        // Unknown sources preview as images until proven otherwise.
        MediaKind::Image | MediaKind::Unknown => MediaItem::image(src),
    })
}
