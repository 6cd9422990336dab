//! Media references: a tagged union over image and video sources.
//!
//! The tag decides which display flags exist, so a flag can never be set
//! on the wrong kind of media.

use serde::{Deserialize, Serialize};

/// A media asset referenced from a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MediaItem {
    #[serde(rename_all = "camelCase")]
    Image {
        /// Path, URL, or data URL of the image.
        src: String,
        /// Render without a backdrop (PNG with alpha).
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        transparent_background: bool,
    },
    #[serde(rename_all = "camelCase")]
    Video {
        /// Path, URL, or data URL of the video.
        src: String,
        /// Loop muted and inline, like an animated GIF.
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        as_animated_gif: bool,
    },
}

impl MediaItem {
    pub fn image(src: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            transparent_background: false,
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self::Video {
            src: src.into(),
            as_animated_gif: false,
        }
    }

    pub fn src(&self) -> &str {
        match self {
            Self::Image { src, .. } | Self::Video { src, .. } => src,
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Image { .. } => MediaKind::Image,
            Self::Video { .. } => MediaKind::Video,
        }
    }

    /// Replace the source, keeping the flags when the kind is unchanged.
    pub fn with_src(self, new_src: impl Into<String>) -> Self {
        match self {
            Self::Image {
                transparent_background,
                ..
            } => Self::Image {
                src: new_src.into(),
                transparent_background,
            },
            Self::Video {
                as_animated_gif, ..
            } => Self::Video {
                src: new_src.into(),
                as_animated_gif,
            },
        }
    }
}

/// What kind of media a source refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Unknown,
}
