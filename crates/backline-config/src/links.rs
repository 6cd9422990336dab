//! Related links and the closed icon set.

use serde::{Deserialize, Serialize};

/// A link button: display label, target, optional icon.
///
/// The target may be an absolute URL or an in-page anchor (`#section`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedLink {
    pub text: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl RelatedLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Whether the target is an in-page anchor rather than a URL.
    pub fn is_anchor(&self) -> bool {
        self.url.starts_with('#')
    }
}

/// The nine icons link buttons can carry, referenced by string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Document,
    UserFilled,
    UserOutline,
    Settings,
    Info,
    Download,
    Link,
    Arrow,
    Dot,
}

impl Icon {
    pub const ALL: [Icon; 9] = [
        Icon::Document,
        Icon::UserFilled,
        Icon::UserOutline,
        Icon::Settings,
        Icon::Info,
        Icon::Download,
        Icon::Link,
        Icon::Arrow,
        Icon::Dot,
    ];

    /// The stored string key for this icon.
    pub fn key(self) -> &'static str {
        match self {
            Icon::Document => "document",
            Icon::UserFilled => "user-filled",
            Icon::UserOutline => "user-outline",
            Icon::Settings => "settings",
            Icon::Info => "info",
            Icon::Download => "download",
            Icon::Link => "link",
            Icon::Arrow => "arrow",
            Icon::Dot => "dot",
        }
    }

    /// Look up an icon by its stored key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.key() == key)
    }
}
