//! Inline AST for the markup dialect.
//!
//! The dialect is deliberately tiny: bold, six discrete size levels, a
//! foreground color, and hard line breaks. Anything else is literal text.

use smol_str::SmolStr;

use crate::error::MarkupError;

/// One inline node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    /// Literal text (unescaped; escaping happens at render time).
    Text(SmolStr),
    /// Hard line break (`\n` in markup, `<br>` in HTML).
    Break,
    /// Bold span.
    Bold(Vec<Inline>),
    /// Sized span - one of the six discrete levels.
    Sized(Size, Vec<Inline>),
    /// Colored span with an arbitrary CSS color literal.
    Colored(Color, Vec<Inline>),
}

impl Inline {
    /// Create a text node.
    pub fn text(s: impl Into<SmolStr>) -> Self {
        Self::Text(s.into())
    }
}

/// The six size levels the toolbar offers.
///
/// `Small`/`Normal`/`Large` render as legacy `<font>` sizes, the heading
/// levels as `<h1>`-`<h3>`. `Large` and `H2` share a slot on the way back
/// from HTML; see `crate::html_parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    Small,
    Normal,
    Large,
    H1,
    H2,
    H3,
}

impl Size {
    /// All levels, in toolbar order.
    pub const ALL: [Size; 6] = [
        Size::Small,
        Size::Normal,
        Size::Large,
        Size::H1,
        Size::H2,
        Size::H3,
    ];

    /// The keyword used inside `<size:..>` markers.
    pub fn keyword(self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Normal => "normal",
            Size::Large => "large",
            Size::H1 => "h1",
            Size::H2 => "h2",
            Size::H3 => "h3",
        }
    }

    /// Parse a `<size:..>` keyword.
    pub fn from_keyword(key: &str) -> Result<Self, MarkupError> {
        match key {
            "small" => Ok(Size::Small),
            "normal" => Ok(Size::Normal),
            "large" => Ok(Size::Large),
            "h1" => Ok(Size::H1),
            "h2" => Ok(Size::H2),
            "h3" => Ok(Size::H3),
            other => Err(MarkupError::UnknownSize(other.into())),
        }
    }

    /// Legacy `<font size="..">` value for the non-heading levels.
    pub fn font_size(self) -> Option<u8> {
        match self {
            Size::Small => Some(2),
            Size::Normal => Some(3),
            Size::Large => Some(5),
            Size::H1 | Size::H2 | Size::H3 => None,
        }
    }

    /// Heading tag name for the heading levels.
    pub fn heading_tag(self) -> Option<&'static str> {
        match self {
            Size::H1 => Some("h1"),
            Size::H2 => Some("h2"),
            Size::H3 => Some("h3"),
            _ => None,
        }
    }
}

/// A CSS color literal, e.g. `#ff0000` or `rebeccapurple`.
///
/// Validated to be non-empty and safe to embed in a style attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(SmolStr);

impl Color {
    pub fn new(value: &str) -> Result<Self, MarkupError> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.chars().any(|c| matches!(c, '<' | '>' | '"' | '\n')) {
            return Err(MarkupError::InvalidColor(value.into()));
        }
        Ok(Self(SmolStr::new(trimmed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A parsed rich-text fragment - the unit of transcoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fragment {
    pub inlines: Vec<Inline>,
}

impl Fragment {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }

    pub fn is_empty(&self) -> bool {
        self.inlines.is_empty()
    }

    /// Concatenated text content, markers stripped. Breaks count as `\n`.
    pub fn plain_text(&self) -> String {
        fn walk(nodes: &[Inline], out: &mut String) {
            for node in nodes {
                match node {
                    Inline::Text(t) => out.push_str(t),
                    Inline::Break => out.push('\n'),
                    Inline::Bold(children)
                    | Inline::Sized(_, children)
                    | Inline::Colored(_, children) => walk(children, out),
                }
            }
        }
        let mut out = String::new();
        walk(&self.inlines, &mut out);
        out
    }
}

impl From<Vec<Inline>> for Fragment {
    fn from(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_keyword_round_trip() {
        for size in Size::ALL {
            assert_eq!(Size::from_keyword(size.keyword()).unwrap(), size);
        }
        assert!(Size::from_keyword("huge").is_err());
    }

    #[test]
    fn test_font_size_mapping() {
        assert_eq!(Size::Small.font_size(), Some(2));
        assert_eq!(Size::Normal.font_size(), Some(3));
        assert_eq!(Size::Large.font_size(), Some(5));
        assert_eq!(Size::H1.font_size(), None);
        assert_eq!(Size::H2.heading_tag(), Some("h2"));
    }

    #[test]
    fn test_color_validation() {
        assert_eq!(Color::new(" #ff0000 ").unwrap().as_str(), "#ff0000");
        assert!(Color::new("").is_err());
        assert!(Color::new("red\"onload").is_err());
    }

    #[test]
    fn test_plain_text() {
        let frag = Fragment::new(vec![
            Inline::Bold(vec![Inline::text("Hello")]),
            Inline::Break,
            Inline::text("World"),
        ]);
        assert_eq!(frag.plain_text(), "Hello\nWorld");
    }
}
