//! The `ProductConfig` document and its content modules.
//!
//! Serialized as JSON (camelCase keys); absent modules are omitted rather
//! than written as null, so documents stay minimal.

use serde::{Deserialize, Serialize};

use crate::links::RelatedLink;
use crate::media::MediaItem;

/// A rich-text field: a markup-dialect string (see `backline-markup`).
///
/// Stored as a plain JSON string so the document needs no nested structure
/// for formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub String);

impl RichText {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render to HTML for previewing.
    pub fn to_html(&self) -> String {
        backline_markup::markup_to_html(&self.0)
    }

    /// Re-serialize through the AST, normalizing accumulated blank lines.
    pub fn canonicalize(&self) -> Self {
        Self(backline_markup::parse_markup(&self.0).to_markup())
    }
}

impl From<&str> for RichText {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The whole content document for one product page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConfig {
    pub info: ProductInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<IntroModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<ConceptModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<FaqModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<FunctionModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual: Option<ManualModule>,
}

/// Core product identity plus the floating info box and related links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Display name, e.g. "iD14 MKII".
    pub name: String,
    /// URL slug, e.g. "id14-mkii".
    pub slug: String,
    /// Brand key, e.g. "audient" or "hotone".
    pub brand: String,
    /// Hero media shown at the top of the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<MediaItem>,
    /// Label/value rows for the floating info box.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub info_box: Vec<InfoBoxField>,
    /// Related links rendered as buttons.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<RelatedLink>,
}

/// One label/value row in the floating info box.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoBoxField {
    pub label: String,
    pub value: String,
}

/// Intro block: heading, body copy, optional media.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroModule {
    pub enabled: bool,
    #[serde(default)]
    pub heading: RichText,
    #[serde(default)]
    pub body: RichText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaItem>,
}

/// Concept block: an ordered list of titled sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptModule {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<ConceptSection>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptSection {
    #[serde(default)]
    pub title: RichText,
    #[serde(default)]
    pub body: RichText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaItem>,
}

/// FAQ block: question/answer accordion items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqModule {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    #[serde(default)]
    pub answer: RichText,
}

/// Function block: named features with descriptions and optional media.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionModule {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<FunctionFeature>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionFeature {
    pub name: String,
    #[serde(default)]
    pub description: RichText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaItem>,
}

/// Manual block: the download itself goes through a `ManualProvider`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualModule {
    pub enabled: bool,
    /// Button label, e.g. "Download manual".
    #[serde(default)]
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaItem;

    fn sample_config() -> ProductConfig {
        ProductConfig {
            info: ProductInfo {
                name: "iD14 MKII".into(),
                slug: "id14-mkii".into(),
                brand: "audient".into(),
                hero: Some(MediaItem::image("/images/id14-hero.jpg")),
                info_box: vec![InfoBoxField {
                    label: "Inputs".into(),
                    value: "2".into(),
                }],
                links: Vec::new(),
            },
            intro: Some(IntroModule {
                enabled: true,
                heading: RichText::new("**Meet the iD14**"),
                body: RichText::new("A compact interface."),
                media: None,
            }),
            concept: None,
            faq: Some(FaqModule {
                enabled: true,
                items: vec![FaqItem {
                    question: "Does it need drivers?".into(),
                    answer: RichText::new("Only on <size:small>Windows</size>."),
                }],
            }),
            function: None,
            manual: Some(ManualModule {
                enabled: false,
                label: "Download manual".into(),
            }),
        }
    }

    #[test]
    fn test_json_round_trip() {
        let config = sample_config();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: ProductConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = sample_config();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"infoBox\""), "json was: {json}");
        assert!(!json.contains("info_box"));
    }

    #[test]
    fn test_absent_modules_are_omitted() {
        let json = serde_json::to_string(&sample_config()).unwrap();
        assert!(!json.contains("\"concept\""));
        assert!(!json.contains("\"function\""));
    }

    #[test]
    fn test_rich_text_is_a_plain_string() {
        let rt = RichText::new("**b**");
        assert_eq!(serde_json::to_string(&rt).unwrap(), "\"**b**\"");
    }

    #[test]
    fn test_rich_text_canonicalize() {
        let rt = RichText::new("a\n\n\n\nb");
        assert_eq!(rt.canonicalize().as_str(), "a\n\nb");
    }

    #[test]
    fn test_minimal_document_parses() {
        let json = r#"{"info":{"name":"X","slug":"x","brand":"hotone"}}"#;
        let config: ProductConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.info.brand, "hotone");
        assert!(config.intro.is_none());
    }
}
