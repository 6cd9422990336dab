//! Structural validation of product documents.
//!
//! Collects every issue instead of failing on the first, so the CLI can
//! report them all in one pass.

use std::fmt;

use crate::product::ProductConfig;

/// One problem found in a document, with a field path for context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path to the offending field, e.g. `info.slug`.
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

impl ProductConfig {
    /// Check the document structure. Returns every issue found.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let mut issues = Vec::new();

        if self.info.name.trim().is_empty() {
            issues.push(ValidationIssue::new("info.name", "must not be empty"));
        }
        if self.info.slug.is_empty() {
            issues.push(ValidationIssue::new("info.slug", "must not be empty"));
        } else if !is_valid_slug(&self.info.slug) {
            issues.push(ValidationIssue::new(
                "info.slug",
                "must be lowercase alphanumerics and hyphens",
            ));
        }
        if self.info.brand.trim().is_empty() {
            issues.push(ValidationIssue::new("info.brand", "must not be empty"));
        }

        for (i, link) in self.info.links.iter().enumerate() {
            if link.url.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    format!("info.links[{i}].url"),
                    "must not be empty",
                ));
            }
        }

        if let Some(faq) = &self.faq {
            for (i, item) in faq.items.iter().enumerate() {
                if item.question.trim().is_empty() {
                    issues.push(ValidationIssue::new(
                        format!("faq.items[{i}].question"),
                        "must not be empty",
                    ));
                }
            }
        }

        if let Some(function) = &self.function {
            for (i, feature) in function.features.iter().enumerate() {
                if feature.name.trim().is_empty() {
                    issues.push(ValidationIssue::new(
                        format!("function.features[{i}].name"),
                        "must not be empty",
                    ));
                }
            }
        }

        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::links::RelatedLink;
    use crate::product::{FaqItem, FaqModule, ProductInfo};

    fn valid_config() -> ProductConfig {
        ProductConfig {
            info: ProductInfo {
                name: "Ampero II".into(),
                slug: "ampero-2".into(),
                brand: "hotone".into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_document() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_collects_multiple_issues() {
        let mut config = valid_config();
        config.info.name.clear();
        config.info.brand = "  ".into();
        let issues = config.validate().unwrap_err();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].path, "info.name");
        assert_eq!(issues[1].path, "info.brand");
    }

    #[test]
    fn test_slug_shape() {
        let mut config = valid_config();
        for bad in ["Ampero", "ampero 2", "-ampero", "ampero-"] {
            config.info.slug = bad.into();
            assert!(config.validate().is_err(), "slug {bad:?} should fail");
        }
        config.info.slug = "ampero-2".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_link_url() {
        let mut config = valid_config();
        config.info.links.push(RelatedLink::new("Docs", ""));
        let issues = config.validate().unwrap_err();
        assert_eq!(issues[0].path, "info.links[0].url");
    }

    #[test]
    fn test_empty_faq_question() {
        let mut config = valid_config();
        config.faq = Some(FaqModule {
            enabled: true,
            items: vec![FaqItem {
                question: String::new(),
                answer: "a".into(),
            }],
        });
        let issues = config.validate().unwrap_err();
        assert_eq!(issues[0].path, "faq.items[0].question");
    }
}
