//! The manual-download contract.
//!
//! Product pages trigger manual downloads through an external collaborator
//! keyed by brand and slug. This crate only consumes the contract.

use url::Url;

/// Resolves the downloadable manual for a product, if one exists.
pub trait ManualProvider {
    fn manual_url(&self, brand: &str, slug: &str) -> Option<Url>;
}

/// Path-pattern provider for tests and previews:
/// `{base}/{brand}/{slug}/manual.pdf`.
#[derive(Debug, Clone)]
pub struct StaticManualProvider {
    base: Url,
}

impl StaticManualProvider {
    pub fn new(base: Url) -> Self {
        Self { base }
    }
}

impl ManualProvider for StaticManualProvider {
    fn manual_url(&self, brand: &str, slug: &str) -> Option<Url> {
        if brand.is_empty() || slug.is_empty() {
            return None;
        }
        self.base.join(&format!("{brand}/{slug}/manual.pdf")).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_builds_path() {
        let provider =
            StaticManualProvider::new(Url::parse("https://cdn.example.com/manuals/").unwrap());
        let url = provider.manual_url("audient", "id14-mkii").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/manuals/audient/id14-mkii/manual.pdf"
        );
    }

    #[test]
    fn test_empty_inputs_resolve_to_none() {
        let provider =
            StaticManualProvider::new(Url::parse("https://cdn.example.com/").unwrap());
        assert!(provider.manual_url("", "slug").is_none());
        assert!(provider.manual_url("brand", "").is_none());
    }
}
