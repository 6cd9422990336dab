//! The top-level product editor: routes module edits into a whole
//! `ProductConfig`, creating a module with defaults the first time an
//! edit addresses it.

use backline_config::ProductConfig;

use crate::concept::{self, ConceptEdit};
use crate::faq::{self, FaqEdit};
use crate::function::{self, FunctionEdit};
use crate::intro::{self, IntroEdit};
use crate::product_info::{self, ProductInfoEdit};

/// Manual module edits (small enough to live with the router).
#[derive(Debug, Clone, PartialEq)]
pub enum ManualEdit {
    SetEnabled(bool),
    SetLabel(String),
}

/// An edit addressed to one part of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigEdit {
    Info(ProductInfoEdit),
    Intro(IntroEdit),
    Concept(ConceptEdit),
    Faq(FaqEdit),
    Function(FunctionEdit),
    Manual(ManualEdit),
}

/// Apply one edit, returning the updated document.
pub fn apply(config: &ProductConfig, edit: ConfigEdit) -> ProductConfig {
    let mut next = config.clone();
    match edit {
        ConfigEdit::Info(edit) => next.info = product_info::apply(&config.info, edit),
        ConfigEdit::Intro(edit) => {
            let module = config.intro.clone().unwrap_or_default();
            next.intro = Some(intro::apply(&module, edit));
        }
        ConfigEdit::Concept(edit) => {
            let module = config.concept.clone().unwrap_or_default();
            next.concept = Some(concept::apply(&module, edit));
        }
        ConfigEdit::Faq(edit) => {
            let module = config.faq.clone().unwrap_or_default();
            next.faq = Some(faq::apply(&module, edit));
        }
        ConfigEdit::Function(edit) => {
            let module = config.function.clone().unwrap_or_default();
            next.function = Some(function::apply(&module, edit));
        }
        ConfigEdit::Manual(edit) => {
            let mut module = config.manual.clone().unwrap_or_default();
            match edit {
                ManualEdit::SetEnabled(enabled) => module.enabled = enabled,
                ManualEdit::SetLabel(label) => module.label = label,
            }
            next.manual = Some(module);
        }
    }
    next
}

/// Convenience: apply a sequence of edits in order.
pub fn apply_all(
    config: &ProductConfig,
    edits: impl IntoIterator<Item = ConfigEdit>,
) -> ProductConfig {
    edits
        .into_iter()
        .fold(config.clone(), |acc, edit| apply(&acc, edit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::faq::FaqEdit;

    #[test]
    fn test_edit_creates_absent_module() {
        let config = ProductConfig::default();
        assert!(config.faq.is_none());

        let config = apply(&config, ConfigEdit::Faq(FaqEdit::AddItem));
        let faq = config.faq.as_ref().unwrap();
        assert_eq!(faq.items.len(), 1);
        assert!(!faq.enabled);
    }

    #[test]
    fn test_manual_edits() {
        let config = apply(
            &ProductConfig::default(),
            ConfigEdit::Manual(ManualEdit::SetEnabled(true)),
        );
        let config = apply(
            &config,
            ConfigEdit::Manual(ManualEdit::SetLabel("Download manual".into())),
        );
        let manual = config.manual.as_ref().unwrap();
        assert!(manual.enabled);
        assert_eq!(manual.label, "Download manual");
    }

    #[test]
    fn test_apply_all_in_order() {
        let config = apply_all(
            &ProductConfig::default(),
            [
                ConfigEdit::Faq(FaqEdit::AddItem),
                ConfigEdit::Faq(FaqEdit::SetQuestion(0, "Power?".into())),
                ConfigEdit::Info(ProductInfoEdit::SetName("iD24".into())),
            ],
        );
        assert_eq!(config.faq.unwrap().items[0].question, "Power?");
        assert_eq!(config.info.name, "iD24");
    }
}
