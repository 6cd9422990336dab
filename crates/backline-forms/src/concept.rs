//! Concept module editor: a list of titled sections.

use backline_config::{ConceptModule, ConceptSection, MediaItem, RichText};

use crate::array::{remove_at, update_at};

#[derive(Debug, Clone, PartialEq)]
pub enum ConceptEdit {
    SetEnabled(bool),
    /// Append an empty section.
    AddSection,
    RemoveSection(usize),
    SetSectionTitle(usize, RichText),
    SetSectionBody(usize, RichText),
    SetSectionMedia(usize, Option<MediaItem>),
}

pub fn apply(module: &ConceptModule, edit: ConceptEdit) -> ConceptModule {
    let mut next = module.clone();
    match edit {
        ConceptEdit::SetEnabled(enabled) => next.enabled = enabled,
        ConceptEdit::AddSection => next.sections.push(ConceptSection::default()),
        ConceptEdit::RemoveSection(i) => next.sections = remove_at(&module.sections, i),
        ConceptEdit::SetSectionTitle(i, title) => {
            next.sections = update_at(&module.sections, i, |s| s.title = title);
        }
        ConceptEdit::SetSectionBody(i, body) => {
            next.sections = update_at(&module.sections, i, |s| s.body = body);
        }
        ConceptEdit::SetSectionMedia(i, media) => {
            next.sections = update_at(&module.sections, i, |s| s.media = media);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edit_remove_section() {
        let module = ConceptModule::default();

        let module = apply(&module, ConceptEdit::AddSection);
        let module = apply(&module, ConceptEdit::AddSection);
        assert_eq!(module.sections.len(), 2);

        let module = apply(
            &module,
            ConceptEdit::SetSectionTitle(1, "<size:h2>Design</size>".into()),
        );
        assert_eq!(module.sections[1].title.as_str(), "<size:h2>Design</size>");
        assert!(module.sections[0].title.is_empty());

        let module = apply(&module, ConceptEdit::RemoveSection(0));
        assert_eq!(module.sections.len(), 1);
        assert_eq!(module.sections[0].title.as_str(), "<size:h2>Design</size>");
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let module = apply(&ConceptModule::default(), ConceptEdit::AddSection);
        let same = apply(&module, ConceptEdit::SetSectionBody(5, "x".into()));
        assert_eq!(same, module);
        let same = apply(&module, ConceptEdit::RemoveSection(5));
        assert_eq!(same, module);
    }
}
