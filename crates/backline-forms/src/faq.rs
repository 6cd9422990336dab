//! FAQ module editor: question/answer items.

use backline_config::{FaqItem, FaqModule, RichText};

use crate::array::{remove_at, update_at};

#[derive(Debug, Clone, PartialEq)]
pub enum FaqEdit {
    SetEnabled(bool),
    /// Append an empty item.
    AddItem,
    RemoveItem(usize),
    SetQuestion(usize, String),
    SetAnswer(usize, RichText),
}

pub fn apply(module: &FaqModule, edit: FaqEdit) -> FaqModule {
    let mut next = module.clone();
    match edit {
        FaqEdit::SetEnabled(enabled) => next.enabled = enabled,
        FaqEdit::AddItem => next.items.push(FaqItem::default()),
        FaqEdit::RemoveItem(i) => next.items = remove_at(&module.items, i),
        FaqEdit::SetQuestion(i, question) => {
            next.items = update_at(&module.items, i, |item| item.question = question);
        }
        FaqEdit::SetAnswer(i, answer) => {
            next.items = update_at(&module.items, i, |item| item.answer = answer);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lifecycle() {
        let module = apply(&FaqModule::default(), FaqEdit::AddItem);
        let module = apply(&module, FaqEdit::SetQuestion(0, "Latency?".into()));
        let module = apply(&module, FaqEdit::SetAnswer(0, "**Low.**".into()));
        assert_eq!(module.items[0].question, "Latency?");
        assert_eq!(module.items[0].answer.as_str(), "**Low.**");

        let module = apply(&module, FaqEdit::RemoveItem(0));
        assert!(module.items.is_empty());
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let module = FaqModule::default();
        assert_eq!(apply(&module, FaqEdit::SetQuestion(0, "q".into())), module);
    }
}
