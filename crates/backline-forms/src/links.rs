//! Link button editor: a leaf widget over a list of related links.

use backline_config::{Icon, RelatedLink};

use crate::array::{remove_at, update_at};

#[derive(Debug, Clone, PartialEq)]
pub enum LinkButtonEdit {
    /// Append an empty link.
    Add,
    Remove(usize),
    SetText(usize, String),
    SetUrl(usize, String),
    SetIcon(usize, Option<Icon>),
}

pub fn apply(links: &[RelatedLink], edit: LinkButtonEdit) -> Vec<RelatedLink> {
    match edit {
        LinkButtonEdit::Add => {
            let mut next = links.to_vec();
            next.push(RelatedLink::default());
            next
        }
        LinkButtonEdit::Remove(i) => remove_at(links, i),
        LinkButtonEdit::SetText(i, text) => update_at(links, i, |link| link.text = text),
        LinkButtonEdit::SetUrl(i, url) => update_at(links, i, |link| link.url = url),
        LinkButtonEdit::SetIcon(i, icon) => update_at(links, i, |link| link.icon = icon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_lifecycle() {
        let links = apply(&[], LinkButtonEdit::Add);
        let links = apply(&links, LinkButtonEdit::SetText(0, "Manual".into()));
        let links = apply(&links, LinkButtonEdit::SetUrl(0, "#manual".into()));
        let links = apply(&links, LinkButtonEdit::SetIcon(0, Some(Icon::Download)));

        assert_eq!(links[0].text, "Manual");
        assert!(links[0].is_anchor());
        assert_eq!(links[0].icon, Some(Icon::Download));

        let links = apply(&links, LinkButtonEdit::SetIcon(0, None));
        assert_eq!(links[0].icon, None);

        assert!(apply(&links, LinkButtonEdit::Remove(0)).is_empty());
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let links = vec![RelatedLink::new("a", "#a")];
        assert_eq!(apply(&links, LinkButtonEdit::SetUrl(9, "#b".into())), links);
    }
}
