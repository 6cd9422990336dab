//! Product info editor: name, slug, brand, hero media, info box, links.

use backline_config::{InfoBoxField, MediaItem, ProductInfo};

use crate::array::{remove_at, update_at};
use crate::links::{self, LinkButtonEdit};

#[derive(Debug, Clone, PartialEq)]
pub enum ProductInfoEdit {
    SetName(String),
    SetSlug(String),
    SetBrand(String),
    SetHero(Option<MediaItem>),
    /// Append an empty info-box row.
    AddInfoField,
    RemoveInfoField(usize),
    SetInfoFieldLabel(usize, String),
    SetInfoFieldValue(usize, String),
    /// Edits routed to the embedded link button editor.
    Links(LinkButtonEdit),
}

pub fn apply(info: &ProductInfo, edit: ProductInfoEdit) -> ProductInfo {
    let mut next = info.clone();
    match edit {
        ProductInfoEdit::SetName(name) => next.name = name,
        ProductInfoEdit::SetSlug(slug) => next.slug = slug,
        ProductInfoEdit::SetBrand(brand) => next.brand = brand,
        ProductInfoEdit::SetHero(hero) => next.hero = hero,
        ProductInfoEdit::AddInfoField => next.info_box.push(InfoBoxField::default()),
        ProductInfoEdit::RemoveInfoField(i) => next.info_box = remove_at(&info.info_box, i),
        ProductInfoEdit::SetInfoFieldLabel(i, label) => {
            next.info_box = update_at(&info.info_box, i, |field| field.label = label);
        }
        ProductInfoEdit::SetInfoFieldValue(i, value) => {
            next.info_box = update_at(&info.info_box, i, |field| field.value = value);
        }
        ProductInfoEdit::Links(edit) => next.links = links::apply(&info.links, edit),
    }
    next
}
