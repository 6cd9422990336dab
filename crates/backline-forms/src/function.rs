//! Function module editor: the product feature list.

use backline_config::{FunctionFeature, FunctionModule, MediaItem, RichText};

use crate::array::{remove_at, update_at};

#[derive(Debug, Clone, PartialEq)]
pub enum FunctionEdit {
    SetEnabled(bool),
    /// Append an empty feature.
    AddFeature,
    RemoveFeature(usize),
    SetFeatureName(usize, String),
    SetFeatureDescription(usize, RichText),
    SetFeatureMedia(usize, Option<MediaItem>),
}

pub fn apply(module: &FunctionModule, edit: FunctionEdit) -> FunctionModule {
    let mut next = module.clone();
    match edit {
        FunctionEdit::SetEnabled(enabled) => next.enabled = enabled,
        FunctionEdit::AddFeature => next.features.push(FunctionFeature::default()),
        FunctionEdit::RemoveFeature(i) => next.features = remove_at(&module.features, i),
        FunctionEdit::SetFeatureName(i, name) => {
            next.features = update_at(&module.features, i, |f| f.name = name);
        }
        FunctionEdit::SetFeatureDescription(i, description) => {
            next.features = update_at(&module.features, i, |f| f.description = description);
        }
        FunctionEdit::SetFeatureMedia(i, media) => {
            next.features = update_at(&module.features, i, |f| f.media = media);
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_lifecycle() {
        let module = apply(&FunctionModule::default(), FunctionEdit::AddFeature);
        let module = apply(&module, FunctionEdit::SetFeatureName(0, "Looper".into()));
        let module = apply(
            &module,
            FunctionEdit::SetFeatureMedia(0, Some(MediaItem::video("/videos/looper.mp4"))),
        );
        assert_eq!(module.features[0].name, "Looper");
        assert_eq!(
            module.features[0].media.as_ref().map(|m| m.src()),
            Some("/videos/looper.mp4")
        );
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let module = FunctionModule::default();
        assert_eq!(
            apply(&module, FunctionEdit::RemoveFeature(3)),
            module
        );
    }
}
