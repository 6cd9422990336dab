//! Intro module editor.

use backline_config::{IntroModule, MediaItem, RichText};

/// Field edits the intro form can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum IntroEdit {
    SetEnabled(bool),
    SetHeading(RichText),
    SetBody(RichText),
    SetMedia(Option<MediaItem>),
}

/// Apply one edit, returning the updated module.
pub fn apply(module: &IntroModule, edit: IntroEdit) -> IntroModule {
    let mut next = module.clone();
    match edit {
        IntroEdit::SetEnabled(enabled) => next.enabled = enabled,
        IntroEdit::SetHeading(heading) => next.heading = heading,
        IntroEdit::SetBody(body) => next.body = body,
        IntroEdit::SetMedia(media) => next.media = media,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_edits() {
        let module = IntroModule::default();

        let module = apply(&module, IntroEdit::SetEnabled(true));
        assert!(module.enabled);

        let module = apply(&module, IntroEdit::SetHeading("**Meet it**".into()));
        assert_eq!(module.heading.as_str(), "**Meet it**");

        let module = apply(
            &module,
            IntroEdit::SetMedia(Some(MediaItem::image("/images/hero.png"))),
        );
        assert!(module.media.is_some());

        let module = apply(&module, IntroEdit::SetMedia(None));
        assert!(module.media.is_none());
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let module = IntroModule::default();
        let _updated = apply(&module, IntroEdit::SetEnabled(true));
        assert!(!module.enabled);
    }
}
