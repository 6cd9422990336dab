//! backline-forms: module editors as pure edit operations.
//!
//! Each editor in the original admin UI bound a form to one config module
//! and produced an updated module on every field change. Here that is a
//! pure function per module: `apply(&module, edit) -> module`
//! (copy-and-replace, so callers keep the old value for undo or diffing).
//!
//! Array items are addressed by index, append/remove only - no stable
//! identity, no reordering. An out-of-range index leaves the module
//! unchanged rather than erroring.

pub mod concept;
pub mod config_edit;
pub mod faq;
pub mod function;
pub mod intro;
pub mod links;
pub mod media_field;
pub mod product_info;

mod array;

pub use concept::ConceptEdit;
pub use config_edit::{ConfigEdit, ManualEdit};
pub use faq::FaqEdit;
pub use function::FunctionEdit;
pub use intro::IntroEdit;
pub use links::LinkButtonEdit;
pub use media_field::MediaFieldEdit;
pub use product_info::ProductInfoEdit;
