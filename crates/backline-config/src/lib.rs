//! backline-config: the product-page content document model.
//!
//! A `ProductConfig` describes everything one product page renders: the
//! core product info plus a set of independently toggleable content
//! modules (intro, concept, FAQ, function list, manual). Rich-text fields
//! are stored as markup-dialect strings (see `backline-markup`); media
//! references are tagged unions over image/video sources.
//!
//! Persistence is a trait seam (`Loader`/`Saver`) with a file-backed
//! implementation; the actual storage system behind an installation is an
//! external contract.

pub mod classify;
pub mod error;
pub mod links;
pub mod manual;
pub mod media;
pub mod product;
pub mod store;
pub mod validate;

pub use classify::{MediaSource, PasteContent, PasteKind};
pub use error::ConfigError;
pub use links::{Icon, RelatedLink};
pub use manual::ManualProvider;
pub use media::{MediaItem, MediaKind};
pub use product::{
    ConceptModule, ConceptSection, FaqItem, FaqModule, FunctionFeature, FunctionModule,
    InfoBoxField, IntroModule, ManualModule, ProductConfig, ProductInfo, RichText,
};
pub use store::{FileStore, Loader, MemoryStore, Saver};
pub use validate::ValidationIssue;
