//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Catalog`], [`CatalogEntry`], [`EntryMeta`] - Ordered panel registries
//! - [`PanelKey`] - Closed sets of panels ([`Section`], [`Topic`])
//! - [`TabSelection`], [`GallerySelection`] - Router selection state

mod catalog;
mod section;
mod selection;
mod topic;

#[cfg(test)]
pub(crate) use catalog::tests as catalog_fixtures;
pub use catalog::{Catalog, CatalogEntry, EntryMeta, Level, PanelKey};
pub use section::Section;
pub use selection::{GallerySelection, GalleryView, TabSelection};
pub use topic::Topic;
