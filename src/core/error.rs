//! Error types for catalog loading.
//!
//! The manifest is compiled into the binary, so every variant here points
//! at a defect in `assets/catalog.toml` rather than a runtime condition.

use thiserror::Error;

/// Errors raised while parsing or validating a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Manifest is not valid TOML or has wrong field types
    #[error("invalid catalog manifest: {0}")]
    Parse(String),

    /// Catalog declares no entries
    #[error("{catalog} catalog has no entries")]
    Empty { catalog: &'static str },

    /// Two entries share an id
    #[error("{catalog} catalog declares id '{id}' more than once")]
    DuplicateId { catalog: &'static str, id: String },

    /// An id with no matching panel
    #[error("{catalog} catalog entry '{id}' has no panel")]
    UnknownPanel { catalog: &'static str, id: String },

    /// Configured default id is not in the catalog
    #[error("{catalog} catalog default '{id}' is not an entry")]
    UnknownDefault { catalog: &'static str, id: String },
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}
