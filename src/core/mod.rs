//! Core logic for the handbook.
//!
//! This module provides:
//! - [`load_catalogs`] parsing of the embedded catalog manifest
//! - [`error::CatalogError`] for manifest defects

pub mod error;
mod manifest;

pub use manifest::{Catalogs, load_catalogs};
