//! UI components built with Leptos.
//!
//! - [`Shell`] - App shell and top-level section router
//! - [`nav`] - Section navigation bar
//! - [`gallery`] - Nested topic router for the examples section
//! - [`panel`] - Markdown content panels
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod gallery;
pub mod icons;
pub mod nav;
pub mod panel;
mod shell;

pub use shell::Shell;
