//! Utility modules for rendering and display.
//!
//! Provides:
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`format`] - Label and badge formatting

pub mod format;
mod markdown;

pub use markdown::markdown_to_html;
