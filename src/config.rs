//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Catalog manifest declaring the sections and interview topics.
pub const CATALOG_MANIFEST: &str = include_str!("../assets/catalog.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Title shown in the app header.
pub const APP_NAME: &str = "React TypeScript Complete Tutorial";

/// Subtitle shown under the title.
pub const APP_TAGLINE: &str = "Comprehensive guide for interview preparation";

/// Footer line.
pub const APP_FOOTER: &str = "React 18.3+ with TypeScript 5.6+ | Built with Leptos";

// =============================================================================
// Logging
// =============================================================================

/// Console log level. Selection changes log at debug.
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Warn
};

// =============================================================================
// UI Configuration
// =============================================================================

/// Viewports matching this query get short navigation labels.
pub const COMPACT_NAV_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
