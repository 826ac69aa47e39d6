//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuBookOpen as Book, LuChevronLeft as ChevronLeft,
        LuLightbulb as Tip,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsBook as Book, BsChevronLeft as ChevronLeft,
        BsLightbulb as Tip,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(BOOK, Book);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(TIP, Tip);
