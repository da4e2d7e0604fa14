//! Shared UI crate for SureScreen. Cross-platform views and the data core live here.

use dioxus::prelude::*;

/// Application theme stylesheet. The web shell links it; native shells embed
/// the same file with `include_str!` instead.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod analytics;
pub mod assessment;
pub mod core;
pub mod views;

mod theme;
pub use theme::{provide_theme, use_theme, ThemeMode};

pub mod components {
    // Shared application navbar with platform-registered links (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
