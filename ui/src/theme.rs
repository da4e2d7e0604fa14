//! Dark-mode flag shared across the page tree via context.
//!
//! Platforms install the signal at their root; the navbar toggles it and the
//! page shell reads it. No other shared mutable state crosses pages.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Class applied to the app shell; the stylesheet keys off it.
    pub fn shell_class(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
        }
    }
}

/// Installs the theme signal at a platform root. Call once per launch.
pub fn provide_theme() -> Signal<ThemeMode> {
    use_context_provider(|| Signal::new(ThemeMode::Light))
}

/// Theme signal for descendants of a platform root.
pub fn use_theme() -> Signal<ThemeMode> {
    use_context::<Signal<ThemeMode>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn shell_classes_are_distinct() {
        assert_ne!(
            ThemeMode::Light.shell_class(),
            ThemeMode::Dark.shell_class()
        );
    }
}
