use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::theme::ThemeMode;

// Navbar stylesheet (shared across platforms; inlined for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each closure receives the label to render and returns a link that already
/// contains that label as its child, preserving styling. Register the builder
/// before rendering the root (top of the platform's `App()`), then place
/// `AppNavbar {}` inside the layout.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub analytics: fn(label: &str) -> Element,
    pub about: fn(label: &str) -> Element,
    pub contact: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar() -> Element {
    // Obtain the theme signal if the platform root provided one; the toggle
    // button is hidden otherwise.
    let theme_ctx: Option<Signal<ThemeMode>> = try_use_context::<Signal<ThemeMode>>();
    let mode = theme_ctx.map(|signal| signal()).unwrap_or_default();

    let on_toggle = move |_| {
        if let Some(mut signal) = theme_ctx {
            let next = signal().toggled();
            signal.set(next);
        }
    };

    // Links come from the registered builder; an unregistered platform
    // renders the bar without them.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let analytics = (builder.analytics)("Analytics");
        let about = (builder.about)("About Us");
        let contact = (builder.contact)("Contact Us");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {analytics}
                {about}
                {contact}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        // Include the navbar stylesheet (and inline it in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "SureScreen Diagnostics" }
                    }
                    span { class: "navbar__brand-subtitle", "Opioid risk screening" }
                }

                // Navigation
                if let Some(nav) = internal_nav {
                    {nav}
                }

                // Dark-mode toggle
                if theme_ctx.is_some() {
                    button {
                        r#type: "button",
                        class: "navbar__theme-toggle",
                        aria_label: "Toggle dark mode",
                        onclick: on_toggle,
                        if mode.is_dark() { "☀" } else { "🌙" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub_link(label: &str) -> Element {
        rsx! { span { "{label}" } }
    }

    #[test]
    fn registration_is_first_write_wins() {
        let builder = || NavBuilder {
            home: stub_link,
            analytics: stub_link,
            about: stub_link,
            contact: stub_link,
        };

        register_nav(builder());
        // A second registration (e.g. a re-created root) is a no-op, not a panic.
        register_nav(builder());
        assert!(NAV_BUILDER.get().is_some());
    }
}
