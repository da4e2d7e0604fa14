use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{About, Analytics, Contact, Home};
use ui::{provide_theme, use_theme};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
    #[route("/analytics")]
    Analytics {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Analytics {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}
fn nav_contact(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Contact {}, "{label}" })
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    provide_theme();
    register_nav(NavBuilder {
        home: nav_home,
        analytics: nav_analytics,
        about: nav_about,
        contact: nav_contact,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A mobile-specific Router around the shared `AppNavbar` component
/// which allows us to use the mobile-specific `Route` enum.
#[component]
fn MobileNavbar() -> Element {
    let theme = use_theme();

    rsx! {
        div { class: "app {theme().shell_class()}",
            AppNavbar {}
            Outlet::<Route> {}
        }
    }
}
