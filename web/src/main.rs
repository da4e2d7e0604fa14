use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{About, Analytics, Contact, Home};
use ui::{provide_theme, use_theme, THEME_CSS};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/analytics")]
    Analytics {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_analytics(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analytics {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}
fn nav_contact(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Contact {},
        "{label}"
    })
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
        // Global app resources
        document::Link { rel: "stylesheet", href: THEME_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let theme = use_theme();

    rsx! {
        div { class: "app {theme().shell_class()}",
            AppNavbar {}
            Outlet::<Route> {}
        }
    }
}
