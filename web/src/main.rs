use dioxus::prelude::*;

use ui::Navbar;
use views::{Catalog, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/list")]
    Catalog {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::ITEMS_CSS }

        Router::<Route> {}
    }
}

/// Links to both item views above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Add items" }
            Link { to: Route::Catalog {}, "Item list" }
        }

        Outlet::<Route> {}
    }
}
