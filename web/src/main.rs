use dioxus::prelude::*;

use ui::components::Navbar;
use ui::core::nav::{register_navigator, Navigator};
use ui::views::Home;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(StoreChrome)]
    #[route("/?:category")]
    Home { category: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Catalogue sections surfaced in the navbar. Caller-owned: the ui crate
/// only renders what it is handed, in this order.
const STORE_CATEGORIES: &[&str] = &[
    "electronics",
    "jewelery",
    "men's clothing",
    "women's clothing",
];

/// Browser navigator handed to the ui crate. Shallow requests replace the
/// current location instead of pushing a new history entry.
fn browser_navigate(path: &str, shallow: bool) {
    let nav = navigator();
    if shallow {
        nav.replace(path.to_string());
    } else {
        nav.push(path.to_string());
    }
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Register the navigation capability before anything renders.
    register_navigator(Navigator {
        navigate: browser_navigate,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Web chrome wrapping every route: the shared storefront navbar above the
/// routed content. Owns the active-category bookkeeping and the session
/// state backing the logout entry.
#[component]
fn StoreChrome() -> Element {
    let route = use_route::<Route>();
    let Route::Home { category } = route;

    // Seeded from the URL once; afterwards the navbar's selection callback
    // is the only writer.
    let mut active_category = use_signal(move || {
        if category.is_empty() {
            None
        } else {
            Some(category)
        }
    });
    let mut signed_in = use_signal(|| true);

    let categories: Vec<String> = STORE_CATEGORIES.iter().map(|c| c.to_string()).collect();

    // The handler is the prop that varies, not the component call: the navbar
    // instance (and its menu state) survives signing out, only the logout
    // entry disappears.
    let on_logout: Option<EventHandler<()>> = if signed_in() {
        Some(EventHandler::new(move |_| {
            #[cfg(debug_assertions)]
            {
                println!("[session] logout requested");
            }
            signed_in.set(false);
        }))
    } else {
        None
    };

    rsx! {
        Navbar {
            categories: categories,
            active_category: active_category(),
            on_select_category: move |selection| active_category.set(selection),
            on_logout: on_logout,
        }

        Outlet::<Route> {}
    }
}
