use dioxus::prelude::*;

use crate::core::format;

/// Storefront landing view. `category` arrives from the shell's query
/// segment and is empty when browsing the whole catalogue.
#[component]
pub fn Home(category: String) -> Element {
    let heading = if category.is_empty() {
        "All products".to_string()
    } else {
        format::capitalize_label(&category)
    };

    rsx! {
        section { class: "page page-home",
            h1 { class: "page-home__heading", "{heading}" }
            if category.is_empty() {
                p { class: "page-home__hint",
                    "Browse the catalogue or pick a category from the menu."
                }
            } else {
                p { class: "page-home__hint",
                    "Showing products filed under \"{category}\"."
                }
            }
        }
    }
}
