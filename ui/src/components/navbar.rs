use dioxus::prelude::*;

use crate::core::format;
use crate::core::menu::CategoryMenu;
use crate::core::nav;

// Navbar stylesheet and logo, bundled by the asset pipeline.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_LOGO: Asset = asset!("/assets/logo.svg");

/// Visual role of an entry in the category overlay. Styling is selected
/// through [`LinkRole::css_class`] rather than ad-hoc flags in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRole {
    Standard,
    Destructive,
}

impl LinkRole {
    /// CSS classes for the role. Standard links may carry the `--active`
    /// modifier; destructive links ignore the flag (logout is never the
    /// active category).
    pub fn css_class(self, active: bool) -> &'static str {
        match (self, active) {
            (Self::Standard, false) => "navbar__category-link",
            (Self::Standard, true) => {
                "navbar__category-link navbar__category-link--active"
            }
            (Self::Destructive, _) => {
                "navbar__category-link navbar__category-link--destructive"
            }
        }
    }
}

/// Fixed storefront top bar: logo, product search, cart button, and a
/// collapsible category menu with an optional logout entry.
///
/// The caller owns the category list and the active category; this component
/// only requests changes through `on_select_category`. Navigation goes
/// through the capability registered in [`crate::core::nav`], so the shell
/// decides what "navigate" means on its platform.
///
/// Behavior contract:
/// - Selecting a category closes the menu and issues a shallow navigation to
///   `/?category=<value>` (percent-encoded).
/// - The logo clears the active category and shallow-navigates to `/`.
/// - The logout entry is rendered only when `on_logout` is supplied, and it
///   does not close the menu.
#[component]
pub fn Navbar(
    categories: Vec<String>,
    active_category: Option<String>,
    on_select_category: EventHandler<Option<String>>,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let mut menu = use_signal(CategoryMenu::default);

    #[cfg(debug_assertions)]
    {
        println!("[navbar] render categories={}", categories.len());
    }

    let open = menu().is_open();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { class: "navbar",
            button {
                class: "navbar__logo",
                onclick: move |_| {
                    on_select_category.call(None);
                    nav::navigate(nav::ROOT_PATH, true);
                },
                img {
                    class: "navbar__logo-image",
                    src: NAVBAR_LOGO,
                    alt: "Logo",
                    width: "95",
                }
            }

            div { class: "navbar__search",
                input {
                    class: "navbar__search-input",
                    r#type: "text",
                    placeholder: "Search products...",
                }
                // Display-only; the cart has no declared click behavior.
                button { class: "navbar__cart", CartIcon {} }
            }

            button {
                class: "navbar__toggle",
                onclick: move |_| menu.with_mut(|m| m.toggle()),
                if open {
                    CloseIcon {}
                } else {
                    MenuIcon {}
                }
            }

            div {
                class: if open {
                    "navbar__categories navbar__categories--open"
                } else {
                    "navbar__categories"
                },
                { categories.iter().map(|category| {
                    let label = format::capitalize_label(category);
                    let is_active = active_category.as_deref() == Some(category.as_str());
                    let value = category.clone();
                    rsx! {
                        a {
                            key: "{category}",
                            class: LinkRole::Standard.css_class(is_active),
                            onclick: move |_| {
                                on_select_category.call(Some(value.clone()));
                                menu.with_mut(|m| m.close());
                                nav::navigate(&nav::category_path(&value), true);
                            },
                            "{label}"
                        }
                    }
                }) }
                if let Some(handler) = on_logout {
                    a {
                        class: LinkRole::Destructive.css_class(false),
                        onclick: move |_| handler.call(()),
                        "Logout"
                    }
                }
            }
        }
    }
}

#[component]
fn CartIcon() -> Element {
    rsx! {
        svg {
            width: "24", height: "24", view_box: "0 0 24 24", fill: "none",
            circle { cx: "9", cy: "20", r: "1.5", stroke: "currentColor", stroke_width: "1.8" }
            circle { cx: "17", cy: "20", r: "1.5", stroke: "currentColor", stroke_width: "1.8" }
            path {
                d: "M3 4h2l2.4 11.2a1 1 0 0 0 1 .8h8.9a1 1 0 0 0 1-.8L20 8H6",
                stroke: "currentColor",
                stroke_width: "1.8",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

#[component]
fn MenuIcon() -> Element {
    rsx! {
        svg {
            width: "24", height: "24", view_box: "0 0 24 24", fill: "none",
            path {
                d: "M4 6h16M4 12h16M4 18h16",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
            }
        }
    }
}

#[component]
fn CloseIcon() -> Element {
    rsx! {
        svg {
            width: "24", height: "24", view_box: "0 0 24 24", fill: "none",
            path {
                d: "M6 6l12 12M18 6L6 18",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
            }
        }
    }
}
