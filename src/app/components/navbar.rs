//! Floating landing-page navbar.
//!
//! Desktop shows the Home link and a theme toggle; below the `md`
//! breakpoint those are replaced by a theme toggle, a menu button and the
//! slide-in [`MobileMenu`].

use dioxus::prelude::*;

use super::icons::{CloseIcon, MenuIcon};
use super::mobile_menu::{MenuBackdrop, MobileMenu};
use super::nav_link::NavLink;
use super::theme_toggle::{ThemeToggle, ToggleVariant};
use crate::app::embedded_assets::LOGO_DATA_URL;
use crate::app::scroll::use_scrolled;
use crate::app::Route;
use crate::nav::{MenuState, NavVariant};

const BRAND: &str = "PictoPy";
const TOOLTIP: &str = "Ready to sort images";

#[component]
pub fn Navbar() -> Element {
    let scrolled = use_scrolled();
    let mut menu = use_signal(MenuState::default);

    let variant = NavVariant::from_scrolled(scrolled());
    let is_open = menu.read().is_open();

    rsx! {
        nav { class: variant.class(),
            div { class: "navbar-inner",
                div { class: "navbar-brand",
                    Link { class: "navbar-logo", to: Route::Landing {},
                        img { src: LOGO_DATA_URL.as_str(), alt: "{BRAND} Logo" }
                    }
                    div { class: "navbar-title",
                        Link { class: "navbar-wordmark", to: Route::Landing {}, "{BRAND}" }
                        div { class: "navbar-tooltip", role: "tooltip", "{TOOLTIP}" }
                    }
                }

                div { class: "navbar-desktop",
                    NavLink { to: "/", "Home" }
                    ThemeToggle { variant: ToggleVariant::Desktop }
                }

                div { class: "navbar-mobile-controls",
                    ThemeToggle { variant: ToggleVariant::Mobile }
                    button {
                        r#type: "button",
                        class: "navbar-menu-button",
                        "aria-label": "Toggle menu",
                        "aria-expanded": "{is_open}",
                        onclick: move |_| menu.write().toggle(),
                        if is_open {
                            CloseIcon {}
                        } else {
                            MenuIcon {}
                        }
                    }
                }
            }

            MobileMenu {
                open: is_open,
                on_close: move |_| menu.write().close(),
            }
        }

        if is_open {
            MenuBackdrop { on_close: move |_| menu.write().close() }
        }
    }
}
