//! Layout component wrapping all pages with the navbar and shared styles.

use dioxus::prelude::*;

use super::navbar::Navbar;
use crate::app::embedded_assets::LANDING_CSS;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    #[props(into)]
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} - PictoPy", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Style { {LANDING_CSS} }

        Navbar {}
        main { class: "landing-main",
            {props.children}
        }
        footer { class: "landing-footer",
            small { "PictoPy v{version}" }
        }
    }
}
