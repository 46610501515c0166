//! Navigation link that either routes or scrolls to an in-page anchor.

use dioxus::prelude::*;

use crate::app::theme::use_platform;
use crate::nav::{activate, LinkTarget};

const NAV_LINK_CLASS: &str = "nav-link";

/// A scroll link (`scroll_link: true`) cancels navigation and smoothly
/// scrolls the element whose id matches `to` (minus the `#`) to the top
/// of the viewport. `onclick` runs after either kind of activation.
#[component]
pub fn NavLink(
    #[props(into)] to: String,
    #[props(default = false)] scroll_link: bool,
    onclick: Option<EventHandler<()>>,
    children: Element,
) -> Element {
    let platform = use_platform();
    let target = LinkTarget::parse(&to, scroll_link);

    match target {
        LinkTarget::Route(route) => rsx! {
            Link {
                class: NAV_LINK_CLASS,
                to: route.as_str(),
                onclick: move |_| {
                    if let Some(f) = &onclick {
                        f.call(());
                    }
                },
                {children}
            }
        },
        LinkTarget::Anchor(_) => {
            let href = target.href();
            rsx! {
                a {
                    class: NAV_LINK_CLASS,
                    href: "{href}",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        let outcome = activate(&*platform, &target);
                        tracing::debug!("Scroll link activated: {:?}", outcome);
                        if let Some(f) = &onclick {
                            f.call(());
                        }
                    },
                    {children}
                }
            }
        }
    }
}
