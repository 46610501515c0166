//! Full-screen slide-in menu for small screens.

use dioxus::prelude::*;

use super::button::Button;
use super::nav_link::NavLink;
use super::theme_toggle::{ThemeToggle, ToggleVariant};
use crate::nav::{panel_class, LANDING_LINKS};

/// Slide-in panel. Every link and the Download button call `on_close`.
#[component]
pub fn MobileMenu(open: bool, on_close: EventHandler<()>) -> Element {
    let hidden = !open;

    rsx! {
        div {
            class: panel_class(open),
            "aria-hidden": "{hidden}",
            div { class: "mobile-menu-links",
                for item in LANDING_LINKS.iter() {
                    NavLink {
                        key: "{item.label}",
                        to: item.to,
                        scroll_link: item.scroll_link,
                        onclick: move |_| on_close.call(()),
                        "{item.label}"
                    }
                }

                div { class: "mobile-menu-theme",
                    ThemeToggle { variant: ToggleVariant::MenuRow }
                }

                Button {
                    onclick: move |_| on_close.call(()),
                    "Download"
                }
            }
        }
    }
}

/// Dimmed overlay behind the open menu; tapping it closes the menu.
#[component]
pub fn MenuBackdrop(on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "navbar-backdrop",
            onclick: move |_| on_close.call(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;

    use dioxus::dioxus_core::{ElementId, Mutation};
    use dioxus::html::geometry::{ClientPoint, Coordinates, ElementPoint, PagePoint, ScreenPoint};
    use dioxus::html::input_data::{MouseButton, MouseButtonSet};
    use dioxus::html::{
        set_event_converter, Modifiers, PlatformEventData, SerializedHtmlEventConverter,
        SerializedMouseData,
    };

    use super::*;
    use crate::app::theme::use_theme_provider;
    use crate::platform::{MemoryPlatform, Platform, SharedPlatform, ThemeChanged};

    type CloseCount = Rc<Cell<u32>>;

    #[derive(Clone, Routable, Debug, PartialEq)]
    enum MenuRoute {
        #[route("/")]
        OpenMenu {},
    }

    #[component]
    fn OpenMenu() -> Element {
        use_theme_provider();
        let closes = use_context::<CloseCount>();
        let backdrop_closes = closes.clone();

        rsx! {
            MobileMenu {
                open: true,
                on_close: move |_| closes.set(closes.get() + 1),
            }
            MenuBackdrop { on_close: move |_| backdrop_closes.set(backdrop_closes.get() + 1) }
        }
    }

    #[component]
    fn MenuApp() -> Element {
        rsx! { Router::<MenuRoute> {} }
    }

    fn primary_click() -> Event<dyn Any> {
        let mouse = SerializedMouseData::new(
            Some(MouseButton::Primary),
            MouseButtonSet::empty(),
            Coordinates::new(
                ScreenPoint::zero(),
                ClientPoint::zero(),
                ElementPoint::zero(),
                PagePoint::zero(),
            ),
            Modifiers::empty(),
        );
        let data: Rc<dyn Any> = Rc::new(PlatformEventData::new(Box::new(mouse)));
        Event::new(data, true)
    }

    fn click_targets(mutations: &[Mutation]) -> Vec<ElementId> {
        mutations
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if name == "click" => Some(*id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_every_entry_but_theme_row_closes_menu() {
        set_event_converter(Box::new(SerializedHtmlEventConverter));

        let platform = Rc::new(MemoryPlatform::default().with_anchor("features", 900.0));
        let closes = CloseCount::default();
        let mut dom = VirtualDom::new(MenuApp)
            .with_root_context(platform.clone() as SharedPlatform)
            .with_root_context(closes.clone());
        let mutations = dom.rebuild_to_vec();

        // Home, Feature, About, theme row, Download, backdrop
        let targets = click_targets(&mutations.edits);
        assert_eq!(targets.len(), 6);

        for id in targets {
            dom.runtime().handle_event("click", primary_click(), id);
        }

        assert_eq!(closes.get(), 5);
        // The theme row toggled once instead of closing
        assert_eq!(platform.events(), vec![ThemeChanged { dark_mode: true }]);
        // Feature scrolled to its anchor; About had none and still closed
        assert_eq!(platform.scroll_y(), 900.0);
    }
}
