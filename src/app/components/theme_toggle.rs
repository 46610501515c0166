//! Dark/light toggle buttons.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

const TOGGLE_LABEL: &str = "Toggle dark mode";

/// Where the toggle is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToggleVariant {
    /// Icon button in the desktop link row.
    #[default]
    Desktop,
    /// Bordered 48px touch target next to the menu button.
    Mobile,
    /// Full-width "Theme" row inside the mobile menu.
    MenuRow,
}

impl ToggleVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ToggleVariant::Desktop => "theme-toggle",
            ToggleVariant::Mobile => "theme-toggle theme-toggle--mobile",
            ToggleVariant::MenuRow => "theme-toggle theme-toggle--row",
        }
    }
}

/// Theme toggle showing 🌙 in dark mode and 🌞 in light mode.
#[component]
pub fn ThemeToggle(#[props(default)] variant: ToggleVariant) -> Element {
    let theme = use_theme();
    let icon = theme.get().icon();

    let onclick = move |evt: MouseEvent| {
        evt.prevent_default();
        evt.stop_propagation();
        theme.toggle();
    };

    match variant {
        ToggleVariant::Desktop => rsx! {
            button {
                r#type: "button",
                class: variant.class(),
                "aria-label": TOGGLE_LABEL,
                onclick,
                span { class: "theme-toggle-icon", "{icon}" }
            }
        },
        // Touch end toggles directly; cancelling it suppresses the
        // synthetic click that would toggle a second time.
        ToggleVariant::Mobile => rsx! {
            button {
                r#type: "button",
                class: variant.class(),
                "aria-label": TOGGLE_LABEL,
                onclick,
                ontouchend: move |evt: TouchEvent| {
                    evt.prevent_default();
                    theme.toggle();
                },
                span { class: "theme-toggle-icon", "{icon}" }
            }
        },
        ToggleVariant::MenuRow => rsx! {
            button {
                r#type: "button",
                class: variant.class(),
                "aria-label": TOGGLE_LABEL,
                onclick,
                span { class: "theme-toggle-label", "Theme" }
                span { class: "theme-toggle-icon", "{icon}" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "server")]
    use crate::app::theme::use_theme_provider;

    #[cfg(feature = "server")]
    #[component]
    fn MenuRowHarness() -> Element {
        use_theme_provider();
        rsx! {
            ThemeToggle { variant: ToggleVariant::MenuRow }
        }
    }

    #[cfg(feature = "server")]
    #[test]
    fn test_menu_row_renders_label_and_light_icon() {
        let html = dioxus::ssr::render_element(rsx! { MenuRowHarness {} });

        assert!(html.contains("theme-toggle--row"));
        assert!(html.contains("Toggle dark mode"));
        assert!(html.contains("Theme"));
        assert!(html.contains("🌞"));
    }

    #[test]
    fn test_variant_classes_share_base() {
        for variant in [
            ToggleVariant::Desktop,
            ToggleVariant::Mobile,
            ToggleVariant::MenuRow,
        ] {
            assert!(variant.class().starts_with("theme-toggle"));
        }
        assert_ne!(ToggleVariant::Mobile.class(), ToggleVariant::MenuRow.class());
    }
}
