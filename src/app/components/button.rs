use dioxus::prelude::*;

#[component]
pub fn Button(
    #[props(extends=GlobalAttributes)]
    #[props(extends=button)]
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "button",
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn test_button_renders_single_style_and_spread_attributes() {
        let html = dioxus::ssr::render_element(rsx! {
            Button { id: "download", "Download" }
        });

        assert!(html.contains("class=\"button\""));
        assert!(html.contains("id=\"download\""));
        assert!(!html.contains("data-style"));
        assert!(html.contains("Download"));
    }
}
