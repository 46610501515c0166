//! web-sys implementation of [`Platform`].

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CustomEvent, CustomEventInit, Document, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window,
};

use super::{
    DeviceProfile, Platform, PlatformError, PlatformResult, RepaintStep, ScheduledRepaint,
    ScrollGuard, ThemeChanged, THEME_CHANGED_EVENT, VIEWPORT_CONTENT,
};
use crate::theme::{Theme, DARK_CLASS, STORAGE_KEY};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPlatform;

impl BrowserPlatform {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> PlatformResult<Storage> {
        match window()?.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(PlatformError::StorageUnavailable),
            Err(e) => Err(storage_error(e)),
        }
    }
}

fn window() -> PlatformResult<Window> {
    web_sys::window().ok_or(PlatformError::NoWindow)
}

fn document() -> PlatformResult<Document> {
    window()?
        .document()
        .ok_or_else(|| PlatformError::Dom("window has no document".into()))
}

fn root_element(document: &Document) -> PlatformResult<HtmlElement> {
    document
        .document_element()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| PlatformError::Dom("document has no root element".into()))
}

fn body_element(document: &Document) -> PlatformResult<HtmlElement> {
    document
        .body()
        .ok_or_else(|| PlatformError::Dom("document has no body".into()))
}

fn dom_error(err: JsValue) -> PlatformError {
    PlatformError::Dom(format!("{:?}", err))
}

fn storage_error(err: JsValue) -> PlatformError {
    PlatformError::Storage(format!("{:?}", err))
}

/// Set `content` on `<meta name="...">`, creating the tag when missing.
fn upsert_meta(
    document: &Document,
    name: &str,
    content: &str,
    overwrite: bool,
) -> PlatformResult<()> {
    let selector = format!("meta[name=\"{}\"]", name);
    if let Some(meta) = document.query_selector(&selector).map_err(dom_error)? {
        if overwrite {
            meta.set_attribute("content", content).map_err(dom_error)?;
        }
        return Ok(());
    }

    let meta = document.create_element("meta").map_err(dom_error)?;
    meta.set_attribute("name", name).map_err(dom_error)?;
    meta.set_attribute("content", content).map_err(dom_error)?;
    let head = document
        .head()
        .ok_or_else(|| PlatformError::Dom("document has no head".into()))?;
    head.append_child(&meta).map_err(dom_error)?;
    Ok(())
}

/// Hide and re-show `el`, reading its layout in between.
fn display_reflow(el: &HtmlElement) {
    let style = el.style();
    let original = style.get_property_value("display").unwrap_or_default();
    let _ = style.set_property("display", "none");
    let _ = el.offset_height();
    if original.is_empty() {
        let _ = style.remove_property("display");
    } else {
        let _ = style.set_property("display", &original);
    }
}

fn run_repaint(step: RepaintStep) {
    let Ok(document) = document() else {
        return;
    };

    match step {
        RepaintStep::Transform => {
            let Ok(root) = root_element(&document) else {
                return;
            };
            let style = root.style();
            let _ = style.set_property("transform", "translateZ(0)");
            let _ = style.set_property("backface-visibility", "hidden");

            let frame_root = root.clone();
            let on_frame = Closure::once_into_js(move || {
                let style = frame_root.style();
                let _ = style.remove_property("transform");
                let _ = style.remove_property("backface-visibility");
                display_reflow(&frame_root);
            });
            if let Ok(window) = window() {
                let _ = window.request_animation_frame(on_frame.unchecked_ref());
            }
        }
        RepaintStep::BodyReflow => {
            if let Ok(body) = body_element(&document) {
                display_reflow(&body);
            }
        }
    }
}

impl Platform for BrowserPlatform {
    fn has_dark_marker(&self) -> bool {
        document()
            .ok()
            .and_then(|doc| doc.document_element())
            .map(|root| root.class_list().contains(DARK_CLASS))
            .unwrap_or(false)
    }

    fn prefers_dark(&self) -> bool {
        window()
            .ok()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn load_preference(&self) -> PlatformResult<Option<Theme>> {
        let value = self.storage()?.get_item(STORAGE_KEY).map_err(storage_error)?;
        Ok(value.as_deref().map(Theme::parse_storage))
    }

    fn save_preference(&self, theme: Theme) -> PlatformResult<()> {
        self.storage()?
            .set_item(STORAGE_KEY, theme.storage_value())
            .map_err(storage_error)
    }

    fn apply_document_theme(&self, theme: Theme) -> PlatformResult<()> {
        let document = document()?;
        let root = root_element(&document)?;
        let body = body_element(&document)?;

        if theme.is_dark() {
            root.class_list().add_1(DARK_CLASS).map_err(dom_error)?;
            body.class_list().add_1(DARK_CLASS).map_err(dom_error)?;
        } else {
            root.class_list().remove_1(DARK_CLASS).map_err(dom_error)?;
            body.class_list().remove_1(DARK_CLASS).map_err(dom_error)?;
        }
        root.set_attribute("data-theme", theme.as_str())
            .map_err(dom_error)?;

        let root_style = root.style();
        root_style
            .set_property("color-scheme", theme.color_scheme())
            .map_err(dom_error)?;
        root_style
            .set_property("background-color", theme.background_hex())
            .map_err(dom_error)?;

        let body_style = body.style();
        body_style
            .set_property("background-color", theme.background_hex())
            .map_err(dom_error)?;
        body_style
            .set_property("color", theme.foreground_hex())
            .map_err(dom_error)?;

        upsert_meta(&document, "theme-color", theme.background_hex(), true)
    }

    fn emit_theme_changed(&self, event: &ThemeChanged) {
        let Ok(window) = window() else {
            return;
        };

        let detail = match serde_wasm_bindgen::to_value(event) {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!("Cannot serialize {} detail: {}", THEME_CHANGED_EVENT, e);
                return;
            }
        };

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        match CustomEvent::new_with_event_init_dict(THEME_CHANGED_EVENT, &init) {
            Ok(custom) => {
                let _ = window.dispatch_event(&custom);
            }
            Err(e) => tracing::warn!("Cannot create {} event: {:?}", THEME_CHANGED_EVENT, e),
        }
    }

    fn device_profile(&self) -> DeviceProfile {
        window()
            .ok()
            .and_then(|w| w.navigator().user_agent().ok())
            .map(|ua| DeviceProfile::from_user_agent(&ua))
            .unwrap_or_default()
    }

    fn schedule_repaint(&self, repaint: ScheduledRepaint) {
        let step = repaint.step;
        if repaint.delay_ms == 0 {
            run_repaint(step);
            return;
        }

        let Ok(window) = window() else {
            return;
        };
        let callback = Closure::once_into_js(move || run_repaint(step));
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            repaint.delay_ms as i32,
        ) {
            tracing::debug!("Cannot schedule repaint: {:?}", e);
        }
    }

    fn scroll_y(&self) -> f64 {
        window()
            .ok()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn watch_scroll(&self, mut on_scroll: Box<dyn FnMut(f64)>) -> ScrollGuard {
        let Ok(window) = window() else {
            return ScrollGuard::detached();
        };

        let source = window.clone();
        let listener = Closure::<dyn FnMut()>::new(move || {
            on_scroll(source.scroll_y().unwrap_or(0.0));
        });

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            listener.as_ref().unchecked_ref(),
            &options,
        ) {
            tracing::warn!("Cannot attach scroll listener: {:?}", e);
            return ScrollGuard::detached();
        }

        // The closure lives in the guard; dropping the guard releases it.
        ScrollGuard::new(move || {
            let _ = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            drop(listener);
        })
    }

    fn scroll_to_anchor(&self, id: &str) -> bool {
        let Some(element) = document().ok().and_then(|doc| doc.get_element_by_id(id)) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn ensure_viewport_meta(&self) {
        let result =
            document().and_then(|doc| upsert_meta(&doc, "viewport", VIEWPORT_CONTENT, false));
        if let Err(e) = result {
            tracing::warn!("Cannot ensure viewport meta tag: {}", e);
        }
    }
}
