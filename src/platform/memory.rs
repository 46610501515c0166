//! In-memory platform used for server rendering and tests.
//!
//! Models just enough of the document (root/body classes, inline colours,
//! meta tags), localStorage, scroll position and in-page anchors to observe
//! everything the navbar does to the real page.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::{
    DeviceProfile, Platform, PlatformError, PlatformResult, ScheduledRepaint, ScrollGuard,
    ThemeChanged, VIEWPORT_CONTENT,
};
use crate::theme::{Theme, DARK_CLASS, STORAGE_KEY};

const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/126.0";

/// Observable document state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSnapshot {
    pub root_classes: BTreeSet<String>,
    pub body_classes: BTreeSet<String>,
    pub data_theme: Option<String>,
    pub color_scheme: Option<String>,
    pub root_background: Option<String>,
    pub body_background: Option<String>,
    pub body_color: Option<String>,
    pub theme_color_meta: Option<String>,
    pub viewport_meta: Option<String>,
}

type ScrollCallback = Rc<RefCell<Box<dyn FnMut(f64)>>>;
type ScrollListeners = Rc<RefCell<Vec<(u64, ScrollCallback)>>>;

pub struct MemoryPlatform {
    document: RefCell<DocumentSnapshot>,
    /// `None` simulates disabled storage (private mode, blocked cookies).
    storage: RefCell<Option<HashMap<String, String>>>,
    /// Returned by every storage read when set (e.g. a `SecurityError`).
    read_error: RefCell<Option<PlatformError>>,
    prefers_dark: Cell<bool>,
    user_agent: RefCell<String>,
    scroll_y: Cell<f64>,
    /// Anchor id -> document offset of its top edge.
    anchors: RefCell<HashMap<String, f64>>,
    listeners: ScrollListeners,
    next_listener: Cell<u64>,
    events: RefCell<Vec<ThemeChanged>>,
    repaints: RefCell<Vec<ScheduledRepaint>>,
}

impl Default for MemoryPlatform {
    fn default() -> Self {
        Self {
            document: RefCell::new(DocumentSnapshot::default()),
            storage: RefCell::new(Some(HashMap::new())),
            read_error: RefCell::new(None),
            prefers_dark: Cell::new(false),
            user_agent: RefCell::new(DESKTOP_UA.to_string()),
            scroll_y: Cell::new(0.0),
            anchors: RefCell::new(HashMap::new()),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener: Cell::new(0),
            events: RefCell::new(Vec::new()),
            repaints: RefCell::new(Vec::new()),
        }
    }
}

impl MemoryPlatform {
    pub fn with_os_dark(self, prefers_dark: bool) -> Self {
        self.prefers_dark.set(prefers_dark);
        self
    }

    pub fn with_dark_marker(self) -> Self {
        self.document
            .borrow_mut()
            .root_classes
            .insert(DARK_CLASS.to_string());
        self
    }

    pub fn with_stored(self, key: &str, value: &str) -> Self {
        if let Some(storage) = self.storage.borrow_mut().as_mut() {
            storage.insert(key.to_string(), value.to_string());
        }
        self
    }

    pub fn with_storage_unavailable(self) -> Self {
        *self.storage.borrow_mut() = None;
        self
    }

    pub fn with_failing_reads(self, message: &str) -> Self {
        *self.read_error.borrow_mut() = Some(PlatformError::Storage(message.to_string()));
        self
    }

    pub fn with_user_agent(self, user_agent: &str) -> Self {
        *self.user_agent.borrow_mut() = user_agent.to_string();
        self
    }

    pub fn with_anchor(self, id: &str, offset: f64) -> Self {
        self.anchors.borrow_mut().insert(id.to_string(), offset);
        self
    }

    pub fn document(&self) -> DocumentSnapshot {
        self.document.borrow().clone()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage
            .borrow()
            .as_ref()
            .and_then(|storage| storage.get(key).cloned())
    }

    pub fn events(&self) -> Vec<ThemeChanged> {
        self.events.borrow().clone()
    }

    pub fn repaints(&self) -> Vec<ScheduledRepaint> {
        self.repaints.borrow().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Move the viewport and notify scroll listeners.
    ///
    /// Listeners may attach or detach others (or themselves) while being
    /// notified; one detached mid-dispatch is not called.
    pub fn scroll_to(&self, offset: f64) {
        self.scroll_y.set(offset);
        let snapshot: Vec<(u64, ScrollCallback)> = self.listeners.borrow().clone();
        for (id, listener) in snapshot {
            let attached = self
                .listeners
                .borrow()
                .iter()
                .any(|(listener_id, _)| *listener_id == id);
            if attached {
                (listener.borrow_mut())(offset);
            }
        }
    }
}

fn toggle_class(classes: &mut BTreeSet<String>, class: &str, on: bool) {
    if on {
        classes.insert(class.to_string());
    } else {
        classes.remove(class);
    }
}

impl Platform for MemoryPlatform {
    fn has_dark_marker(&self) -> bool {
        self.document.borrow().root_classes.contains(DARK_CLASS)
    }

    fn prefers_dark(&self) -> bool {
        self.prefers_dark.get()
    }

    fn load_preference(&self) -> PlatformResult<Option<Theme>> {
        if let Some(e) = self.read_error.borrow().clone() {
            return Err(e);
        }
        let storage = self.storage.borrow();
        let storage = storage.as_ref().ok_or(PlatformError::StorageUnavailable)?;
        Ok(storage.get(STORAGE_KEY).map(|v| Theme::parse_storage(v)))
    }

    fn save_preference(&self, theme: Theme) -> PlatformResult<()> {
        let mut storage = self.storage.borrow_mut();
        let storage = storage.as_mut().ok_or(PlatformError::StorageUnavailable)?;
        storage.insert(STORAGE_KEY.to_string(), theme.storage_value().to_string());
        Ok(())
    }

    fn apply_document_theme(&self, theme: Theme) -> PlatformResult<()> {
        let mut doc = self.document.borrow_mut();
        toggle_class(&mut doc.root_classes, DARK_CLASS, theme.is_dark());
        toggle_class(&mut doc.body_classes, DARK_CLASS, theme.is_dark());
        doc.data_theme = Some(theme.as_str().to_string());
        doc.color_scheme = Some(theme.color_scheme().to_string());
        doc.root_background = Some(theme.background_hex().to_string());
        doc.body_background = Some(theme.background_hex().to_string());
        doc.body_color = Some(theme.foreground_hex().to_string());
        doc.theme_color_meta = Some(theme.background_hex().to_string());
        Ok(())
    }

    fn emit_theme_changed(&self, event: &ThemeChanged) {
        self.events.borrow_mut().push(*event);
    }

    fn device_profile(&self) -> DeviceProfile {
        DeviceProfile::from_user_agent(&self.user_agent.borrow())
    }

    fn schedule_repaint(&self, repaint: ScheduledRepaint) {
        self.repaints.borrow_mut().push(repaint);
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn watch_scroll(&self, on_scroll: Box<dyn FnMut(f64)>) -> ScrollGuard {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(on_scroll))));

        let listeners = Rc::downgrade(&self.listeners);
        ScrollGuard::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }

    fn scroll_to_anchor(&self, id: &str) -> bool {
        let offset = self.anchors.borrow().get(id).copied();
        match offset {
            Some(offset) => {
                self.scroll_to(offset);
                true
            }
            None => false,
        }
    }

    fn ensure_viewport_meta(&self) {
        let mut doc = self.document.borrow_mut();
        if doc.viewport_meta.is_none() {
            doc.viewport_meta = Some(VIEWPORT_CONTENT.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_listener_detaches_on_guard_drop() {
        let platform = MemoryPlatform::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let guard = platform.watch_scroll(Box::new(move |y| sink.borrow_mut().push(y)));
        platform.scroll_to(20.0);
        platform.scroll_to(80.0);
        assert_eq!(platform.listener_count(), 1);

        drop(guard);
        platform.scroll_to(10.0);

        assert_eq!(platform.listener_count(), 0);
        assert_eq!(*seen.borrow(), vec![20.0, 80.0]);
        assert_eq!(platform.scroll_y(), 10.0);
    }

    #[test]
    fn test_listener_can_detach_itself_while_notified() {
        let platform = Rc::new(MemoryPlatform::default());
        let slot: Rc<RefCell<Option<ScrollGuard>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let own_slot = slot.clone();
        let counter = calls.clone();
        let guard = platform.watch_scroll(Box::new(move |_| {
            counter.set(counter.get() + 1);
            own_slot.borrow_mut().take();
        }));
        *slot.borrow_mut() = Some(guard);

        platform.scroll_to(60.0);
        platform.scroll_to(70.0);

        assert_eq!(calls.get(), 1);
        assert_eq!(platform.listener_count(), 0);
    }

    #[test]
    fn test_listener_can_attach_another_while_notified() {
        let platform = Rc::new(MemoryPlatform::default());
        let late_calls = Rc::new(Cell::new(0));
        let guards: Rc<RefCell<Vec<ScrollGuard>>> = Rc::new(RefCell::new(Vec::new()));

        let attach_to = Rc::downgrade(&platform);
        let sink = guards.clone();
        let counter = late_calls.clone();
        let first = platform.watch_scroll(Box::new(move |_| {
            if let Some(platform) = attach_to.upgrade() {
                let counter = counter.clone();
                let guard =
                    platform.watch_scroll(Box::new(move |_| counter.set(counter.get() + 1)));
                sink.borrow_mut().push(guard);
            }
        }));

        platform.scroll_to(10.0);
        assert_eq!(platform.listener_count(), 2);
        // Attached during the first dispatch, so only notified from the next one
        assert_eq!(late_calls.get(), 0);

        platform.scroll_to(20.0);
        assert_eq!(late_calls.get(), 1);

        drop(first);
        guards.borrow_mut().clear();
        assert_eq!(platform.listener_count(), 0);
    }

    #[test]
    fn test_scroll_to_anchor_puts_anchor_at_top() {
        let platform = MemoryPlatform::default().with_anchor("features", 640.0);
        assert!(platform.scroll_to_anchor("features"));
        assert_eq!(platform.scroll_y(), 640.0);
        assert!(!platform.scroll_to_anchor("pricing"));
        assert_eq!(platform.scroll_y(), 640.0);
    }

    #[test]
    fn test_unavailable_storage_errors() {
        let platform = MemoryPlatform::default().with_storage_unavailable();
        assert_eq!(
            platform.load_preference(),
            Err(PlatformError::StorageUnavailable)
        );
        assert_eq!(
            platform.save_preference(Theme::Dark),
            Err(PlatformError::StorageUnavailable)
        );
    }

    #[test]
    fn test_viewport_meta_is_added_once() {
        let platform = MemoryPlatform::default();
        platform.ensure_viewport_meta();
        platform.ensure_viewport_meta();
        assert_eq!(
            platform.document().viewport_meta.as_deref(),
            Some(VIEWPORT_CONTENT)
        );
    }
}
