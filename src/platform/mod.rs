//! Platform adapter - the only place that touches browser globals.
//!
//! The theme controller, the navigation helpers and every component talk
//! to [`Platform`] instead of `window`/`document`. In the browser that is
//! [`BrowserPlatform`] (wasm32 only); during server rendering and in tests
//! it is [`MemoryPlatform`], which keeps an in-memory model of the same
//! document state.

use std::rc::Rc;

use thiserror::Error;

use crate::theme::Theme;

#[cfg(target_arch = "wasm32")]
mod browser;
mod events;
mod memory;
mod repaint;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserPlatform;
pub use events::{ThemeChanged, THEME_CHANGED_EVENT};
pub use memory::{DocumentSnapshot, MemoryPlatform};
pub use repaint::{DeviceProfile, RepaintPlan, RepaintStep, ScheduledRepaint};

/// Content used when the page has no viewport meta tag.
pub const VIEWPORT_CONTENT: &str = "width=device-width, initial-scale=1.0, user-scalable=yes";

/// Errors from browser API access. None of these reach the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformError {
    #[error("no browser window available")]
    NoWindow,

    #[error("persistent storage is unavailable")]
    StorageUnavailable,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("document error: {0}")]
    Dom(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

/// Browser state the navbar reads and writes.
pub trait Platform {
    /// Whether the document root already carries the `dark` class.
    fn has_dark_marker(&self) -> bool;

    /// OS-level `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool;

    fn load_preference(&self) -> PlatformResult<Option<Theme>>;

    fn save_preference(&self, theme: Theme) -> PlatformResult<()>;

    /// Root/body classes, `data-theme`, inline colours and the
    /// `theme-color` meta tag.
    fn apply_document_theme(&self, theme: Theme) -> PlatformResult<()>;

    fn emit_theme_changed(&self, event: &ThemeChanged);

    fn device_profile(&self) -> DeviceProfile;

    fn schedule_repaint(&self, repaint: ScheduledRepaint);

    /// Current vertical scroll offset in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Call `on_scroll` with the new offset on every scroll until the
    /// returned guard is dropped.
    fn watch_scroll(&self, on_scroll: Box<dyn FnMut(f64)>) -> ScrollGuard;

    /// Smooth-scroll the element with `id` to the top of the viewport.
    /// Returns `false` when no such element exists.
    fn scroll_to_anchor(&self, id: &str) -> bool;

    fn ensure_viewport_meta(&self);
}

/// Shared handle stored in the theme context.
pub type SharedPlatform = Rc<dyn Platform>;

/// Detaches a scroll listener when dropped.
pub struct ScrollGuard {
    detach: Option<Box<dyn FnOnce()>>,
}

impl ScrollGuard {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Guard for a listener that was never attached.
    pub fn detached() -> Self {
        Self { detach: None }
    }

    pub fn is_attached(&self) -> bool {
        self.detach.is_some()
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Platform for the current target: the real DOM in the browser, the
/// in-memory model everywhere else (server rendering).
pub fn default_platform() -> SharedPlatform {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserPlatform::new())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryPlatform::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_scroll_guard_detaches_once_on_drop() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let guard = ScrollGuard::new(move || counter.set(counter.get() + 1));

        assert!(guard.is_attached());
        drop(guard);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_detached_guard_is_noop() {
        let guard = ScrollGuard::detached();
        assert!(!guard.is_attached());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlatformError::StorageUnavailable.to_string(),
            "persistent storage is unavailable"
        );
        assert_eq!(
            PlatformError::Storage("QuotaExceededError".into()).to_string(),
            "storage error: QuotaExceededError"
        );
    }
}
