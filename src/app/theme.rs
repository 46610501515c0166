//! Theme context shared by every component.
//!
//! Wraps a [`ThemeController`] in a signal so toggles re-render whatever
//! reads the theme, and exposes the platform adapter to components that
//! need the page (scroll tracking, anchor links).

use dioxus::prelude::*;

use crate::platform::{default_platform, SharedPlatform};
use crate::theme::{Theme, ThemeController};

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    controller: Signal<ThemeController>,
}

impl ThemeContext {
    /// Get current theme
    pub fn get(&self) -> Theme {
        self.controller.read().current()
    }

    pub fn toggle(&self) -> Theme {
        let mut controller = self.controller;
        let next = controller.write().toggle();
        next
    }

    pub fn platform(&self) -> SharedPlatform {
        self.controller.peek().platform().clone()
    }
}

/// Initialize theme context provider - call once at app root
///
/// Uses a [`SharedPlatform`] from the root context when one was supplied
/// (`VirtualDom::with_root_context`), otherwise the target's default.
pub fn use_theme_provider() -> ThemeContext {
    let platform =
        use_hook(|| try_consume_context::<SharedPlatform>().unwrap_or_else(default_platform));
    use_theme_provider_with(platform)
}

/// Same as [`use_theme_provider`] with an explicit platform. Only the
/// value passed on the first render is used.
pub fn use_theme_provider_with(platform: SharedPlatform) -> ThemeContext {
    let controller = use_signal(move || ThemeController::new(platform));

    let ctx = ThemeContext { controller };
    use_context_provider(|| ctx);

    // Client-side only: resolve from document/localStorage/OS and apply
    #[cfg(target_arch = "wasm32")]
    {
        use_effect(move || {
            let mut controller = controller;
            controller.peek().platform().ensure_viewport_meta();
            controller.write().initialize();
        });
    }

    ctx
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Platform adapter from the theme context.
pub fn use_platform() -> SharedPlatform {
    use_theme().platform()
}
