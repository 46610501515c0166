//! Light/dark theme state and the controller that mirrors it onto the page.
//!
//! Resolution order on first client render:
//! 1. `dark` class already on the document root (set by an inline script or
//!    another component) - adopted as-is, nothing re-applied
//! 2. persisted preference under [`STORAGE_KEY`]
//! 3. the OS `prefers-color-scheme` media query
//!
//! Every change is written to the document, persisted, announced with a
//! `themeChanged` event and followed by the device's repaint plan.

use crate::platform::{Platform, RepaintPlan, SharedPlatform, ThemeChanged};

/// localStorage key holding `"true"` / `"false"`.
pub const STORAGE_KEY: &str = "darkMode";

/// Class toggled on `<html>` and `<body>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written under [`STORAGE_KEY`].
    pub fn storage_value(&self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    /// Anything other than `"true"` reads back as light.
    pub fn parse_storage(value: &str) -> Self {
        Theme::from_dark(value == "true")
    }

    pub fn color_scheme(&self) -> &'static str {
        self.as_str()
    }

    /// Page background, also used for the `theme-color` meta tag.
    pub fn background_hex(&self) -> &'static str {
        match self {
            Theme::Light => "#ffffff",
            Theme::Dark => "#000000",
        }
    }

    pub fn foreground_hex(&self) -> &'static str {
        self.toggled().background_hex()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌞",
            Theme::Dark => "🌙",
        }
    }
}

/// Where the initial theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSource {
    DocumentMarker,
    Persisted,
    System,
}

/// Work out the theme to start with. Storage failures are logged and
/// treated as "no preference".
pub fn resolve_initial(platform: &dyn Platform) -> (Theme, ThemeSource) {
    if platform.has_dark_marker() {
        return (Theme::Dark, ThemeSource::DocumentMarker);
    }

    match platform.load_preference() {
        Ok(Some(theme)) => return (theme, ThemeSource::Persisted),
        Ok(None) => {}
        Err(e) => tracing::warn!("Error loading theme preference: {}", e),
    }

    (Theme::from_dark(platform.prefers_dark()), ThemeSource::System)
}

/// Push `theme` out to the page: document markers, storage, repaint, event.
pub fn apply(platform: &dyn Platform, theme: Theme) {
    if let Err(e) = platform.apply_document_theme(theme) {
        tracing::error!("Error applying theme to document: {}", e);
    }

    if let Err(e) = platform.save_preference(theme) {
        tracing::warn!("Cannot save theme preference: {}", e);
    }

    for repaint in RepaintPlan::for_profile(platform.device_profile()).steps() {
        platform.schedule_repaint(*repaint);
    }

    platform.emit_theme_changed(&ThemeChanged::new(theme));

    tracing::debug!("Theme applied: {}", theme.as_str());
}

/// Owns the current theme and the platform it is mirrored onto.
pub struct ThemeController {
    platform: SharedPlatform,
    current: Theme,
    source: Option<ThemeSource>,
}

impl ThemeController {
    pub fn new(platform: SharedPlatform) -> Self {
        Self {
            platform,
            current: Theme::default(),
            source: None,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// `None` until [`initialize`](Self::initialize) has run.
    pub fn source(&self) -> Option<ThemeSource> {
        self.source
    }

    pub fn platform(&self) -> &SharedPlatform {
        &self.platform
    }

    /// Resolve the starting theme and apply it, unless the document
    /// already carries it.
    pub fn initialize(&mut self) -> Theme {
        let (theme, source) = resolve_initial(&*self.platform);
        self.current = theme;
        self.source = Some(source);

        if source != ThemeSource::DocumentMarker {
            apply(&*self.platform, theme);
        }

        tracing::debug!("Initial theme {} from {:?}", theme.as_str(), source);
        theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        apply(&*self.platform, theme);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        tracing::debug!("Theme toggled to: {}", next.as_str());
        next
    }
}
