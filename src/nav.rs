//! Navbar view state: scroll variant, mobile menu and link targets.

use crate::platform::Platform;

/// Offset past which the bar switches to its compact variant.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Visual state of the floating bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NavVariant {
    #[default]
    Expanded,
    /// Narrower and shadowed, shown once the page has scrolled.
    Compact,
}

impl NavVariant {
    pub fn from_scrolled(scrolled: bool) -> Self {
        if scrolled {
            NavVariant::Compact
        } else {
            NavVariant::Expanded
        }
    }

    pub fn from_scroll(scroll_y: f64) -> Self {
        Self::from_scrolled(is_past_threshold(scroll_y))
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavVariant::Expanded => "navbar",
            NavVariant::Compact => "navbar navbar--compact",
        }
    }
}

/// Mobile slide-in menu: fully open or fully closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn panel_class(&self) -> &'static str {
        panel_class(self.open)
    }
}

pub fn panel_class(open: bool) -> &'static str {
    if open {
        "mobile-menu mobile-menu--open"
    } else {
        "mobile-menu"
    }
}

/// What a navigation link does when activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Handed to the router.
    Route(String),
    /// In-page anchor id (without `#`).
    Anchor(String),
}

impl LinkTarget {
    pub fn parse(to: &str, scroll_link: bool) -> Self {
        if scroll_link {
            LinkTarget::Anchor(anchor_id(to).to_string())
        } else {
            LinkTarget::Route(to.to_string())
        }
    }

    pub fn href(&self) -> String {
        match self {
            LinkTarget::Route(route) => route.clone(),
            LinkTarget::Anchor(id) => format!("#{}", id),
        }
    }
}

pub fn anchor_id(to: &str) -> &str {
    to.strip_prefix('#').unwrap_or(to)
}

/// Result of activating a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Left to the router; no scrolling happened.
    Navigate(String),
    ScrolledTo(String),
    AnchorMissing(String),
}

/// Scroll-linked targets are handled here without navigation; route
/// targets are returned for the router.
pub fn activate(platform: &dyn Platform, target: &LinkTarget) -> Activation {
    match target {
        LinkTarget::Route(route) => Activation::Navigate(route.clone()),
        LinkTarget::Anchor(id) => {
            if platform.scroll_to_anchor(id) {
                Activation::ScrolledTo(id.clone())
            } else {
                tracing::debug!("No element with id {:?} to scroll to", id);
                Activation::AnchorMissing(id.clone())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub to: &'static str,
    pub scroll_link: bool,
}

/// Links shown in the mobile menu.
pub const LANDING_LINKS: &[NavItem] = &[
    NavItem {
        label: "Home",
        to: "/",
        scroll_link: false,
    },
    NavItem {
        label: "Feature",
        to: "#features",
        scroll_link: true,
    },
    NavItem {
        label: "About",
        to: "#about",
        scroll_link: true,
    },
];
