//! Shared UI components for the Dioxus fullstack web UI.

pub mod button;
pub mod icons;
pub mod layout;
pub mod mobile_menu;
pub mod nav_link;
pub mod navbar;
pub mod theme_toggle;

pub use layout::Layout;
pub use nav_link::NavLink;
pub use navbar::Navbar;
pub use theme_toggle::{ThemeToggle, ToggleVariant};
