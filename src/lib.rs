//! PictoPy landing page - Rust implementation
//!
//! Responsive navigation bar for the PictoPy marketing page, built with
//! Dioxus and rendered on the server, then hydrated in the browser.
//!
//! This library provides:
//! - Light/dark theme resolution, persistence and the `themeChanged` event
//! - A platform adapter isolating every browser API (and its repaint quirks)
//! - Navbar view state: compact-on-scroll, mobile menu, scroll-linked links
//! - The Dioxus component tree for the landing page
//! - A small axum server (status endpoint + SSR) behind the `server` feature

#[cfg(feature = "server")]
pub mod api;
pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod nav;
pub mod platform;
pub mod theme;
