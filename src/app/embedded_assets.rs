//! Embedded static assets for single-binary distribution.
//!
//! CSS is compiled in with include_str! and injected as a style tag; the
//! logo is served as a base64 data URL so the server needs no public dir.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::LazyLock;

/// Landing page and navbar styles
pub const LANDING_CSS: &str = include_str!("../../public/landing.css");

/// Logo image bytes
const LOGO_BYTES: &[u8] = include_bytes!("../../public/pictopy-logo.svg");

/// Logo as data URL (lazily encoded)
pub static LOGO_DATA_URL: LazyLock<String> =
    LazyLock::new(|| format!("data:image/svg+xml;base64,{}", STANDARD.encode(LOGO_BYTES)));
