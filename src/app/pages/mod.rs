//! Page components for the Dioxus app.

mod landing;

pub use landing::Landing;
