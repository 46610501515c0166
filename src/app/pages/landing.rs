//! Landing page: hero plus the sections the navbar's scroll links target.

use dioxus::prelude::*;

use crate::app::components::Layout;

/// (title, description) cards for the features section.
const FEATURES: &[(&str, &str)] = &[
    (
        "Smart tagging",
        "Detects objects and faces in your photos and tags them automatically.",
    ),
    (
        "Albums",
        "Group images into albums without moving files on disk.",
    ),
    (
        "Offline first",
        "Everything runs locally; your gallery never leaves your machine.",
    ),
    (
        "Fast search",
        "Find pictures by the people and things in them.",
    ),
];

#[component]
pub fn Landing() -> Element {
    rsx! {
        Layout { title: "Home",
            section { class: "landing-hero",
                h1 { "PictoPy" }
                p { "An image sorting and gallery app that organises your photos for you." }
            }

            section { id: "features", class: "landing-section",
                h2 { "Features" }
                ul { class: "feature-grid",
                    for (title, description) in FEATURES.iter() {
                        li { key: "{title}",
                            h3 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            section { id: "about", class: "landing-section",
                h2 { "About" }
                p {
                    "PictoPy is an open-source desktop gallery. It indexes the folders you "
                    "choose, groups similar images and keeps its database on your device."
                }
            }
        }
    }
}
