//! Floating navigation bar.
//!
//! A pill-shaped bar pinned over the hero: brand mark, in-page anchor
//! links, and the external gallery button.

use dioxus::prelude::*;

use super::icons;
use super::GALLERY_URL;

/// Anchor targets for the in-page sections.
const SECTIONS: [(&str, &str); 4] = [
    ("#univers", "Univers"),
    ("#demarche", "Démarche"),
    ("#processus", "Processus"),
    ("#explorer", "Explorer"),
];

/// Floating pill navigation bar.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            a { class: "navbar-brand", href: "#hero", "Flo M" }

            div { class: "navbar-links",
                for (anchor, label) in SECTIONS {
                    a { class: "navbar-link", href: anchor, "{label}" }
                }
            }

            a {
                class: "navbar-cta",
                href: GALLERY_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                span { "Galerie" }
                {icons::ArrowUpRight(14)}
            }
        }
    }
}
