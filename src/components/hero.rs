//! Hero section - full-viewport opening shot.
//!
//! Looping muted background video under a gradient scrim, headline, the
//! two external calls to action, and a scroll hint.

use dioxus::prelude::*;

use super::icons;
use super::{GALLERY_URL, SHOP_URL};

/// Opening section with the background reel and primary links.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "hero",
            div { class: "hero-backdrop",
                video {
                    class: "hero-video",
                    autoplay: true,
                    muted: true,
                    r#loop: true,
                    source { src: "assets/animation.mp4", r#type: "video/mp4" }
                }
                img {
                    class: "hero-fallback",
                    src: "assets/hero-flom.jpg",
                    alt: "Flo M — Plasticienne",
                }
                div { class: "hero-scrim" }
            }

            div { class: "hero-content",
                h1 { class: "hero-title",
                    span { class: "hero-line-plain", "L'art est une" }
                    span { class: "hero-line-drama", "Florence Megardon" }
                }
                p { class: "hero-sub",
                    "Plasticienne — exploratrice de matières, de couleurs et de sensations. "
                    "Découvrez ses œuvres en galerie ou acquérez une pièce unique en boutique."
                }

                div { class: "hero-actions",
                    a {
                        class: "cta cta-filled",
                        href: GALLERY_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {icons::Palette(18)}
                        span { "Découvrir la Galerie" }
                    }
                    a {
                        class: "cta cta-outline",
                        href: SHOP_URL,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {icons::ShoppingBag(18)}
                        span { "Boutique en Ligne" }
                    }
                }

                div { class: "hero-scroll-hint",
                    span { class: "hero-scroll-label", "Défiler" }
                    span { class: "hero-scroll-chevron", {icons::ChevronDown(16)} }
                }
            }
        }
    }
}
