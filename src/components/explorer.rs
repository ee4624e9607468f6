//! Explorer section - the two destination cards.
//!
//! Large outbound link cards for the gallery and the shop, with hover
//! imagery and an icon chip each.

use dioxus::prelude::*;

use super::icons;
use super::{GALLERY_URL, SHOP_URL};

/// "Explorer" call-to-action section.
#[component]
pub fn Explorer() -> Element {
    rsx! {
        section { id: "explorer", class: "explorer",
            div { class: "section-intro centered",
                span { class: "eyebrow", "Explorer" }
                h2 { class: "section-heading",
                    "Entrez dans "
                    span { class: "drama", "l'univers" }
                }
                p { class: "section-sub",
                    "Deux espaces pour découvrir et acquérir les œuvres de Flo M."
                }
            }

            div { class: "explorer-grid",
                a {
                    class: "explorer-card",
                    href: GALLERY_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",

                    div { class: "explorer-card-bg",
                        img {
                            src: "https://images.unsplash.com/photo-1513364776144-60967b0f800f?w=800&q=80",
                            alt: "Galerie",
                        }
                        div { class: "explorer-card-veil" }
                    }

                    div { class: "explorer-card-body",
                        div { class: "explorer-chip", {icons::Eye(28)} }
                        h3 { class: "explorer-title", "Galerie" }
                        p { class: "explorer-desc",
                            "Explorez l'intégralité des collections — peintures, sculptures, et œuvres mixtes. "
                            "Un voyage visuel à travers des années de création."
                        }
                    }

                    div { class: "explorer-card-foot",
                        span { "Visiter la galerie" }
                        {icons::ArrowUpRight(18)}
                    }
                }

                a {
                    class: "explorer-card gilded",
                    href: SHOP_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",

                    div { class: "explorer-card-bg",
                        img {
                            src: "https://images.unsplash.com/photo-1460661419201-fd4cecdf8a8b?w=800&q=80",
                            alt: "Boutique",
                        }
                        div { class: "explorer-card-veil gilded" }
                    }

                    div { class: "explorer-card-body",
                        div { class: "explorer-chip dark", {icons::ShoppingBag(28)} }
                        h3 { class: "explorer-title", "Boutique" }
                        p { class: "explorer-desc",
                            "Acquérez des pièces originales, des tirages et des créations uniques. "
                            "Chaque achat soutient directement l'artiste."
                        }
                    }

                    div { class: "explorer-card-foot",
                        span { "Accéder à la boutique" }
                        {icons::ArrowUpRight(18)}
                    }
                }
            }
        }
    }
}
