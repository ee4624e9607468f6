//! Footer - brand blurb, navigation, external links, status line.

use chrono::Datelike;
use dioxus::prelude::*;

use super::icons;
use super::{GALLERY_URL, SHOP_URL};

/// Page footer.
#[component]
pub fn Footer() -> Element {
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                div { class: "footer-grid",
                    div { class: "footer-brand",
                        h4 { class: "footer-mark", "Flo M" }
                        p { class: "footer-blurb",
                            "Plasticienne & artiste visuelle — exploratrice de matières, de couleurs et de sensations. "
                            "Basée en France, inspirée par le monde."
                        }
                    }

                    div { class: "footer-col",
                        h5 { class: "footer-col-title", "Navigation" }
                        ul { class: "footer-list",
                            li { a { href: "#univers", "Univers" } }
                            li { a { href: "#demarche", "Démarche" } }
                            li { a { href: "#processus", "Processus" } }
                            li { a { href: "#explorer", "Explorer" } }
                        }
                    }

                    div { class: "footer-col",
                        h5 { class: "footer-col-title", "Liens" }
                        ul { class: "footer-list",
                            li {
                                a {
                                    href: GALLERY_URL,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    span { "Galerie" }
                                    {icons::ArrowUpRight(12)}
                                }
                            }
                            li {
                                a {
                                    href: SHOP_URL,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    span { "Boutique" }
                                    {icons::ArrowUpRight(12)}
                                }
                            }
                        }
                    }
                }

                div { class: "footer-bottom",
                    p { class: "footer-copyright",
                        "© {year} Flo M — Tous droits réservés"
                    }
                    div { class: "footer-status",
                        span { class: "pulse-dot green" }
                        span { class: "footer-status-label", "Site opérationnel" }
                    }
                }
            }
        }
    }
}
