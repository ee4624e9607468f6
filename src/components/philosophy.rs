//! Philosophy section - the manifesto.

use dioxus::prelude::*;

/// "Démarche" manifesto section.
#[component]
pub fn Philosophy() -> Element {
    rsx! {
        section { id: "demarche", class: "philosophy",
            div { class: "philosophy-texture",
                img {
                    src: "https://images.unsplash.com/photo-1541961017774-22349e4a1262?w=1920&q=80",
                    alt: "Texture",
                }
            }

            div { class: "philosophy-inner",
                span { class: "eyebrow", "Démarche" }
                p { class: "philosophy-lead",
                    "La plupart des artistes cherchent la perfection technique, "
                    "la maîtrise absolue de leur médium."
                }
                p { class: "philosophy-statement",
                    span { class: "plain", "Flo M cherche " }
                    span { class: "drama", "l'émotion" }
                    span { class: "plain", " brute," }
                    br {}
                    span { class: "plain", "celle qui " }
                    span { class: "drama", "transforme" }
                    span { class: "plain", " le regard." }
                }
            }
        }
    }
}
