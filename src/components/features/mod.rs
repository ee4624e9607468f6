//! Feature cards - the three self-driving widgets.
//!
//! Each card owns its own timer loop and local state; there is no
//! communication between them.

mod atelier_scheduler;
mod medium_shuffler;
mod statement_typewriter;

pub use atelier_scheduler::AtelierScheduler;
pub use medium_shuffler::MediumShuffler;
pub use statement_typewriter::StatementTypewriter;

use dioxus::prelude::*;

/// "Univers Artistique" section: header plus the three animated cards.
#[component]
pub fn Features() -> Element {
    rsx! {
        section { id: "univers", class: "features",
            div { class: "section-intro",
                span { class: "eyebrow", "Univers Artistique" }
                h2 { class: "section-heading",
                    "Un monde de "
                    span { class: "drama", "matières" }
                }
            }

            div { class: "features-grid",
                MediumShuffler {}
                StatementTypewriter {}
                AtelierScheduler {}
            }
        }
    }
}
