//! Artist statement typewriter card.
//!
//! Replays the artist's statements character by character in a
//! terminal-style box with a blinking caret.

use dioxus::prelude::*;

use atelier_widgets::Typewriter;

use crate::context::use_motion;

const STATEMENT_LINES: &[&str] = &[
    "Chaque toile raconte une histoire silencieuse...",
    "La matière parle quand on sait l'écouter.",
    "Créer, c'est donner forme à l'invisible.",
    "L'art est un dialogue entre l'âme et le monde.",
    "Les couleurs sont mes mots, les textures ma voix.",
];

/// "Paroles d'artiste" card with the looping reveal.
#[component]
pub fn StatementTypewriter() -> Element {
    let motion = use_motion();
    let mut machine = use_signal(|| {
        Typewriter::new(STATEMENT_LINES).unwrap_or_else(|e| {
            tracing::error!(error = %e, "statement script rejected");
            Typewriter::default()
        })
    });

    use_effect(move || {
        if motion.reduced {
            return;
        }
        spawn(async move {
            loop {
                let dwell = machine().delay();
                tokio::time::sleep(dwell).await;
                let mut next = machine();
                next.advance();
                machine.set(next);
            }
        });
    });

    let text = if motion.reduced {
        STATEMENT_LINES[0]
    } else {
        machine().visible()
    };

    rsx! {
        div { class: "feature-card",
            div { class: "feature-card-heading",
                span { class: "pulse-dot" }
                span { class: "feature-card-tag", "Paroles d'artiste" }
            }
            p { class: "feature-card-sub", "Les pensées qui guident chaque création." }

            div { class: "typewriter-box",
                span { class: "typewriter-prompt", "> " }
                span { class: "typewriter-text", "{text}" }
                span { class: "typewriter-caret", "▎" }
            }
        }
    }
}
