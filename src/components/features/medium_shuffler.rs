//! Medium shuffler card.
//!
//! Three labeled mediums stacked front-to-back; every few seconds the
//! back card slides to the front. Position, opacity, and scale follow the
//! card's display rank.

use dioxus::prelude::*;

use atelier_widgets::{CardStack, SHUFFLE_PERIOD};

use crate::components::icons;
use crate::context::use_motion;
use crate::theme::colors;

/// A medium entry with its accent color.
struct Medium {
    label: &'static str,
    accent: &'static str,
}

const MEDIUMS: [Medium; 3] = [
    Medium {
        label: "Acrylique & Techniques mixtes",
        accent: colors::ACCENT_GOLD,
    },
    Medium {
        label: "Sculpture & Volume",
        accent: colors::ACCENT_STEEL,
    },
    Medium {
        label: "Collage & Assemblage",
        accent: colors::ACCENT_UMBER,
    },
];

/// Inline style for a stacked card at the given display rank (0 = front).
fn stack_style(rank: usize, accent: &str) -> String {
    format!(
        "top: {}px; z-index: {}; opacity: {:.1}; transform: scale({:.2}); border-left-color: {};",
        rank * 28,
        3 - rank,
        1.0 - rank as f64 * 0.2,
        1.0 - rank as f64 * 0.04,
        accent,
    )
}

/// "Médiums Artistiques" card with the rotating stack.
#[component]
pub fn MediumShuffler() -> Element {
    let motion = use_motion();
    let mut stack = use_signal(CardStack::new);

    use_effect(move || {
        if motion.reduced {
            return;
        }
        spawn(async move {
            loop {
                tokio::time::sleep(SHUFFLE_PERIOD).await;
                let mut next = stack();
                next.rotate();
                stack.set(next);
            }
        });
    });

    rsx! {
        div { class: "feature-card",
            div { class: "feature-card-heading",
                span { class: "feature-card-icon", {icons::Brush(18)} }
                h3 { class: "feature-card-title", "Médiums Artistiques" }
            }
            p { class: "feature-card-sub", "Un voyage à travers les matières et les textures." }

            div { class: "shuffler-stage",
                for (rank, card) in stack().order().into_iter().enumerate() {
                    {
                        let medium = &MEDIUMS[card];
                        let style = stack_style(rank, medium.accent);
                        let number = format!("0{}", card + 1);
                        rsx! {
                            div {
                                key: "{card}",
                                class: "shuffler-card",
                                style: "{style}",
                                span { class: "shuffler-index", "{number}" }
                                p { class: "shuffler-label", "{medium.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_card_sits_on_top_fully_opaque() {
        let style = stack_style(0, "#C9A84C");
        assert!(style.contains("top: 0px"));
        assert!(style.contains("z-index: 3"));
        assert!(style.contains("opacity: 1.0"));
        assert!(style.contains("scale(1.00)"));
        assert!(style.contains("border-left-color: #C9A84C"));
    }

    #[test]
    fn back_card_recedes() {
        let style = stack_style(2, "#A67C52");
        assert!(style.contains("top: 56px"));
        assert!(style.contains("z-index: 1"));
        assert!(style.contains("opacity: 0.6"));
        assert!(style.contains("scale(0.92)"));
    }
}
