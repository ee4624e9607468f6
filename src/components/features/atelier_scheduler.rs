//! Atelier scheduler card.
//!
//! A scripted pointer replays the same gesture over a small week
//! calendar: pick a day, mark it, press "Enregistrer", vanish. The
//! machine in `atelier-widgets` owns the phases; this component only
//! renders the current frame.

use dioxus::prelude::*;

use atelier_widgets::{Point, PointerDemo, DAY_COUNT};

use crate::components::icons;
use crate::context::use_motion;
use crate::theme::colors;

const DAY_LABELS: [&str; DAY_COUNT] = ["L", "M", "M", "J", "V", "S", "D"];

/// Class for a day cell depending on whether the pointer marked it.
fn day_cell_class(selected: bool) -> &'static str {
    if selected {
        "scheduler-day selected"
    } else {
        "scheduler-day"
    }
}

/// Inline position for the pointer glyph.
fn pointer_style(target: Point) -> String {
    format!("left: {}px; top: {}px;", target.x, target.y)
}

/// "Atelier & Expos" card with the scripted pointer demo.
#[component]
pub fn AtelierScheduler() -> Element {
    let motion = use_motion();
    let mut demo = use_signal(|| {
        if motion.reduced {
            PointerDemo::resting()
        } else {
            PointerDemo::start(&mut rand::rng())
        }
    });

    use_effect(move || {
        if motion.reduced {
            return;
        }
        spawn(async move {
            loop {
                let dwell = demo().dwell();
                tokio::time::sleep(dwell).await;
                let mut next = demo();
                next.advance(&mut rand::rng());
                demo.set(next);
            }
        });
    });

    let frame = demo();
    let selected = frame.selected_day();
    let pointer_css = frame.pointer().map(pointer_style);

    rsx! {
        div { class: "feature-card",
            div { class: "feature-card-heading",
                span { class: "feature-card-icon", {icons::Layers(18)} }
                h3 { class: "feature-card-title", "Atelier & Expos" }
            }
            p { class: "feature-card-sub", "Un rythme créatif en perpétuel mouvement." }

            div { class: "scheduler-stage",
                div { class: "scheduler-days",
                    for (day, label) in DAY_LABELS.iter().enumerate() {
                        div {
                            key: "{day}",
                            class: day_cell_class(selected == Some(day)),
                            "{label}"
                        }
                    }
                }

                div { class: "scheduler-confirm", "Enregistrer" }

                if let Some(style) = pointer_css {
                    svg {
                        class: "scheduler-pointer",
                        style: "{style}",
                        view_box: "0 0 20 24",
                        width: "20",
                        height: "24",
                        fill: "none",
                        path {
                            d: "M1 1L1 18L5.5 14L9.5 22L12.5 20.5L8.5 12.5L14 11L1 1Z",
                            fill: colors::CHAMPAGNE,
                            stroke: colors::OBSIDIAN,
                            stroke_width: "1",
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
    fn day_cell_class_when_selected() {
        assert_eq!(day_cell_class(true), "scheduler-day selected");
    }

    #[test]
    fn day_cell_class_when_not_selected() {
        assert_eq!(day_cell_class(false), "scheduler-day");
    }

    #[test]
    fn pointer_style_places_the_glyph() {
        let style = pointer_style(PointerDemo::day_slot(2));
        assert_eq!(style, "left: 96px; top: 40px;");
    }
}
