//! Protocol section - the three steps of the creative process.
//!
//! Each step fills the viewport with copy on the left and an ambient
//! CSS-animated visual on the right: orbit rings, a dot grid under a
//! sweeping scan line, and a self-drawing pulse waveform.

use dioxus::prelude::*;

use crate::theme::colors;

/// Which ambient visual a step carries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum StepVisual {
    Orbit,
    Scan,
    Pulse,
}

struct Step {
    num: &'static str,
    title: &'static str,
    desc: &'static str,
    visual: StepVisual,
}

const STEPS: [Step; 3] = [
    Step {
        num: "01",
        title: "Inspiration",
        desc: "Observer, ressentir, capturer l'essence du moment. Chaque création naît d'une émotion, d'un fragment de lumière, d'un souvenir.",
        visual: StepVisual::Orbit,
    },
    Step {
        num: "02",
        title: "Création",
        desc: "Les mains façonnent la matière. L'acrylique rencontre le collage, les textures se superposent, les couleurs dialoguent.",
        visual: StepVisual::Scan,
    },
    Step {
        num: "03",
        title: "Partage",
        desc: "L'œuvre prend vie dans le regard de l'autre. Expositions, galerie en ligne, boutique — chaque pièce trouve sa destination.",
        visual: StepVisual::Pulse,
    },
];

const WAVEFORM: &str = "M0,60 Q30,60 40,60 T60,60 80,60 Q90,60 100,20 Q110,100 120,60 Q130,60 140,60 T160,60 180,60 Q190,60 200,30 Q210,90 220,60 Q230,60 240,60 T260,60 280,60 300,60";

/// "Processus" section: three full-height step panels.
#[component]
pub fn Protocol() -> Element {
    rsx! {
        section { id: "processus", class: "protocol",
            for (i, step) in STEPS.iter().enumerate() {
                div {
                    key: "{step.num}",
                    class: if i % 2 == 0 { "protocol-panel" } else { "protocol-panel alt" },

                    div { class: "protocol-grid",
                        div { class: "protocol-copy",
                            span { class: "protocol-num", "{step.num}" }
                            h3 { class: "protocol-title", "{step.title}" }
                            p { class: "protocol-desc", "{step.desc}" }
                        }

                        div { class: "protocol-visual",
                            {render_step_visual(step.visual)}
                        }
                    }
                }
            }
        }
    }
}

/// Render the ambient visual for a step.
fn render_step_visual(visual: StepVisual) -> Element {
    match visual {
        StepVisual::Orbit => rsx! {
            div { class: "orbit slow-rotate",
                svg { view_box: "0 0 240 240", fill: "none",
                    circle { cx: "120", cy: "120", r: "100", stroke: colors::CHAMPAGNE, stroke_width: "0.5", opacity: "0.3" }
                    circle { cx: "120", cy: "120", r: "70", stroke: colors::CHAMPAGNE, stroke_width: "0.5", opacity: "0.5" }
                    circle { cx: "120", cy: "120", r: "40", stroke: colors::CHAMPAGNE, stroke_width: "1", opacity: "0.7" }
                    for angle in [0u32, 60, 120, 180, 240, 300] {
                        {
                            let rad = f64::from(angle).to_radians();
                            let x1 = format!("{:.1}", 120.0 + rad.cos() * 40.0);
                            let y1 = format!("{:.1}", 120.0 + rad.sin() * 40.0);
                            let x2 = format!("{:.1}", 120.0 + rad.cos() * 100.0);
                            let y2 = format!("{:.1}", 120.0 + rad.sin() * 100.0);
                            rsx! {
                                line {
                                    key: "{angle}",
                                    x1: "{x1}",
                                    y1: "{y1}",
                                    x2: "{x2}",
                                    y2: "{y2}",
                                    stroke: colors::CHAMPAGNE,
                                    stroke_width: "0.5",
                                    opacity: "0.3",
                                }
                            }
                        }
                    }
                    circle { cx: "120", cy: "20", r: "4", fill: colors::CHAMPAGNE, opacity: "0.8" }
                    circle { cx: "120", cy: "220", r: "4", fill: colors::CHAMPAGNE, opacity: "0.4" }
                }
            }
        },
        StepVisual::Scan => rsx! {
            div { class: "scan-field",
                svg { view_box: "0 0 240 240",
                    for row in 0..8u32 {
                        for col in 0..8u32 {
                            {
                                let cx = 30 + col * 26;
                                let cy = 30 + row * 26;
                                rsx! {
                                    circle {
                                        key: "{row}-{col}",
                                        cx: "{cx}",
                                        cy: "{cy}",
                                        r: "2",
                                        fill: colors::CHAMPAGNE,
                                        opacity: "0.15",
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "scan-line" }
            }
        },
        StepVisual::Pulse => rsx! {
            svg { class: "pulse-field", view_box: "0 0 300 120",
                path {
                    class: "pulse-wave",
                    d: WAVEFORM,
                    stroke: colors::CHAMPAGNE,
                    stroke_width: "2",
                    fill: "none",
                    opacity: "0.8",
                }
                path {
                    class: "pulse-wave halo",
                    d: WAVEFORM,
                    stroke: colors::CHAMPAGNE,
                    stroke_width: "6",
                    fill: "none",
                    opacity: "0.1",
                }
            }
        },
    }
}
