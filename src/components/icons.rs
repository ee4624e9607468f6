//! Inline Lucide-style icons.
//!
//! Small stroked SVGs rendered in place, sized by the caller and colored
//! via `currentColor`.

use dioxus::prelude::*;

fn icon_frame(size: u32, body: Element) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {body}
        }
    }
}

/// Lucide arrow-up-right.
pub fn ArrowUpRight(size: u32) -> Element {
    icon_frame(
        size,
        rsx! {
            path { d: "M7 7h10v10" }
            path { d: "M7 17 17 7" }
        },
    )
}

/// Lucide palette.
pub fn Palette(size: u32) -> Element {
    icon_frame(
        size,
        rsx! {
            circle { cx: "13.5", cy: "6.5", r: ".5", fill: "currentColor" }
            circle { cx: "17.5", cy: "10.5", r: ".5", fill: "currentColor" }
            circle { cx: "8.5", cy: "7.5", r: ".5", fill: "currentColor" }
            circle { cx: "6.5", cy: "12.5", r: ".5", fill: "currentColor" }
            path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" }
        },
    )
}

/// Lucide shopping-bag.
pub fn ShoppingBag(size: u32) -> Element {
    icon_frame(
        size,
        rsx! {
            path { d: "M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" }
            path { d: "M3 6h18" }
            path { d: "M16 10a4 4 0 0 1-8 0" }
        },
    )
}

/// Lucide eye.
pub fn Eye(size: u32) -> Element {
    icon_frame(
        size,
        rsx! {
            path { d: "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0" }
            circle { cx: "12", cy: "12", r: "3" }
        },
    )
}

/// Lucide brush.
pub fn Brush(size: u32) -> Element {
    icon_frame(
        size,
        rsx! {
            path { d: "m9.06 11.9 8.07-8.06a2.85 2.85 0 1 1 4.03 4.03l-8.06 8.08" }
            path { d: "M7.07 14.94c-1.66 0-3 1.35-3 3.02 0 1.33-2.5 1.52-2 2.02 1.08 1.1 2.49 2.02 4 2.02 2.2 0 4-1.8 4-4.04a3.01 3.01 0 0 0-3-3.02z" }
        },
    )
}

/// Lucide layers.
pub fn Layers(size: u32) -> Element {
    icon_frame(
        size,
        rsx! {
            path { d: "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z" }
            path { d: "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" }
            path { d: "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" }
        },
    )
}

/// Lucide chevron-down.
pub fn ChevronDown(size: u32) -> Element {
    icon_frame(
        size,
        rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
    )
}
