//! Landing page - the whole experience on one scroll.
//!
//! Sections stack in a fixed order; they share no state and each animated
//! card owns its own timers.

use dioxus::prelude::*;

use crate::components::{Explorer, Features, Footer, Hero, Navbar, Philosophy, Protocol};

/// Single-page landing layout.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "page",
            Navbar {}
            Hero {}
            Features {}
            Philosophy {}
            Protocol {}
            Explorer {}
            Footer {}
        }
    }
}
