use dioxus::prelude::*;

use crate::context::MotionPrefs;
use crate::pages::Landing;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The landing page; section navigation is in-page anchors.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
}

/// Root application component.
///
/// Provides global styles, motion preferences, and routing.
#[component]
pub fn App() -> Element {
    let motion: Signal<MotionPrefs> = use_signal(crate::get_motion_prefs);
    use_context_provider(|| motion);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
