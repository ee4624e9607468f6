//! Launch options surfaced to components.
//!
//! The shell has no shared mutable state; the only thing components need
//! from the outside is whether the self-animating cards should run their
//! timer loops.
//!
//! ## Usage
//!
//! ```ignore
//! // In a component
//! let motion = use_motion();
//! if motion.reduced { /* render the static frame */ }
//! ```

use dioxus::prelude::*;

/// Motion preferences from the command line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MotionPrefs {
    /// When set, widgets render a static final frame and start no timers.
    pub reduced: bool,
}

/// Hook to read the motion preferences from context.
pub fn use_motion() -> MotionPrefs {
    use_context::<Signal<MotionPrefs>>()()
}
