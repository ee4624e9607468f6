//! Atelier Flo M - widget state machines
//!
//! The landing experience is a stack of decorative sections; the only
//! behavior-bearing pieces are three self-driving cards. This crate holds
//! their state machines as plain types driven by an external clock, so the
//! desktop shell stays a thin rendering layer:
//!
//! - [`CardStack`]: cyclic rotation order for the medium cards
//! - [`Typewriter`]: character-by-character statement reveal
//! - [`PointerDemo`]: scripted pointer selecting a day and confirming
//! - [`Cadence`]: a cancellable fixed-period task bound to its handle
//!
//! Each machine exposes `advance()` plus a dwell duration for the next
//! step; the caller owns the timer loop and its cancellation.

mod cadence;
mod carousel;
mod error;
mod pointer_demo;
mod typewriter;

pub use cadence::Cadence;
pub use carousel::{CardStack, DECK_SIZE, SHUFFLE_PERIOD};
pub use pointer_demo::{
    Point, PointerDemo, PointerPhase, CONFIRM_TARGET, CYCLE_PERIOD, DAY_COUNT,
};
pub use typewriter::{TypePhase, Typewriter, LINE_PAUSE, TYPE_INTERVAL};

pub use error::WidgetError;
