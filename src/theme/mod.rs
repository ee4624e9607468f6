//! Theme for Atelier Flo M.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
