//! Color constants for the gallery-night palette.

#![allow(dead_code)]

// === OBSIDIAN (Backgrounds) ===
pub const OBSIDIAN: &str = "#0D0D12";
pub const OBSIDIAN_LIFTED: &str = "#111118";
pub const SLATE: &str = "#2A2A35";

// === CHAMPAGNE (Accent, Titles, Highlights) ===
pub const CHAMPAGNE: &str = "#C9A84C";
pub const CHAMPAGNE_GLOW: &str = "rgba(201, 168, 76, 0.2)";
pub const CHAMPAGNE_FAINT: &str = "rgba(201, 168, 76, 0.1)";

// === IVORY (Text) ===
pub const IVORY: &str = "#FAF8F5";
pub const IVORY_SOFT: &str = "rgba(250, 248, 245, 0.6)";
pub const IVORY_MUTED: &str = "rgba(250, 248, 245, 0.4)";
pub const IVORY_FAINT: &str = "rgba(250, 248, 245, 0.2)";

// === MEDIUM ACCENTS ===
pub const ACCENT_GOLD: &str = "#C9A84C";
pub const ACCENT_STEEL: &str = "#7B8794";
pub const ACCENT_UMBER: &str = "#A67C52";

// === SEMANTIC ===
pub const STATUS_GREEN: &str = "#22c55e";
