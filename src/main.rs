#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::MotionPrefs;

/// Global launch options, set from the command line.
static MOTION_PREFS: OnceLock<MotionPrefs> = OnceLock::new();

/// Get the motion preferences (set from command line or default).
pub fn get_motion_prefs() -> MotionPrefs {
    MOTION_PREFS.get().copied().unwrap_or_default()
}

/// Flo M - Plasticienne landing experience
#[derive(Parser, Debug)]
#[command(name = "flom-atelier-desktop")]
#[command(about = "Atelier Flo M - animated landing experience")]
struct Args {
    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Render the animated cards as static frames
    #[arg(long)]
    reduced_motion: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let _ = MOTION_PREFS.set(MotionPrefs {
        reduced: args.reduced_motion,
    });

    tracing::info!(
        width = args.width,
        height = args.height,
        reduced_motion = args.reduced_motion,
        "Starting Atelier Flo M"
    );

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Flo M — Plasticienne")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
