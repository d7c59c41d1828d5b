//! PAWScoin Tracker - simulated price ticker
//!
//! Draws a skewed random PAWScoin price every few seconds, plots the history
//! and shows a Monte Carlo histogram of where the next price may land.

mod charts;
mod config;
mod gui;
mod market;
mod stats;

use config::constants::window;
use eframe::egui;
use gui::PawsTrackerApp;
use std::panic;

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Error)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), my_code_level)
        .parse_default_env()
        .init();
}

fn main() -> eframe::Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    init_log();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window::INNER_SIZE)
            .with_min_inner_size(window::MIN_INNER_SIZE)
            .with_title(window::TITLE),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        window::TITLE,
        options,
        Box::new(|cc| {
            let app = PawsTrackerApp::new(cc).inspect_err(|e| {
                log::error!("Failed to start tracker: {}", e);
            })?;
            Ok(Box::new(app))
        }),
    )
}
