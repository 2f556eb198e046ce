// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::{Path, PathBuf};

use eframe::egui::ViewportBuilder;
use sales_dash::config::{consts::LOG_FILE, options::AppOptions, state::GuiState};
use sales_dash::{gui, log};

fn main() {
    // No console on Windows; a broken log file must not stop the window.
    let _ = log::init_file(Path::new(LOG_FILE));

    let mut app_options = AppOptions::default();
    // optional first argument: directory holding the dashboard artifacts
    if let Some(dir) = std::env::args_os().nth(1) {
        app_options.report.data_dir = PathBuf::from(dir);
    }

    let gui_state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([gui_state.window_w as f32, gui_state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, app_options) {
        tracing::error!("gui failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
