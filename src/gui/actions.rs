// src/gui/actions.rs
//
// Button "executive" actions. Layout stays in components/; these update
// status and logs and mutate `app` as needed.

use std::path::PathBuf;

use eframe::egui;
use tracing::{error, info, warn};

use crate::extract;
use crate::file;
use crate::gui::app::App;
use crate::gui::progress::GuiProgress;
use crate::report::{Artifacts, DashboardModel};

/// (Re)load the artifacts from the directory in the text field and rebuild
/// the dashboard. Tables already loaded from the same path are reused.
pub fn load_dashboard(app: &mut App) {
    let dir = PathBuf::from(app.data_dir_text.trim());
    app.state.options.report.data_dir = dir.clone();

    let built = Artifacts::load(&dir, &mut app.cache).and_then(|a| DashboardModel::build(&a));
    match built {
        Ok(model) => {
            info!(dir = %dir.display(), cached = app.cache.len(), "dashboard ready");
            app.status("Dashboard ready");
            app.dashboard = Some(Ok(model));
        }
        Err(e) => {
            error!(dir = %dir.display(), "dashboard failed: {e}");
            app.status(format!("Dashboard error: {e}"));
            app.dashboard = Some(Err(e.to_string()));
        }
    }
}

/// One report path per non-blank line of the inputs field.
pub fn input_paths(text: &str) -> Vec<PathBuf> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect()
}

pub fn extract(app: &mut App) {
    let paths = input_paths(&app.state.gui.inputs_text);
    if paths.is_empty() {
        app.status("No reports listed");
        return;
    }
    app.state.options.extract.inputs = paths;

    let mut prog = GuiProgress::new(app.status.clone());
    match extract::extract_documents(&app.state.options.extract.inputs, Some(&mut prog)) {
        Ok(records) => {
            info!(records = records.len(), "gui extraction done");
            app.records = records;
        }
        Err(e) => {
            error!("extraction failed: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}

/// Apply a dirty output field to the export options.
fn sync_out_path(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
        info!(path = %app.state.options.export.out_path().display(), "out path set");
    }
}

pub fn export(app: &mut App) {
    if app.records.is_empty() {
        app.status("Nothing to export");
        return;
    }
    sync_out_path(app);

    match file::write_records(&app.records, &app.state.options.export) {
        Ok(path) => app.status(format!("Exported {} record(s) to {}", app.records.len(), path.display())),
        Err(e) => {
            error!("export failed: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}

pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        return;
    }
    match file::records_to_string(&app.records, &app.state.options.export) {
        Ok(txt) => {
            ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => app.status(format!("Copy error: {e}")),
    }
}

/// Reopen the file the output field points at.
pub fn open_export(app: &mut App) {
    sync_out_path(app);
    let path = app.state.options.export.out_path();
    let export = &app.state.options.export;
    match file::read_records(&path, export.format, export.include_headers) {
        Ok(records) => {
            app.status(format!("Opened {} record(s) from {}", records.len(), path.display()));
            app.records = records;
        }
        Err(e) => {
            warn!(path = %path.display(), "cannot reopen export: {e}");
            app.status(format!("Open error: {e}"));
        }
    }
}
