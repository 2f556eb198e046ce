// src/gui/components/dashboard.rs
//
// Dashboard tab: artifact directory, KPI tiles, then the panels two per row.

use eframe::egui::{self, Color32, RichText};

use crate::gui::{actions, app::App};
use crate::report::{DashboardModel, Panel};

use super::charts;

const INFO_FILL: Color32 = Color32::from_rgb(0x1f, 0x3a, 0x5a);
const ERROR_FILL: Color32 = Color32::from_rgb(0x5a, 0x1f, 0x1f);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Artifacts:");
        ui.add(egui::TextEdit::singleline(&mut app.data_dir_text).font(egui::TextStyle::Monospace));
        if ui.button("Load").clicked() {
            actions::load_dashboard(app);
        }
    });
    ui.separator();

    match &app.dashboard {
        None => {
            ui.weak("Loading…");
        }
        Some(Err(msg)) => {
            message_box(ui, ERROR_FILL, &format!("Could not load the dashboard data.\n{msg}"));
        }
        Some(Ok(model)) => {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| model_view(ui, model));
        }
    }
}

fn model_view(ui: &mut egui::Ui, model: &DashboardModel) {
    ui.heading(model.title);
    ui.label(RichText::new(model.subtitle).italics());
    ui.add_space(8.0);

    ui.columns(model.tiles.len(), |cols| {
        for (col, tile) in cols.iter_mut().zip(&model.tiles) {
            egui::Frame::group(col.style()).show(col, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(&tile.label).weak());
                    ui.label(RichText::new(&tile.value).size(22.0).strong());
                });
            });
        }
    });
    ui.add_space(12.0);

    for pair in model.panels.chunks(2) {
        ui.columns(2, |cols| {
            for (col, panel) in cols.iter_mut().zip(pair) {
                panel_view(col, panel);
            }
        });
        ui.add_space(12.0);
    }

    ui.separator();
    ui.weak(model.caption);
}

fn panel_view(ui: &mut egui::Ui, panel: &Panel) {
    ui.label(RichText::new(panel.heading()).heading());
    match panel {
        Panel::Notice { message, .. } => message_box(ui, INFO_FILL, message),
        Panel::Chart { title, chart, .. } => {
            if let Some(t) = title {
                ui.label(RichText::new(t).strong());
            }
            charts::draw(ui, chart);
        }
    }
}

fn message_box(ui: &mut egui::Ui, fill: Color32, text: &str) {
    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(text).color(Color32::WHITE));
    });
}
