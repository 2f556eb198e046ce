// src/gui/components/receipts.rs
//
// Input list for the extractor. Paths are read top to bottom.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Reports (one path per line):");
    ui.add(
        egui::TextEdit::multiline(&mut app.state.gui.inputs_text)
            .desired_rows(4)
            .desired_width(f32::INFINITY)
            .font(egui::TextStyle::Monospace),
    );

    ui.horizontal(|ui| {
        if ui.button("Extract").clicked() {
            actions::extract(app);
        }
        ui.label(format!("{} record(s)", app.records.len()));
    });
}
