// src/gui/components/data_table.rs
//
// Read-only preview of the extracted records.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::RECORD_HEADERS;
use crate::gui::app::App;

// Date, Time, Receipt, StockName, UnitPrice, Qty, Amount, SalesPerson
const WIDTHS: [f32; 8] = [90.0, 80.0, 90.0, 260.0, 80.0, 50.0, 80.0, 140.0];

fn is_numeric(col: usize) -> bool {
    matches!(col, 4..=6)
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.records.is_empty() {
        ui.weak("No records yet. List reports above and press Extract.");
        return;
    }

    // Scroll bars allocate space instead of floating over content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("records_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui).striped(true).min_scrolled_height(0.0);
            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in RECORD_HEADERS.iter().enumerate() {
                        header.col(|ui| {
                            let text = RichText::new(*h).strong();
                            if is_numeric(ci) {
                                ui.centered_and_justified(|ui| ui.label(text));
                            } else {
                                ui.label(text);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.records.len(), |mut row| {
                        let Some(record) = app.records.get(row.index()) else { return };
                        for (ci, cell) in record.to_row().into_iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if is_numeric(ci) {
                                    ui.centered_and_justified(|ui| ui.label(cell));
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| ui.label(cell));
                                }
                            });
                        }
                    });
                });
        });
}
