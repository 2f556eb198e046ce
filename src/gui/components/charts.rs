// src/gui/components/charts.rs
//
// Painter-drawn charts for the dashboard panels. Each chart takes the full
// available width and a fixed height.

use std::f32::consts::TAU;

use eframe::egui::{self, pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind};

use crate::report::charts::{Bar, BoxStats, PieSlice};
use crate::report::kpi::fmt_thousands;
use crate::report::{Chart, Orientation};

const HEIGHT: f32 = 280.0;
const LABEL_FONT: f32 = 11.0;

/// Set2 qualitative palette.
pub const PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x66, 0xc2, 0xa5),
    Color32::from_rgb(0xfc, 0x8d, 0x62),
    Color32::from_rgb(0x8d, 0xa0, 0xcb),
    Color32::from_rgb(0xe7, 0x8a, 0xc3),
    Color32::from_rgb(0xa6, 0xd8, 0x54),
    Color32::from_rgb(0xff, 0xd9, 0x2f),
    Color32::from_rgb(0xe5, 0xc4, 0x94),
    Color32::from_rgb(0xb3, 0xb3, 0xb3),
];

fn color(i: usize) -> Color32 {
    PALETTE[i % PALETTE.len()]
}

pub fn draw(ui: &mut egui::Ui, chart: &Chart) {
    if chart.is_empty() {
        ui.weak("No data");
        return;
    }
    match chart {
        Chart::Bars { orientation: Orientation::Horizontal, value_axis, bars } => hbars(ui, bars, value_axis),
        Chart::Bars { orientation: Orientation::Vertical, value_axis, bars } => vbars(ui, bars, value_axis),
        Chart::Pie(slices) => pie(ui, slices),
        Chart::Boxes(boxes) => box_plot(ui, boxes),
    }
}

/// Maps a value range that always includes zero onto `[a, b]`.
struct Scale {
    lo: f64,
    span: f64,
    a: f32,
    b: f32,
}

impl Scale {
    fn new(values: impl Iterator<Item = f64>, a: f32, b: f32) -> Self {
        let (lo, hi) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let span = if hi > lo { hi - lo } else { 1.0 };
        Self { lo, span, a, b }
    }
    fn at(&self, v: f64) -> f32 {
        self.a + ((v - self.lo) / self.span) as f32 * (self.b - self.a)
    }
}

/// Cut a label to roughly fit `width` pixels.
fn fit(label: &str, width: f32) -> String {
    let max = (width / (LABEL_FONT * 0.55)).max(3.0) as usize;
    if label.chars().count() <= max {
        return s!(label);
    }
    let mut out: String = label.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn axis_caption(painter: &egui::Painter, rect: Rect, caption: &str, text: Color32) {
    painter.text(
        rect.right_bottom(),
        Align2::RIGHT_BOTTOM,
        caption,
        FontId::proportional(LABEL_FONT),
        text,
    );
}

fn hbars(ui: &mut egui::Ui, bars: &[Bar], value_axis: &str) {
    let row_h = 22.0;
    let size = vec2(ui.available_width(), bars.len() as f32 * row_h + 20.0);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = resp.rect;
    let text = ui.visuals().text_color();

    let label_w = (rect.width() * 0.32).min(220.0);
    let plot_left = rect.left() + label_w + 6.0;
    let scale = Scale::new(bars.iter().map(|b| b.value), plot_left, rect.right() - 70.0);
    let zero = scale.at(0.0);

    for (i, bar) in bars.iter().enumerate() {
        let y = rect.top() + i as f32 * row_h;
        let mid = y + row_h * 0.5;
        painter.text(
            pos2(plot_left - 6.0, mid),
            Align2::RIGHT_CENTER,
            fit(&bar.label, label_w),
            FontId::proportional(LABEL_FONT),
            text,
        );

        let x = scale.at(bar.value);
        let r = Rect::from_x_y_ranges(zero.min(x)..=zero.max(x), (y + 3.0)..=(y + row_h - 3.0));
        painter.rect_filled(r, 2.0, color(i));
        painter.text(
            pos2(r.right() + 4.0, mid),
            Align2::LEFT_CENTER,
            fmt_thousands(bar.value),
            FontId::proportional(LABEL_FONT),
            text,
        );

        ui.interact(r, resp.id.with(i), Sense::hover())
            .on_hover_text(format!("{}: {}", bar.label, fmt_thousands(bar.value)));
    }
    painter.line_segment([pos2(zero, rect.top()), pos2(zero, rect.bottom() - 18.0)], Stroke::new(1.0, text));
    axis_caption(&painter, rect, value_axis, ui.visuals().weak_text_color());
}

fn vbars(ui: &mut egui::Ui, bars: &[Bar], value_axis: &str) {
    let size = vec2(ui.available_width(), HEIGHT);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = resp.rect;
    let text = ui.visuals().text_color();

    let label_h = 34.0;
    let plot = Rect::from_min_max(pos2(rect.left(), rect.top() + 16.0), pos2(rect.right(), rect.bottom() - label_h));
    // screen y grows downward: map values onto [bottom, top]
    let scale = Scale::new(bars.iter().map(|b| b.value), plot.bottom(), plot.top());
    let zero = scale.at(0.0);
    let slot = plot.width() / bars.len() as f32;

    for (i, bar) in bars.iter().enumerate() {
        let x0 = plot.left() + i as f32 * slot;
        let y = scale.at(bar.value);
        let r = Rect::from_x_y_ranges((x0 + slot * 0.15)..=(x0 + slot * 0.85), zero.min(y)..=zero.max(y));
        painter.rect_filled(r, 2.0, color(i));
        painter.text(
            pos2(r.center().x, r.top() - 2.0),
            Align2::CENTER_BOTTOM,
            fmt_thousands(bar.value),
            FontId::proportional(LABEL_FONT),
            text,
        );
        painter.text(
            pos2(x0 + slot * 0.5, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            fit(&bar.label, slot),
            FontId::proportional(LABEL_FONT),
            text,
        );

        ui.interact(r, resp.id.with(i), Sense::hover())
            .on_hover_text(format!("{}: {}", bar.label, fmt_thousands(bar.value)));
    }
    painter.line_segment([pos2(plot.left(), zero), pos2(plot.right(), zero)], Stroke::new(1.0, text));
    painter.text(
        rect.left_top(),
        Align2::LEFT_TOP,
        value_axis,
        FontId::proportional(LABEL_FONT),
        ui.visuals().weak_text_color(),
    );
}

fn pie(ui: &mut egui::Ui, slices: &[PieSlice]) {
    let size = vec2(ui.available_width(), HEIGHT);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = resp.rect;
    let text = ui.visuals().text_color();

    let radius = (rect.height() * 0.5 - 8.0).min(rect.width() * 0.25);
    let center = pos2(rect.left() + radius + 8.0, rect.center().y);

    // Start at 12 o'clock, go clockwise.
    let mut angle = -TAU / 4.0;
    for (i, slice) in slices.iter().enumerate() {
        let sweep = slice.share as f32 * TAU;
        let steps = ((sweep / TAU * 96.0).ceil() as usize).max(1);
        let point = |a: f32| center + vec2(a.cos(), a.sin()) * radius;
        for s in 0..steps {
            let a0 = angle + sweep * s as f32 / steps as f32;
            let a1 = angle + sweep * (s + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(vec![center, point(a0), point(a1)], color(i), Stroke::NONE));
        }

        if slice.share >= 0.04 {
            let mid = angle + sweep * 0.5;
            let at: Pos2 = center + vec2(mid.cos(), mid.sin()) * radius * 0.65;
            painter.text(at, Align2::CENTER_CENTER, slice.percent_label(), FontId::proportional(LABEL_FONT), Color32::BLACK);
        }
        angle += sweep;
    }

    // Legend
    let legend_x = center.x + radius + 24.0;
    let legend_w = rect.right() - legend_x - 16.0;
    for (i, slice) in slices.iter().enumerate() {
        let y = rect.top() + 12.0 + i as f32 * 18.0;
        let swatch = Rect::from_min_size(pos2(legend_x, y), vec2(12.0, 12.0));
        painter.rect_filled(swatch, 2.0, color(i));
        painter.text(
            pos2(legend_x + 18.0, y + 6.0),
            Align2::LEFT_CENTER,
            format!("{}  ({})", fit(&slice.label, legend_w - 60.0), slice.percent_label()),
            FontId::proportional(LABEL_FONT),
            text,
        );
    }
}

fn box_plot(ui: &mut egui::Ui, boxes: &[BoxStats]) {
    let size = vec2(ui.available_width(), HEIGHT + 40.0);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = resp.rect;
    let text = ui.visuals().text_color();

    let label_h = 34.0;
    let left_axis = 56.0;
    let plot = Rect::from_min_max(
        pos2(rect.left() + left_axis, rect.top() + 8.0),
        pos2(rect.right(), rect.bottom() - label_h),
    );

    let (lo, hi) = boxes
        .iter()
        .flat_map(|b| b.outliers.iter().copied().chain([b.whisker_lo, b.whisker_hi]))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let pad = ((hi - lo) * 0.05).max(1.0);
    let (lo, hi) = (lo - pad, hi + pad);
    let y = |v: f64| plot.bottom() - ((v - lo) / (hi - lo)) as f32 * plot.height();

    // min / max ticks
    for v in [lo + pad, hi - pad] {
        painter.text(
            pos2(plot.left() - 4.0, y(v)),
            Align2::RIGHT_CENTER,
            fmt_thousands(v),
            FontId::proportional(LABEL_FONT),
            ui.visuals().weak_text_color(),
        );
    }

    let slot = plot.width() / boxes.len() as f32;
    for (i, b) in boxes.iter().enumerate() {
        let cx = plot.left() + (i as f32 + 0.5) * slot;
        let half = slot * 0.3;
        let stroke = Stroke::new(1.2, text);

        let body = Rect::from_x_y_ranges((cx - half)..=(cx + half), y(b.q3)..=y(b.q1));
        painter.rect_filled(body, 0.0, color(i));
        painter.rect_stroke(body, 0.0, stroke, StrokeKind::Inside);
        painter.line_segment([pos2(cx - half, y(b.median)), pos2(cx + half, y(b.median))], Stroke::new(2.0, text));

        // whiskers
        painter.line_segment([pos2(cx, y(b.q3)), pos2(cx, y(b.whisker_hi))], stroke);
        painter.line_segment([pos2(cx, y(b.q1)), pos2(cx, y(b.whisker_lo))], stroke);
        for w in [b.whisker_lo, b.whisker_hi] {
            painter.line_segment([pos2(cx - half * 0.5, y(w)), pos2(cx + half * 0.5, y(w))], stroke);
        }
        for o in &b.outliers {
            painter.circle_stroke(pos2(cx, y(*o)), 3.0, stroke);
        }

        painter.text(
            pos2(cx, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            fit(&b.label, slot),
            FontId::proportional(LABEL_FONT),
            text,
        );

        let hover = Rect::from_x_y_ranges((cx - half)..=(cx + half), plot.y_range());
        ui.interact(hover, resp.id.with(i), Sense::hover()).on_hover_text(format!(
            "{}\nn = {}\nmedian {}\nQ1 {} / Q3 {}\nrange {} to {}\noutliers {}",
            b.label,
            b.n,
            fmt_thousands(b.median),
            fmt_thousands(b.q1),
            fmt_thousands(b.q3),
            fmt_thousands(b.whisker_lo),
            fmt_thousands(b.whisker_hi),
            b.outliers.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_includes_zero() {
        let s = Scale::new([10.0, 30.0].into_iter(), 0.0, 100.0);
        assert_eq!(s.at(0.0), 0.0);
        assert_eq!(s.at(30.0), 100.0);

        let s = Scale::new([-10.0, 10.0].into_iter(), 0.0, 100.0);
        assert_eq!(s.at(0.0), 50.0);
    }

    #[test]
    fn long_labels_are_cut() {
        assert_eq!(fit("RICE", 200.0), "RICE");
        let cut = fit("GOLDEN PENNY SEMOVITA 10KG BAG", 40.0);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() < 10);
    }
}
