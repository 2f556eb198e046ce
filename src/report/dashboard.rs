// src/report/dashboard.rs
use std::fmt::Write as _;

use tracing::debug;

use crate::config::consts::*;
use crate::error::SchemaError;

use super::charts::{self, Bar, BoxStats, PieSlice};
use super::kpi::{self, KpiTile};
use super::Artifacts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Chart {
    Bars {
        orientation: Orientation,
        /// Axis caption for the value axis
        value_axis: &'static str,
        bars: Vec<Bar>,
    },
    Pie(Vec<PieSlice>),
    Boxes(Vec<BoxStats>),
}

impl Chart {
    pub fn is_empty(&self) -> bool {
        match self {
            Chart::Bars { bars, .. } => bars.is_empty(),
            Chart::Pie(slices) => slices.is_empty(),
            Chart::Boxes(boxes) => boxes.is_empty(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Panel {
    Chart {
        heading: String,
        title: Option<String>,
        chart: Chart,
    },
    /// Stands in for a chart that has nothing to show.
    Notice { heading: String, message: String },
}

impl Panel {
    pub fn heading(&self) -> &str {
        match self {
            Panel::Chart { heading, .. } | Panel::Notice { heading, .. } => heading,
        }
    }
}

/// Everything the dashboard shows, computed once from the artifacts.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardModel {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tiles: [KpiTile; 4],
    pub panels: Vec<Panel>,
    pub caption: &'static str,
}

impl DashboardModel {
    pub fn build(a: &Artifacts) -> Result<Self, SchemaError> {
        let tiles = kpi::compute(a)?.tiles();

        let low_margin = charts::low_margin_top_sellers(&a.low_margin, &a.summary, TOP_SELLERS_FOR_MARGIN)?;
        let low_margin_heading = format!("⚠️ Top-Selling but Low-Margin SKUs (<{CURRENCY}{LOW_MARGIN_LIMIT} Profit)");
        let low_margin_panel = if low_margin.is_empty() {
            debug!("no low-margin top sellers; notice instead of chart");
            Panel::Notice {
                heading: low_margin_heading,
                message: s!("No overlap found or AvgProfitPerUnit missing from low-margin + top-selling SKUs."),
            }
        } else {
            Panel::Chart {
                heading: low_margin_heading,
                title: Some(s!("Top-Selling SKUs with Low Profit")),
                chart: Chart::Bars {
                    orientation: Orientation::Vertical,
                    value_axis: C_AVG_PROFIT,
                    bars: low_margin,
                },
            }
        };

        let panels = vec![
            Panel::Chart {
                heading: format!("🛍️ Top {TOP_VOLUME} Best-Selling SKUs"),
                title: Some(format!("Top {TOP_VOLUME} by Volume")),
                chart: Chart::Bars {
                    orientation: Orientation::Horizontal,
                    value_axis: C_UNITS_SOLD,
                    bars: charts::top_by_volume(&a.summary, TOP_VOLUME)?,
                },
            },
            Panel::Chart {
                heading: s!("💰 Revenue Distribution"),
                title: None,
                chart: Chart::Pie(charts::revenue_share(&a.revenue, TOP_REVENUE)?),
            },
            Panel::Chart {
                heading: format!("🎯 Price Variability for Top {TOP_PRICE_SKUS} SKUs"),
                title: None,
                chart: Chart::Boxes(charts::price_variability(&a.sales, TOP_PRICE_SKUS)?),
            },
            Panel::Chart {
                heading: s!("🧠 Most Profitable SKUs"),
                title: Some(format!("Top {TOP_PROFIT} by Profit per Unit")),
                chart: Chart::Bars {
                    orientation: Orientation::Vertical,
                    value_axis: C_AVG_PROFIT,
                    bars: charts::most_profitable(&a.summary, TOP_PROFIT)?,
                },
            },
            low_margin_panel,
            Panel::Chart {
                heading: s!("🙋 Salesperson Performance"),
                title: Some(s!("Revenue by Salesperson")),
                chart: Chart::Bars {
                    orientation: Orientation::Horizontal,
                    value_axis: C_TOTAL_REVENUE,
                    bars: charts::salesperson_revenue(&a.salesperson)?,
                },
            },
        ];

        debug!(panels = panels.len(), "dashboard model built");
        Ok(Self {
            title: DASHBOARD_TITLE,
            subtitle: DASHBOARD_SUBTITLE,
            tiles,
            panels,
            caption: DASHBOARD_CAPTION,
        })
    }
}

/// Plain-text rendition for terminals and logs.
pub fn render_text(m: &DashboardModel) -> String {
    let mut out = String::new();
    // writeln! into a String cannot fail
    let _ = writeln!(out, "{}\n{}\n", m.title, m.subtitle);
    for tile in &m.tiles {
        let _ = writeln!(out, "  {:<18} {}", tile.label, tile.value);
    }

    for panel in &m.panels {
        let _ = writeln!(out, "\n{}", panel.heading());
        match panel {
            Panel::Notice { message, .. } => {
                let _ = writeln!(out, "  ({message})");
            }
            Panel::Chart { title, chart, .. } => {
                if let Some(t) = title {
                    let _ = writeln!(out, "  {t}");
                }
                render_chart(&mut out, chart);
            }
        }
    }

    let _ = writeln!(out, "\n{}", m.caption);
    out
}

fn render_chart(out: &mut String, chart: &Chart) {
    if chart.is_empty() {
        let _ = writeln!(out, "  (no data)");
        return;
    }
    match chart {
        Chart::Bars { value_axis, bars, .. } => {
            let _ = writeln!(out, "  [{value_axis}]");
            for b in bars {
                let _ = writeln!(out, "  {:<32} {}", b.label, kpi::fmt_thousands(b.value));
            }
        }
        Chart::Pie(slices) => {
            for s in slices {
                let _ = writeln!(out, "  {:<32} {:>6}", s.label, s.percent_label());
            }
        }
        Chart::Boxes(boxes) => {
            for b in boxes {
                let _ = writeln!(
                    out,
                    "  {:<32} n={:<4} min={} q1={} med={} q3={} max={} outliers={}",
                    b.label,
                    b.n,
                    b.whisker_lo,
                    b.q1,
                    b.median,
                    b.q3,
                    b.whisker_hi,
                    b.outliers.len()
                );
            }
        }
    }
}
