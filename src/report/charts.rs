// src/report/charts.rs
//
// Chart series derived from the artifacts. Pure data; no drawing here.
// Rows with a missing value are left out of the series they would plot.

use std::collections::HashMap;

use crate::config::consts::*;
use crate::error::SchemaError;

use super::Table;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the whole pie, 0..=1
    pub share: f64,
}

impl PieSlice {
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

/// Box-and-whisker summary of one SKU's unit prices.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub label: String,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_lo: f64,
    pub whisker_hi: f64,
    pub outliers: Vec<f64>,
    pub n: usize,
}

/// First `n` summary rows by units sold (the summary is already ranked).
pub fn top_by_volume(summary: &Table, n: usize) -> Result<Vec<Bar>, SchemaError> {
    let skus = summary.texts(C_SKU)?;
    let units = summary.numbers(C_UNITS_SOLD)?;
    Ok(bars(skus.into_iter().zip(units).take(n)))
}

/// First `n` revenue rows as pie slices. Shares are relative to those `n`.
pub fn revenue_share(revenue: &Table, n: usize) -> Result<Vec<PieSlice>, SchemaError> {
    let skus = revenue.texts(C_SKU)?;
    let amounts = revenue.numbers(C_AMOUNT)?;
    let kept: Vec<(String, f64)> = skus
        .into_iter()
        .zip(amounts)
        .take(n)
        .filter_map(|(sku, v)| v.filter(|v| *v > 0.0).map(|v| (sku, v)))
        .collect();

    let total: f64 = kept.iter().map(|(_, v)| v).sum();
    Ok(kept
        .into_iter()
        .map(|(label, value)| PieSlice { label, value, share: value / total })
        .collect())
}

/// Unit price spread for the `n` SKUs with the most sales lines, in order of
/// first appearance in the sales table.
pub fn price_variability(sales: &Table, n: usize) -> Result<Vec<BoxStats>, SchemaError> {
    let skus = sales.texts(C_SKU)?;
    let prices = sales.numbers(C_UNIT_PRICE)?;

    // (count, first row) per SKU
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (row, sku) in skus.iter().enumerate() {
        if sku.is_empty() {
            continue;
        }
        counts.entry(sku.as_str()).or_insert((0, row)).0 += 1;
    }
    let mut ranked: Vec<(&str, usize, usize)> = counts.into_iter().map(|(k, (c, f))| (k, c, f)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(n);
    // plot order: first appearance
    ranked.sort_by_key(|&(_, _, first)| first);

    let mut out = Vec::with_capacity(ranked.len());
    for (sku, _, _) in ranked {
        let values: Vec<f64> = skus
            .iter()
            .zip(&prices)
            .filter(|(s, _)| s.as_str() == sku)
            .filter_map(|(_, p)| *p)
            .collect();
        if let Some(stats) = box_stats(sku, values) {
            out.push(stats);
        }
    }
    Ok(out)
}

/// Summary rows ordered by average profit per unit, highest first (stable).
pub fn most_profitable(summary: &Table, n: usize) -> Result<Vec<Bar>, SchemaError> {
    let skus = summary.texts(C_SKU)?;
    let profit = summary.numbers(C_AVG_PROFIT)?;
    let mut all = bars(skus.into_iter().zip(profit));
    all.sort_by(|a, b| b.value.total_cmp(&a.value));
    all.truncate(n);
    Ok(all)
}

/// Low-margin SKUs that are also among the first `n` best sellers, in
/// low-margin order. Empty when there is no overlap.
pub fn low_margin_top_sellers(low_margin: &Table, summary: &Table, n: usize) -> Result<Vec<Bar>, SchemaError> {
    let top: Vec<String> = summary.texts(C_SKU)?.into_iter().take(n).collect();
    let skus = low_margin.texts(C_SKU)?;
    let profit = low_margin.numbers(C_AVG_PROFIT)?;

    let mut out = Vec::new();
    for (sku, p) in skus.into_iter().zip(profit) {
        let Some(p) = p else { continue };
        // a SKU listed twice among the top sellers joins twice
        for _ in top.iter().filter(|t| **t == sku) {
            out.push(Bar { label: sku.clone(), value: p });
        }
    }
    Ok(out)
}

/// Every salesperson row, in file order.
pub fn salesperson_revenue(perf: &Table) -> Result<Vec<Bar>, SchemaError> {
    let names = perf.texts(C_SALES_PERSON)?;
    let revenue = perf.numbers(C_TOTAL_REVENUE)?;
    Ok(bars(names.into_iter().zip(revenue)))
}

fn bars(pairs: impl Iterator<Item = (String, Option<f64>)>) -> Vec<Bar> {
    pairs
        .filter_map(|(label, v)| v.map(|value| Bar { label, value }))
        .collect()
}

/// Linear-interpolated percentile of sorted values (`p` in 0..=1).
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Quartiles, 1.5·IQR whiskers and outliers. `None` for no values.
pub fn box_stats(label: &str, mut values: Vec<f64>) -> Option<BoxStats> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let q1 = percentile(&values, 0.25);
    let median = percentile(&values, 0.5);
    let q3 = percentile(&values, 0.75);
    let iqr = q3 - q1;
    let (lo_fence, hi_fence) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

    let inside = values.iter().copied().filter(|v| *v >= lo_fence && *v <= hi_fence);
    let whisker_lo = inside.clone().fold(f64::INFINITY, f64::min);
    let whisker_hi = inside.fold(f64::NEG_INFINITY, f64::max);
    let outliers = values.iter().copied().filter(|v| *v < lo_fence || *v > hi_fence).collect();

    Some(BoxStats {
        label: s!(label),
        q1,
        median,
        q3,
        whisker_lo,
        whisker_hi,
        outliers,
        n: values.len(),
    })
}
