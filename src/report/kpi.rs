// src/report/kpi.rs
use std::collections::HashMap;

use crate::config::consts::*;
use crate::error::SchemaError;

use super::Artifacts;

#[derive(Clone, Debug, PartialEq)]
pub struct Kpis {
    pub total_sales: f64,
    pub total_units: f64,
    /// Mean of per-receipt totals; `None` with no receipts.
    pub avg_cart_value: Option<f64>,
    /// First SKU of the summary (it is ranked by units sold).
    pub best_seller: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KpiTile {
    pub label: String,
    pub value: String,
}

pub fn compute(a: &Artifacts) -> Result<Kpis, SchemaError> {
    let amounts = a.sales.numbers(C_AMOUNT)?;
    let qtys = a.sales.numbers(C_QTY)?;
    let receipts = a.sales.texts(C_RECEIPT)?;

    let total_sales = amounts.iter().flatten().sum();
    let total_units = qtys.iter().flatten().sum();

    // Rows without a receipt id do not form a cart.
    let mut carts: HashMap<&str, f64> = HashMap::new();
    for (receipt, amount) in receipts.iter().zip(&amounts) {
        if receipt.is_empty() {
            continue;
        }
        *carts.entry(receipt.as_str()).or_default() += amount.unwrap_or(0.0);
    }
    let avg_cart_value = if carts.is_empty() {
        None
    } else {
        Some(carts.values().sum::<f64>() / carts.len() as f64)
    };

    let best_seller = a.summary.texts(C_SKU)?.into_iter().next();

    Ok(Kpis { total_sales, total_units, avg_cart_value, best_seller })
}

impl Kpis {
    pub fn tiles(&self) -> [KpiTile; 4] {
        let na = || s!("n/a");
        [
            KpiTile { label: format!("Total Sales ({CURRENCY})"), value: fmt_thousands(self.total_sales) },
            KpiTile { label: s!("Total Units Sold"), value: fmt_thousands(self.total_units) },
            KpiTile {
                label: s!("Avg. Cart Value"),
                value: self.avg_cart_value.map(fmt_thousands).unwrap_or_else(na),
            },
            KpiTile { label: s!("Best Seller"), value: self.best_seller.clone().unwrap_or_else(na) },
        ]
    }
}

/// Whole number with comma thousands separators: 1234567.6 → "1,234,568".
pub fn fmt_thousands(v: f64) -> String {
    let digits = format!("{:.0}", v.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if v < 0.0 && digits != "0" {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Table;
    use std::rc::Rc;

    fn t(name: &'static str, headers: &[&str], rows: &[&[&str]]) -> Rc<Table> {
        Rc::new(Table::new(
            name,
            headers.iter().map(|h| s!(*h)).collect(),
            rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect(),
        ))
    }

    fn artifacts(sales_rows: &[&[&str]], summary_rows: &[&[&str]]) -> Artifacts {
        let empty = t("x", &[], &[]);
        Artifacts {
            sales: t("sales", &["Receipt", "NormalizedSKU", "UnitPrice", "Qty", "Amount"], sales_rows),
            summary: t("summary", &["NormalizedSKU", "TotalUnitsSold", "AvgProfitPerUnit"], summary_rows),
            revenue: Rc::clone(&empty),
            salesperson: Rc::clone(&empty),
            low_margin: empty,
        }
    }

    #[test]
    fn totals_and_cart_mean() {
        let a = artifacts(
            &[
                &["R1", "RICE", "1500", "2", "3000"],
                &["R1", "OIL", "1000", "1", "1000"],
                &["R2", "RICE", "1500", "1", "1500"],
                &["", "SALT", "100", "1", "100"],
            ],
            &[&["RICE", "3", "200"], &["OIL", "1", "90"]],
        );
        let k = compute(&a).unwrap();
        assert_eq!(k.total_sales, 5600.0);
        assert_eq!(k.total_units, 5.0);
        assert_eq!(k.avg_cart_value, Some(2750.0));
        assert_eq!(k.best_seller.as_deref(), Some("RICE"));
    }

    #[test]
    fn empty_inputs_show_na() {
        let k = compute(&artifacts(&[], &[])).unwrap();
        let tiles = k.tiles();
        assert_eq!(tiles[0].value, "0");
        assert_eq!(tiles[2].value, "n/a");
        assert_eq!(tiles[3].value, "n/a");
    }

    #[test]
    fn tile_labels() {
        let k = compute(&artifacts(&[&["R1", "A", "1", "1", "1234567"]], &[&["A", "1", "1"]])).unwrap();
        let tiles = k.tiles();
        assert_eq!(tiles[0].label, "Total Sales (₦)");
        assert_eq!(tiles[0].value, "1,234,567");
        assert_eq!(tiles[3].value, "A");
    }

    #[test]
    fn thousands_formatting() {
        assert_eq!(fmt_thousands(0.0), "0");
        assert_eq!(fmt_thousands(999.4), "999");
        assert_eq!(fmt_thousands(1000.0), "1,000");
        assert_eq!(fmt_thousands(1234567.6), "1,234,568");
        assert_eq!(fmt_thousands(-12500.0), "-12,500");
        assert_eq!(fmt_thousands(-0.2), "0");
    }
}
