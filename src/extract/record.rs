// src/extract/record.rs
use serde::{Deserialize, Serialize};

/// One completed line item: the header row (SKU, price) joined with the
/// detail row (qty, amount, seller) that followed it.
///
/// Text fields are kept exactly as printed in the report. Header-side fields
/// are `None` when no header row preceded the detail row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SalesLineRecord {
    pub date: Option<String>,
    pub time: Option<String>,
    pub receipt: Option<String>,
    pub stock_name: Option<String>,
    pub unit_price: Option<String>,
    pub qty: u32,
    pub amount: i64,
    pub sales_person: String,
}

/// Header-side scratch state, overwritten by every header row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LineHeader {
    pub date: Option<String>,
    pub time: Option<String>,
    pub receipt: Option<String>,
    pub stock_name: Option<String>,
    pub unit_price: Option<String>,
}

impl LineHeader {
    pub fn complete(&self, qty: u32, amount: i64, sales_person: &str) -> SalesLineRecord {
        SalesLineRecord {
            date: self.date.clone(),
            time: self.time.clone(),
            receipt: self.receipt.clone(),
            stock_name: self.stock_name.clone(),
            unit_price: self.unit_price.clone(),
            qty,
            amount,
            sales_person: s!(sales_person),
        }
    }
}

impl SalesLineRecord {
    /// Cells in export column order; absent values become empty strings.
    pub fn to_row(&self) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            opt(&self.date),
            opt(&self.time),
            opt(&self.receipt),
            opt(&self.stock_name),
            opt(&self.unit_price),
            self.qty.to_string(),
            self.amount.to_string(),
            self.sales_person.clone(),
        ]
    }
}
