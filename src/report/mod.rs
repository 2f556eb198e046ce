// src/report/mod.rs
//! # Reporting façade
//!
//! Loads the five pre-aggregated artifacts, checks their columns, and turns
//! them into KPI tiles and chart series ([`DashboardModel`]). Rendering lives
//! elsewhere: `gui` paints the model, `render_text` prints it.
//!
//! The artifacts are produced offline; nothing here writes them.

pub mod charts;
pub mod dashboard;
pub mod kpi;
pub mod table;

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    rc::Rc,
};

use tracing::info;

use crate::config::consts::*;
use crate::error::SchemaError;

pub use dashboard::{render_text, Chart, DashboardModel, Orientation, Panel};
pub use table::Table;

/// Which artifact a table is, with its file name and the columns it must carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Artifact {
    Sales,
    SkuSummary,
    SkuRevenue,
    Salesperson,
    LowMargin,
}

impl Artifact {
    pub fn name(&self) -> &'static str {
        match self {
            Artifact::Sales => "sales lines",
            Artifact::SkuSummary => "SKU summary",
            Artifact::SkuRevenue => "SKU revenue",
            Artifact::Salesperson => "salesperson performance",
            Artifact::LowMargin => "low-margin SKUs",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            Artifact::Sales => SALES_FILE,
            Artifact::SkuSummary => SUMMARY_FILE,
            Artifact::SkuRevenue => REVENUE_FILE,
            Artifact::Salesperson => SALESPERSON_FILE,
            Artifact::LowMargin => LOW_MARGIN_FILE,
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Artifact::Sales => &[C_RECEIPT, C_SKU, C_UNIT_PRICE, C_QTY, C_AMOUNT],
            Artifact::SkuSummary => &[C_SKU, C_UNITS_SOLD, C_AVG_PROFIT],
            Artifact::SkuRevenue => &[C_SKU, C_AMOUNT],
            Artifact::Salesperson => &[C_SALES_PERSON, C_TOTAL_REVENUE],
            // NormalizedSKU is synthesized when absent
            Artifact::LowMargin => &[C_AVG_PROFIT],
        }
    }

    /// Load, apply the per-artifact fixups, then check columns.
    pub fn load(&self, path: &Path) -> Result<Table, SchemaError> {
        let mut table = Table::load(self.name(), path)?;
        match self {
            Artifact::Salesperson => table.drop_index_columns(),
            Artifact::LowMargin => table.ensure_row_index_column(C_SKU),
            _ => {}
        }
        table.require(self.required_columns())?;
        Ok(table)
    }
}

/// Process-lifetime memo of loaded artifacts, keyed by path.
#[derive(Default)]
pub struct ArtifactCache {
    tables: HashMap<PathBuf, Rc<Table>>,
}

impl ArtifactCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_load(&mut self, artifact: Artifact, path: &Path) -> Result<Rc<Table>, SchemaError> {
        if let Some(t) = self.tables.get(path) {
            return Ok(Rc::clone(t));
        }
        let table = Rc::new(artifact.load(path)?);
        self.tables.insert(path.to_path_buf(), Rc::clone(&table));
        Ok(table)
    }

    pub fn len(&self) -> usize { self.tables.len() }
    pub fn is_empty(&self) -> bool { self.tables.is_empty() }
}

/// The five inputs of the dashboard.
#[derive(Clone, Debug)]
pub struct Artifacts {
    pub sales: Rc<Table>,
    pub summary: Rc<Table>,
    pub revenue: Rc<Table>,
    pub salesperson: Rc<Table>,
    pub low_margin: Rc<Table>,
}

impl Artifacts {
    /// Load all five from `dir` (file names are fixed).
    pub fn load(dir: &Path, cache: &mut ArtifactCache) -> Result<Self, SchemaError> {
        let mut get = |a: Artifact| cache.get_or_load(a, &dir.join(a.file_name()));
        let artifacts = Self {
            sales: get(Artifact::Sales)?,
            summary: get(Artifact::SkuSummary)?,
            revenue: get(Artifact::SkuRevenue)?,
            salesperson: get(Artifact::Salesperson)?,
            low_margin: get(Artifact::LowMargin)?,
        };
        info!(dir = %dir.display(), sales_rows = artifacts.sales.len(), "artifacts ready");
        Ok(artifacts)
    }
}
