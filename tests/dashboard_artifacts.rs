// tests/dashboard_artifacts.rs
use std::fs;
use std::path::Path;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use sales_dash::config::consts::*;
use sales_dash::error::SchemaError;
use sales_dash::report::{render_text, ArtifactCache, Artifacts, Chart, DashboardModel, Panel};

const SALES: &str = "\
Receipt,NormalizedSKU,UnitPrice,Qty,Amount
R1,RICE,1500,2,3000
R1,OIL,900,1,900
R2,RICE,1600,1,1600
R3,SUGAR,700,3,2100
";

const SUMMARY: &str = "\
NormalizedSKU,TotalUnitsSold,AvgProfitPerUnit
RICE,3,400
SUGAR,3,120
OIL,1,90
";

const REVENUE: &str = "\
NormalizedSKU,Amount
RICE,4600
SUGAR,2100
OIL,900
";

const SALESPERSON: &str = "\
Unnamed: 0,SalesPerson,TotalRevenue
0,Ada,\"5,500\"
1,Bola,2100
";

fn artifact_dir(low_margin: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let put = |name: &str, body: &str| fs::write(dir.path().join(name), body).unwrap();
    put(SALES_FILE, SALES);
    put(SUMMARY_FILE, SUMMARY);
    put(REVENUE_FILE, REVENUE);
    put(SALESPERSON_FILE, SALESPERSON);
    put(LOW_MARGIN_FILE, low_margin);
    dir
}

fn load(dir: &Path) -> Result<DashboardModel, SchemaError> {
    let mut cache = ArtifactCache::new();
    let a = Artifacts::load(dir, &mut cache)?;
    DashboardModel::build(&a)
}

fn bar_labels(panel: &Panel) -> Vec<String> {
    match panel {
        Panel::Chart { chart: Chart::Bars { bars, .. }, .. } => bars.iter().map(|b| b.label.clone()).collect(),
        other => panic!("not a bar chart: {other:?}"),
    }
}

#[test]
fn full_dashboard_from_artifacts() {
    let dir = artifact_dir("NormalizedSKU,AvgProfitPerUnit\nOIL,90\nSUGAR,120\nSALT,10\n");
    let m = load(dir.path()).unwrap();

    let tiles: Vec<(&str, &str)> = m.tiles.iter().map(|t| (t.label.as_str(), t.value.as_str())).collect();
    assert_eq!(
        tiles,
        vec![
            ("Total Sales (₦)", "7,600"),
            ("Total Units Sold", "7"),
            ("Avg. Cart Value", "2,533"),
            ("Best Seller", "RICE"),
        ]
    );

    assert_eq!(m.panels.len(), 6);
    assert_eq!(bar_labels(&m.panels[0]), vec!["RICE", "SUGAR", "OIL"]);
    assert_eq!(bar_labels(&m.panels[3]), vec!["RICE", "SUGAR", "OIL"]);
    assert_eq!(bar_labels(&m.panels[4]), vec!["OIL", "SUGAR"]);
    assert_eq!(bar_labels(&m.panels[5]), vec!["Ada", "Bola"]);

    match &m.panels[2] {
        Panel::Chart { chart: Chart::Boxes(boxes), .. } => {
            let order: Vec<&str> = boxes.iter().map(|b| b.label.as_str()).collect();
            assert_eq!(order, vec!["RICE", "OIL", "SUGAR"]);
            assert_eq!(boxes[0].median, 1550.0);
        }
        other => panic!("expected box plot, got {other:?}"),
    }
}

#[test]
fn low_margin_without_sku_column_uses_row_positions() {
    // Positions 0..2 never match a real SKU, so the overlap is empty.
    let dir = artifact_dir("AvgProfitPerUnit\n90\n120\n");
    let m = load(dir.path()).unwrap();
    match &m.panels[4] {
        Panel::Notice { heading, message } => {
            assert_eq!(heading, "⚠️ Top-Selling but Low-Margin SKUs (<₦250 Profit)");
            assert_eq!(message, "No overlap found or AvgProfitPerUnit missing from low-margin + top-selling SKUs.");
        }
        other => panic!("expected notice, got {other:?}"),
    }
    assert!(render_text(&m).contains("No overlap found"));
}

#[test]
fn missing_required_column_fails_the_load() {
    let dir = artifact_dir("NormalizedSKU,AvgProfitPerUnit\nOIL,90\n");
    fs::write(dir.path().join(SUMMARY_FILE), "NormalizedSKU,TotalUnitsSold\nRICE,3\n").unwrap();

    let err = load(dir.path()).unwrap_err();
    assert!(
        matches!(err, SchemaError::MissingColumn { ref column, .. } if column == "AvgProfitPerUnit"),
        "{err}"
    );
}

#[test]
fn missing_artifact_file_fails_the_load() {
    let dir = artifact_dir("NormalizedSKU,AvgProfitPerUnit\nOIL,90\n");
    fs::remove_file(dir.path().join(REVENUE_FILE)).unwrap();
    assert!(matches!(load(dir.path()).unwrap_err(), SchemaError::Load { .. }));
}

#[test]
fn cache_returns_the_same_tables() {
    let dir = artifact_dir("NormalizedSKU,AvgProfitPerUnit\nOIL,90\n");
    let mut cache = ArtifactCache::new();
    let first = Artifacts::load(dir.path(), &mut cache).unwrap();

    // Later edits on disk are not seen within the same cache.
    fs::write(dir.path().join(SALES_FILE), "Receipt,NormalizedSKU,UnitPrice,Qty,Amount\n").unwrap();
    let second = Artifacts::load(dir.path(), &mut cache).unwrap();

    assert!(Rc::ptr_eq(&first.sales, &second.sales));
    assert_eq!(second.sales.len(), 4);
    assert_eq!(cache.len(), 5);
}
