// src/config/consts.rs

// Local log
pub const LOG_FILE: &str = ".store/debug.log";

// Receipt report layout (0-based cell positions inside a <tr>)
pub const COL_RECEIPT: usize = 7;
pub const COL_STOCK_NAME: usize = 8;
pub const COL_UNIT_PRICE: usize = 9;
pub const COL_QTY: usize = 10;
pub const COL_AMOUNT: usize = 11;
pub const COL_SALES_PERSON: usize = 12;

/// A row with at least this many cells and a non-empty stock name opens a line item.
pub const HEADER_MIN_CELLS: usize = COL_STOCK_NAME + 1;
/// A row with at least this many cells and an all-digit qty closes it.
pub const DETAIL_MIN_CELLS: usize = COL_SALES_PERSON + 1;

// Carry-over markers
pub const DATE_MARKER: &str = "2025";
pub const TIME_MARKERS: [&str; 2] = ["AM", "PM"];

/// The daily reports of the April 2025 run; used when no inputs are given.
pub const DEFAULT_REPORTS: [&str; 6] = [
    "09.04.25.htm",
    "10.04.25.htm",
    "11.04.25.htm",
    "12.04.25.htm",
    "14.04.25.htm",
    "15.04.25.htm",
];

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "structured_sales_data";

pub const RECORD_HEADERS: [&str; 8] = [
    "Date", "Time", "Receipt", "StockName", "UnitPrice", "Qty", "Amount", "SalesPerson",
];

// Dashboard artifacts
pub const SALES_FILE: &str = "structured_sales_data.csv";
pub const SUMMARY_FILE: &str = "sku_summary_report.csv";
pub const REVENUE_FILE: &str = "sku_revenue_summary.csv";
pub const SALESPERSON_FILE: &str = "salesperson_performance.csv";
pub const LOW_MARGIN_FILE: &str = "low_margin_skus.csv";

// Artifact columns
pub const C_RECEIPT: &str = "Receipt";
pub const C_SKU: &str = "NormalizedSKU";
pub const C_UNIT_PRICE: &str = "UnitPrice";
pub const C_QTY: &str = "Qty";
pub const C_AMOUNT: &str = "Amount";
pub const C_UNITS_SOLD: &str = "TotalUnitsSold";
pub const C_AVG_PROFIT: &str = "AvgProfitPerUnit";
pub const C_SALES_PERSON: &str = "SalesPerson";
pub const C_TOTAL_REVENUE: &str = "TotalRevenue";

/// Header names a spreadsheet tool leaves on a written-out row index.
pub const INDEX_HEADERS: [&str; 2] = ["", "Unnamed: 0"];

// Top-N cutoffs
pub const TOP_VOLUME: usize = 10;
pub const TOP_REVENUE: usize = 10;
pub const TOP_PRICE_SKUS: usize = 15;
pub const TOP_PROFIT: usize = 10;
pub const TOP_SELLERS_FOR_MARGIN: usize = 10;

// Dashboard text
pub const CURRENCY: &str = "₦";
pub const LOW_MARGIN_LIMIT: u32 = 250;
pub const DASHBOARD_TITLE: &str = "📊 Sales Performance Dashboard";
pub const DASHBOARD_SUBTITLE: &str =
    "Analyze top-performing SKUs, revenue distribution, and profitability insights";
pub const DASHBOARD_CAPTION: &str = "Built with ❤️ using egui | @DTechNurse";
