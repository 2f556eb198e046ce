// tests/extract_documents.rs
use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use sales_dash::config::options::{ExportFormat, ExportOptions};
use sales_dash::error::ParseError;
use sales_dash::extract::{extract_document, extract_documents, SalesLineRecord};
use sales_dash::file;
use sales_dash::progress::Progress;

fn tr(lead_blanks: usize, cells: &[&str]) -> String {
    let mut out = String::from("<tr>");
    for _ in 0..lead_blanks {
        out.push_str("<td>&nbsp;</td>");
    }
    for c in cells {
        out.push_str(&format!("<td class=\"c\">{c}</td>"));
    }
    out.push_str("</tr>\n");
    out
}

fn header(receipt: &str, sku: &str, price: &str) -> String {
    tr(7, &[receipt, sku, price])
}

fn detail(qty: &str, amount: &str, seller: &str) -> String {
    tr(10, &[qty, amount, seller])
}

fn report(rows: &[String]) -> String {
    format!(
        "<html><body><TABLE border=1>\n{}</TABLE></body></html>",
        rows.concat()
    )
}

fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let p = dir.path().join(name);
    fs::write(&p, body).unwrap();
    p
}

fn rec(date: &str, time: &str, receipt: &str, sku: &str, price: &str, qty: u32, amount: i64, seller: &str) -> SalesLineRecord {
    SalesLineRecord {
        date: Some(date.into()),
        time: Some(time.into()),
        receipt: Some(receipt.into()),
        stock_name: Some(sku.into()),
        unit_price: Some(price.into()),
        qty,
        amount,
        sales_person: seller.into(),
    }
}

#[test]
fn one_report_with_carry_over_date_and_time() {
    let dir = TempDir::new().unwrap();
    let body = report(&[
        tr(0, &["Sales Report 09.04.2025"]),
        tr(1, &["10:15 AM"]),
        header("R1", "Rice, 50kg", "1,500"),
        detail("2", "3,000", "Ada"),
        header("R1", "Oil &amp; Salt", "900"),
        detail("1", "900", "Ada"),
        tr(1, &["11:40 AM"]),
        header("R2", "Sugar", "700"),
        detail("3", "2,100", "Bola"),
    ]);
    let p = write(&dir, "09.04.25.htm", &body);

    let got = extract_document(&p).unwrap();
    assert_eq!(
        got,
        vec![
            rec("Sales Report 09.04.2025", "10:15 AM", "R1", "Rice, 50kg", "1,500", 2, 3000, "Ada"),
            rec("Sales Report 09.04.2025", "10:15 AM", "R1", "Oil & Salt", "900", 1, 900, "Ada"),
            rec("Sales Report 09.04.2025", "11:40 AM", "R2", "Sugar", "700", 3, 2100, "Bola"),
        ]
    );
}

#[test]
fn reports_are_read_in_the_given_order() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "b.htm", &report(&[tr(0, &["10.04.2025"]), header("R9", "Beans", "50"), detail("4", "200", "Chi")]));
    let b = write(&dir, "a.htm", &report(&[tr(0, &["09.04.2025"]), header("R1", "Rice", "10"), detail("1", "10", "Ada")]));

    let got = extract_documents(&[a, b], None).unwrap();
    let receipts: Vec<_> = got.iter().map(|r| r.receipt.clone().unwrap()).collect();
    assert_eq!(receipts, vec!["R9", "R1"]);
    assert_eq!(got[1].date.as_deref(), Some("09.04.2025"));
}

#[test]
fn carry_over_state_starts_fresh_per_report() {
    let dir = TempDir::new().unwrap();
    let first = write(
        &dir,
        "first.htm",
        &report(&[tr(0, &["09.04.2025"]), tr(1, &["10:15 AM"]), header("R1", "Rice", "10"), detail("1", "10", "Ada")]),
    );
    let second = write(&dir, "second.htm", &report(&[detail("2", "20", "Bola")]));

    let got = extract_documents(&[first, second], None).unwrap();
    assert_eq!(got.len(), 2);
    assert_eq!(got[0].stock_name.as_deref(), Some("Rice"));
    assert_eq!(
        got[1],
        SalesLineRecord {
            qty: 2,
            amount: 20,
            sales_person: "Bola".into(),
            ..Default::default()
        }
    );
}

#[test]
fn utf16_report_with_bom_is_read() {
    let dir = TempDir::new().unwrap();
    let body = report(&[tr(0, &["09.04.2025"]), header("R1", "Crème", "10"), detail("1", "10", "Ada")]);
    let mut bytes = vec![0xFF, 0xFE];
    for unit in body.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let p = dir.path().join("utf16.htm");
    fs::write(&p, bytes).unwrap();

    let got = extract_document(&p).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].date.as_deref(), Some("09.04.2025"));
    assert_eq!(got[0].stock_name.as_deref(), Some("Crème"));
}

#[test]
fn latin1_report_is_a_decode_error() {
    let dir = TempDir::new().unwrap();
    let body = report(&[header("R1", "CAFE", "10"), detail("1", "10", "Ada")]);
    let mut bytes = body.replace("CAFE", "Caf").into_bytes();
    // 0xE9 is é in Latin-1 and never valid on its own in UTF-8
    let at = bytes.windows(3).position(|w| w == b"Caf").unwrap() + 3;
    bytes.insert(at, 0xE9);
    let p = dir.path().join("latin1.htm");
    fs::write(&p, bytes).unwrap();

    let err = extract_document(&p).unwrap_err();
    assert!(matches!(err, ParseError::Decode { ref path, encoding: "UTF-8" } if *path == p));
    assert!(err.to_string().contains("latin1.htm"));
}

#[test]
fn same_line_in_two_reports_is_kept_twice() {
    let dir = TempDir::new().unwrap();
    let body = report(&[header("R1", "Rice", "10"), detail("1", "10", "Ada")]);
    let a = write(&dir, "a.htm", &body);
    let b = write(&dir, "b.htm", &body);
    assert_eq!(extract_documents(&[a, b], None).unwrap().len(), 2);
}

#[test]
fn missing_report_names_the_path_and_stops_the_run() {
    let dir = TempDir::new().unwrap();
    let ok = write(&dir, "ok.htm", &report(&[header("R1", "Rice", "10"), detail("1", "10", "Ada")]));
    let missing = dir.path().join("nope.htm");

    let err = extract_documents(&[ok, missing.clone()], None).unwrap_err();
    assert!(matches!(err, ParseError::Read { ref path, .. } if *path == missing));
    assert!(err.to_string().contains("nope.htm"));
}

#[test]
fn bad_amount_is_a_numeric_error() {
    let dir = TempDir::new().unwrap();
    let p = write(&dir, "bad.htm", &report(&[header("R1", "Rice", "10"), detail("1", "ten", "Ada")]));
    let err = extract_document(&p).unwrap_err();
    assert!(matches!(err, ParseError::Numeric { column: 11, ref value, .. } if value == "ten"));
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<(PathBuf, usize)>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, path: &Path, records: usize) {
        self.done.push((path.to_path_buf(), records));
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn progress_sees_every_report() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.htm", &report(&[header("R1", "Rice", "10"), detail("1", "10", "Ada"), detail("2", "20", "Ada")]));
    let b = write(&dir, "b.htm", &report(&[]));

    let mut rec = Recorder::default();
    extract_documents(&[a.clone(), b.clone()], Some(&mut rec)).unwrap();
    assert_eq!(rec.total, 2);
    assert_eq!(rec.done, vec![(a, 2), (b, 0)]);
    assert!(rec.finished);
}

#[test]
fn export_then_read_back() {
    let dir = TempDir::new().unwrap();
    let p = write(
        &dir,
        "day.htm",
        &report(&[tr(0, &["09.04.2025"]), tr(1, &["3:05 PM"]), header("R7", "Rice, 50kg", "1,500"), detail("2", "3,000", "Ada")]),
    );
    let records = extract_document(&p).unwrap();

    let mut opts = ExportOptions::default();
    opts.format = ExportFormat::Tsv;
    opts.set_path(dir.path().join("nested").join("sales").to_str().unwrap());
    let out = file::write_records(&records, &opts).unwrap();
    assert_eq!(out, dir.path().join("nested").join("sales.tsv"));

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(
        text,
        "Date\tTime\tReceipt\tStockName\tUnitPrice\tQty\tAmount\tSalesPerson\n\
         09.04.2025\t3:05 PM\tR7\tRice, 50kg\t1,500\t2\t3000\tAda\n"
    );

    let back = file::read_records(&out, ExportFormat::Tsv, true).unwrap();
    assert_eq!(back, records);
}
