mod common;

use boardreport::core::reports::ReportContext;
use boardreport::core::{DateRange, ReportKind, run_report};
use boardreport::export::{
    Cell, ExportFormat, ExportLogic, ReportBook, ReportSheet, Table, ensure_writable,
};
use chrono::NaiveDate;
use common::{board_snapshot, lookup, now};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn full_book() -> ReportBook {
    let snapshot = board_snapshot();
    run_report(
        ReportKind::Full,
        &snapshot.cards,
        &lookup(),
        &snapshot,
        &DateRange::unbounded(),
        &mut ReportContext::at(now()),
    )
    .expect("report")
}

#[test]
fn test_default_file_name() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
    assert_eq!(
        ExportLogic::default_file_name(ReportKind::Full, ExportFormat::Xlsx, day),
        "Report_Full_20240311.xlsx"
    );
    assert_eq!(
        ExportLogic::default_file_name(ReportKind::Movements, ExportFormat::Csv, day),
        "Report_Movements_20240311.csv"
    );
}

#[test]
fn test_tables_have_expected_columns() {
    let book = full_book();
    let detailed = &book.get("Detailed").unwrap().tables()[0].columns;
    assert_eq!(
        detailed,
        &["Client", "Stage", "Entry Date", "Exit Date", "Days In Stage"]
    );

    let status = book.get("Status").unwrap().tables();
    assert_eq!(status[0].columns, ["Client", "Current Stage", "Last Activity"]);
    assert_eq!(status[1].columns, ["Current Stage", "Count"]);

    let velocity = &book.get("Velocity").unwrap().tables()[0];
    assert_eq!(velocity.rows.len(), 1);
    assert_eq!(velocity.rows[0][1], Cell::Number(10.0));
    assert_eq!(velocity.rows[0][2], Cell::Integer(2));
}

#[test]
fn test_json_export_uses_nulls_for_open_intervals() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");

    let written = ExportLogic::save(&full_book(), ExportFormat::Json, &path, false).unwrap();
    assert_eq!(written, [path.clone()]);

    let v: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let rows = v["Detailed"]["rows"].as_array().unwrap();

    // Acme's last stage is still open
    assert_eq!(rows[2][0], "Acme");
    assert_eq!(rows[2][3], Value::Null);
    assert_eq!(rows[2][4], Value::Null);
    assert_eq!(rows[0][4], 2.0);

    let status = v["Status"].as_array().unwrap();
    assert_eq!(status.len(), 2);
    assert_eq!(status[1]["columns"][0], "Current Stage");
}

#[test]
fn test_csv_export_writes_one_file_per_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let written = ExportLogic::save(&full_book(), ExportFormat::Csv, &path, false).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(
        names,
        [
            "report_Detailed.csv",
            "report_Times.csv",
            "report_Movements.csv",
            "report_Status.csv",
            "report_Status_2.csv",
            "report_Velocity.csv",
        ]
    );

    let movements = fs::read_to_string(dir.path().join("report_Movements.csv")).unwrap();
    let lines: Vec<&str> = movements.lines().collect();
    assert_eq!(lines, ["From,To,Count", "A,B,1", "B,C,1"]);

    let detailed = fs::read_to_string(dir.path().join("report_Detailed.csv")).unwrap();
    assert!(detailed.starts_with("Client,Stage,Entry Date,Exit Date,Days In Stage"));
}

#[test]
fn test_xlsx_export_writes_workbook() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.xlsx");

    ExportLogic::save(&full_book(), ExportFormat::Xlsx, &path, false).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_only_date_columns_are_marked_as_dates() {
    let book = full_book();

    let detailed = book.get("Detailed").unwrap().tables()[0];
    let marked: Vec<usize> = (0..detailed.columns.len())
        .filter(|&c| detailed.is_date_column(c))
        .collect();
    assert_eq!(marked, [2, 3]);

    let status = book.get("Status").unwrap().tables();
    assert!(!status[0].is_date_column(0));
    assert!(!status[0].is_date_column(1));
    assert!(status[0].is_date_column(2));
    assert!((0..2).all(|c| !status[1].is_date_column(c)));

    for name in ["Times", "Movements", "Velocity"] {
        let t = book.get(name).unwrap().tables()[0];
        assert!((0..t.columns.len()).all(|c| !t.is_date_column(c)), "{name}");
    }
}

#[test]
fn test_date_shaped_client_name_is_not_a_date_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("names.xlsx");

    let mut table = Table::new(&["Client", "Current Stage", "Last Activity"])
        .with_date_columns(&["Last Activity", "No Such Column"]);
    table.push(vec![
        Cell::Text("2024-03-01 10:00:00".into()),
        Cell::Text("2024-03-02 11:00:00".into()),
        Cell::Text("2024-03-03 12:00:00".into()),
    ]);
    assert!(!table.is_date_column(0));
    assert!(!table.is_date_column(1));
    assert!(table.is_date_column(2));
    assert!(!table.is_date_column(3));

    let mut book = ReportBook::new();
    book.add("Status", ReportSheet::Single(table));
    ExportLogic::save(&book, ExportFormat::Xlsx, &path, false).unwrap();
    assert_eq!(&fs::read(&path).unwrap()[..2], b"PK");

    // the flag never leaks into JSON
    let json = dir.path().join("names.json");
    ExportLogic::save(&book, ExportFormat::Json, &json, false).unwrap();
    let v: Value = serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert_eq!(v["Status"]["rows"][0][0], "2024-03-01 10:00:00");
    assert!(v["Status"].get("date_columns").is_none());
}

#[test]
fn test_xlsx_export_of_empty_board() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");

    let book = run_report(
        ReportKind::Full,
        &[],
        &lookup(),
        &board_snapshot(),
        &DateRange::unbounded(),
        &mut ReportContext::at(now()),
    )
    .unwrap();

    assert!(book.iter().all(|(_, s)| s.tables().iter().all(|t| t.is_empty())));
    ExportLogic::save(&book, ExportFormat::Xlsx, &path, false).unwrap();
    assert!(path.exists());
}

#[test]
fn test_ensure_writable_checks_parent_dir() {
    let dir = tempdir().unwrap();

    assert!(ensure_writable(&dir.path().join("missing").join("out.xlsx"), true).is_err());
    assert!(ensure_writable(&dir.path().join("out.xlsx"), false).is_ok());

    let existing = dir.path().join("existing.json");
    fs::write(&existing, "{}").unwrap();
    assert!(ensure_writable(&existing, true).is_ok());
}
