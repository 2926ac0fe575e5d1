// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ReportBook, Table, table_label};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export JSON pretty-printed: `{ sheet: table }` or `{ sheet: [detail, summary] }`.
pub(crate) fn export_json(book: &ReportBook, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(book)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: one file per table, `<stem>_<table>.csv` next to `path`.
pub(crate) fn export_csv(book: &ReportBook, path: &Path) -> AppResult<Vec<PathBuf>> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut written = Vec::new();

    for (name, sheet) in book.iter() {
        for (i, table) in sheet.tables().into_iter().enumerate() {
            let target = csv_path_for(path, &table_label(name, i));
            write_csv_table(table, &target)?;
            notify_export_success("CSV", &target);
            written.push(target);
        }
    }

    Ok(written)
}

pub(crate) fn csv_path_for(path: &Path, label: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "report".to_string());

    path.with_file_name(format!("{stem}_{label}.csv"))
}

fn write_csv_table(table: &Table, target: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(target)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(&table.columns)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &table.rows {
        wtr.write_record(row.iter().map(|c| c.display()))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
