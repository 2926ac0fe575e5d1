// src/export/logic.rs

use crate::core::runner::ReportKind;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{csv_path_for, export_csv, export_json};
use crate::export::model::{ReportBook, table_label};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `book` to `path` in `format`; returns the files written.
    ///
    /// CSV produces one file per table next to `path`.
    pub fn save(
        book: &ReportBook,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<Vec<PathBuf>> {
        if book.iter().all(|(_, s)| s.tables().iter().all(|t| t.is_empty())) {
            warning("No rows to report for the selected data; writing empty tables.");
        }

        match format {
            ExportFormat::Xlsx => {
                ensure_writable(path, force)?;
                export_xlsx(book, path)?;
                Ok(vec![path.to_path_buf()])
            }
            ExportFormat::Json => {
                ensure_writable(path, force)?;
                export_json(book, path)?;
                Ok(vec![path.to_path_buf()])
            }
            ExportFormat::Csv => {
                for (name, sheet) in book.iter() {
                    for i in 0..sheet.tables().len() {
                        ensure_writable(&csv_path_for(path, &table_label(name, i)), force)?;
                    }
                }
                export_csv(book, path)
            }
        }
    }

    /// `Report_<Kind>_<YYYYMMDD>.<ext>`
    pub fn default_file_name(kind: ReportKind, format: ExportFormat, day: NaiveDate) -> String {
        format!(
            "Report_{}_{}.{}",
            kind.label(),
            day.format("%Y%m%d"),
            format.extension()
        )
    }
}
