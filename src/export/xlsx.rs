// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{EXCEL_DATETIME_FORMAT, parse_to_excel_date};
use crate::export::model::{Cell, ReportBook, SHEET_STATUS, SHEET_TIMES, Table, table_label};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Chart, ChartType, Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Excel refuses longer sheet names.
const MAX_SHEET_NAME: usize = 31;
const MAX_COLUMN_WIDTH: usize = 50;

/// One worksheet per table; the second table of a pair goes to `<name>_2`.
pub(crate) fn export_xlsx(book: &ReportBook, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    for (name, sheet) in book.iter() {
        for (i, table) in sheet.tables().into_iter().enumerate() {
            let sheet_name = worksheet_name(name, i);
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet_name).map_err(to_app_error)?;

            write_table(worksheet, table)?;

            if table.is_empty() {
                continue;
            }
            if name == SHEET_TIMES && i == 0 {
                insert_times_chart(worksheet, &sheet_name, table)?;
            } else if name == SHEET_STATUS && i == 1 {
                insert_status_chart(worksheet, &sheet_name, table)?;
            }
        }
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn worksheet_name(name: &str, index: usize) -> String {
    table_label(name, index).chars().take(MAX_SHEET_NAME).collect()
}

fn write_table(worksheet: &mut Worksheet, table: &Table) -> AppResult<()> {
    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x4472C4))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xD1D3D4));

    for (col, header) in table.columns.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = table
        .columns
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    if table.is_empty() {
        worksheet
            .write(1, 0, "No data available")
            .map_err(to_app_error)?;
    }

    // ---------------------------
    // Rows (banded)
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in table.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            let as_date = table.is_date_column(col);
            write_cell(worksheet, row, col as u16, cell, as_date, band)?;

            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(cell.display().as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        let width = (*w + 2).min(MAX_COLUMN_WIDTH);
        worksheet
            .set_column_width(c as u16, width as f64)
            .map_err(to_app_error)?;
    }

    Ok(())
}

/// In date columns, parsable dates become Excel serials. Numbers stay
/// numbers, `Empty` stays blank.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    as_date: bool,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xD1D3D4));

    let written = match cell {
        Cell::Text(s) => match as_date.then(|| parse_to_excel_date(s)).flatten() {
            Some(serial) => {
                let fmt = base.set_num_format(EXCEL_DATETIME_FORMAT);
                worksheet.write_with_format(row, col, serial, &fmt)
            }
            None => worksheet.write_with_format(row, col, s.as_str(), &base),
        },
        Cell::Number(n) => {
            let fmt = base.set_num_format("0.00").set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)
        }
        Cell::Integer(i) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *i as f64, &fmt)
        }
        Cell::Empty => worksheet.write_blank(row, col, &base),
    };

    written.map_err(to_app_error)?;
    Ok(())
}

/// Bar chart of the mean column, next to the table.
fn insert_times_chart(worksheet: &mut Worksheet, sheet: &str, table: &Table) -> AppResult<()> {
    let Some(mean_col) = table.column("Mean Days") else {
        return Ok(());
    };
    let last_row = table.rows.len() as u32;

    let mut chart = Chart::new(ChartType::Bar);
    chart.title().set_name("Average days per stage");
    chart
        .add_series()
        .set_categories((sheet, 1, 0, last_row, 0))
        .set_values((sheet, 1, mean_col as u16, last_row, mean_col as u16));
    chart.legend().set_hidden();

    worksheet.insert_chart(1, 6, &chart).map_err(to_app_error)?;
    Ok(())
}

/// Pie chart of cards per stage.
fn insert_status_chart(worksheet: &mut Worksheet, sheet: &str, table: &Table) -> AppResult<()> {
    let Some(count_col) = table.column("Count") else {
        return Ok(());
    };
    let last_row = table.rows.len() as u32;

    let mut chart = Chart::new(ChartType::Pie);
    chart.title().set_name("Cards per stage");
    chart
        .add_series()
        .set_categories((sheet, 1, 0, last_row, 0))
        .set_values((sheet, 1, count_col as u16, last_row, count_col as u16));

    worksheet.insert_chart(1, 4, &chart).map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
