// src/export/model.rs

use crate::core::reports::{
    CurrentStatusReport, DetailedReport, MovementReport, TimeAnalysisReport, VelocityReport,
};
use serde::Serialize;
use serde::ser::Serializer;

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Integer(i64),
    Empty,
}

impl Cell {
    pub fn opt_text(v: Option<&str>) -> Self {
        v.map_or(Cell::Empty, |s| Cell::Text(s.to_string()))
    }

    pub fn opt_number(v: Option<f64>) -> Self {
        v.map_or(Cell::Empty, Cell::Number)
    }

    pub fn count(n: usize) -> Self {
        Cell::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }

    /// Plain-text rendering (CSV, terminal preview).
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format!("{n}"),
            Cell::Integer(i) => i.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Number(n) => serializer.serialize_f64(*n),
            Cell::Integer(i) => serializer.serialize_i64(*i),
            Cell::Empty => serializer.serialize_none(),
        }
    }
}

/// Ordered columns, ordered rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    /// Indices of columns holding display dates (written as dates in XLSX).
    #[serde(skip)]
    date_columns: Vec<usize>,
}

impl Table {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
            date_columns: Vec::new(),
        }
    }

    /// Mark the named columns as dates; unknown names are ignored.
    pub fn with_date_columns(mut self, names: &[&str]) -> Self {
        self.date_columns = names.iter().filter_map(|n| self.column(n)).collect();
        self
    }

    pub fn is_date_column(&self, index: usize) -> bool {
        self.date_columns.contains(&index)
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// A report contributes either one table or a (detail, summary) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportSheet {
    Single(Table),
    Pair(Table, Table),
}

impl ReportSheet {
    pub fn tables(&self) -> Vec<&Table> {
        match self {
            ReportSheet::Single(t) => vec![t],
            ReportSheet::Pair(a, b) => vec![a, b],
        }
    }
}

/// `name` for the first table of a sheet, `name_2` for the second.
pub fn table_label(name: &str, index: usize) -> String {
    if index == 0 {
        name.to_string()
    } else {
        format!("{name}_{}", index + 1)
    }
}

/// Named, ordered collection of report sheets handed to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportBook {
    sheets: Vec<(String, ReportSheet)>,
}

impl ReportBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, sheet: ReportSheet) {
        self.sheets.push((name.to_string(), sheet));
    }

    pub fn add_report<R: ToSheet>(&mut self, report: &R) {
        self.add(R::SHEET_NAME, report.to_sheet());
    }

    pub fn append(&mut self, other: ReportBook) {
        self.sheets.extend(other.sheets);
    }

    pub fn get(&self, name: &str) -> Option<&ReportSheet> {
        self.sheets.iter().find(|(n, _)| n == name).map(|(_, s)| s)
    }

    pub fn names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ReportSheet)> {
        self.sheets.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Serialize for ReportBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.sheets.len()))?;
        for (name, sheet) in &self.sheets {
            map.serialize_entry(name, sheet)?;
        }
        map.end()
    }
}

pub const SHEET_DETAILED: &str = "Detailed";
pub const SHEET_TIMES: &str = "Times";
pub const SHEET_MOVEMENTS: &str = "Movements";
pub const SHEET_STATUS: &str = "Status";
pub const SHEET_VELOCITY: &str = "Velocity";

/// Generator output → named sheet.
pub trait ToSheet {
    const SHEET_NAME: &'static str;
    fn to_sheet(&self) -> ReportSheet;
}

impl ToSheet for DetailedReport {
    const SHEET_NAME: &'static str = SHEET_DETAILED;

    fn to_sheet(&self) -> ReportSheet {
        let mut t = Table::new(&["Client", "Stage", "Entry Date", "Exit Date", "Days In Stage"])
            .with_date_columns(&["Entry Date", "Exit Date"]);
        for r in &self.rows {
            t.push(vec![
                Cell::Text(r.client.clone()),
                Cell::Text(r.stage.clone()),
                Cell::opt_text(r.entry_date.as_deref()),
                Cell::opt_text(r.exit_date.as_deref()),
                Cell::opt_number(r.days_in_stage),
            ]);
        }
        ReportSheet::Single(t)
    }
}

impl ToSheet for TimeAnalysisReport {
    const SHEET_NAME: &'static str = SHEET_TIMES;

    fn to_sheet(&self) -> ReportSheet {
        let mut t = Table::new(&["Stage", "Mean Days", "Min Days", "Max Days", "Count"]);
        for s in &self.stages {
            t.push(vec![
                Cell::Text(s.stage.clone()),
                Cell::Number(s.mean),
                Cell::Number(s.min),
                Cell::Number(s.max),
                Cell::count(s.count),
            ]);
        }
        ReportSheet::Single(t)
    }
}

impl ToSheet for MovementReport {
    const SHEET_NAME: &'static str = SHEET_MOVEMENTS;

    fn to_sheet(&self) -> ReportSheet {
        let mut t = Table::new(&["From", "To", "Count"]);
        for m in &self.movements {
            t.push(vec![
                Cell::Text(m.from.clone()),
                Cell::Text(m.to.clone()),
                Cell::count(m.count),
            ]);
        }
        ReportSheet::Single(t)
    }
}

impl ToSheet for CurrentStatusReport {
    const SHEET_NAME: &'static str = SHEET_STATUS;

    fn to_sheet(&self) -> ReportSheet {
        let mut detail = Table::new(&["Client", "Current Stage", "Last Activity"])
            .with_date_columns(&["Last Activity"]);
        for r in &self.cards {
            detail.push(vec![
                Cell::Text(r.client.clone()),
                Cell::Text(r.current_stage.clone()),
                Cell::opt_text(r.last_activity.as_deref()),
            ]);
        }

        let mut summary = Table::new(&["Current Stage", "Count"]);
        for s in &self.summary {
            summary.push(vec![Cell::Text(s.stage.clone()), Cell::count(s.count)]);
        }

        ReportSheet::Pair(detail, summary)
    }
}

impl ToSheet for VelocityReport {
    const SHEET_NAME: &'static str = SHEET_VELOCITY;

    fn to_sheet(&self) -> ReportSheet {
        let mut t = Table::new(&["Client", "Total Days", "Completed Stages"]);
        for r in &self.rows {
            t.push(vec![
                Cell::Text(r.client.clone()),
                Cell::Number(r.total_days),
                Cell::count(r.completed_stages),
            ]);
        }
        ReportSheet::Single(t)
    }
}
