use super::DataSource;
use crate::board::{BoardSource, CachedActions};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::DateRange;
use crate::core::reports::ReportContext;
use crate::core::runner::{ReportKind, run_report};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportLogic, ReportBook};
use crate::models::StageLookup;
use crate::ui::messages::{header, info, step, success, warning};
use crate::utils::date::today;
use crate::utils::range::{parse_day, parse_range};
use crate::utils::table;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use tracing::{debug, info as trace_info};

const PROGRESS_TICKS: u64 = 1000;
const PREVIEW_ROWS: usize = 20;

/// Handle the `report` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report {
        kind,
        format,
        file,
        range,
        last_days,
        from,
        to,
        snapshot,
        force,
        preview,
    } = cmd
    else {
        return Ok(());
    };

    let kind = *kind;
    let format = format.unwrap_or(cfg.default_format);
    let path = file.clone().unwrap_or_else(|| {
        PathBuf::from(ExportLogic::default_file_name(kind, format, today()))
    });

    let date_range = resolve_range(range.as_deref(), *last_days, from.as_deref(), to.as_deref())?;
    if !date_range.is_unbounded() && !kind.uses_date_range() {
        warning(format!(
            "The {} report ignores date ranges.",
            kind.label().to_lowercase()
        ));
    }

    // ---------------------------
    // Load board data
    // ---------------------------
    let source = DataSource::resolve(cfg, snapshot.as_deref())?;
    info(format!("Loading {}", source.describe()));

    step(1, 2, "Fetching lists…");
    let lists = source.lists()?;
    let lookup = StageLookup::from_lists(&lists);

    step(2, 2, "Fetching cards…");
    let cards = source.cards()?;
    info(format!(
        "Data loaded: {} lists, {} cards.",
        lists.len(),
        cards.len()
    ));

    if cards.is_empty() {
        warning("The board has no cards; the report will be empty.");
    }

    // ---------------------------
    // Generate off the main thread
    // ---------------------------
    let cancel = Arc::new(AtomicBool::new(false));
    install_ctrlc(Arc::clone(&cancel));

    let pb = ProgressBar::new(PROGRESS_TICKS);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {percent:>3}% {msg}")
            .map_err(|e| AppError::Other(e.to_string()))?
            .progress_chars("#>-"),
    );
    pb.set_message(format!("{} report", kind.label()));

    let (tx, rx) = mpsc::channel::<f64>();

    let outcome = thread::scope(|scope| {
        let worker = scope.spawn(|| {
            let cached = CachedActions::new(&source);
            let mut send = move |p: f64| {
                let _ = tx.send(p);
            };
            let mut ctx = ReportContext::at(Utc::now())
                .with_progress(&mut send)
                .with_cancel(&cancel);

            run_report(kind, &cards, &lookup, &cached, &date_range, &mut ctx)
        });

        for p in rx {
            pb.set_position((p * PROGRESS_TICKS as f64).round() as u64);
        }

        worker
            .join()
            .map_err(|_| AppError::Other("report worker panicked".into()))?
    });

    let book = match outcome {
        Ok(book) => {
            pb.finish_and_clear();
            book
        }
        Err(e) => {
            pb.abandon();
            return Err(e);
        }
    };

    trace_info!(sheets = book.len(), report = kind.label(), "report generated");

    // ---------------------------
    // Save
    // ---------------------------
    let written = ExportLogic::save(&book, format, &path, *force)?;
    print_summary(&book);

    if *preview {
        print_preview(&book);
    }

    success(format!(
        "Report saved: {}",
        written
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    ));
    Ok(())
}

/// `--range`, `--last-days` and `--from/--to` are mutually exclusive (clap).
pub(crate) fn resolve_range(
    range: Option<&str>,
    last_days: Option<u32>,
    from: Option<&str>,
    to: Option<&str>,
) -> AppResult<DateRange> {
    if let Some(expr) = range {
        return match parse_range(expr)? {
            Some((first, last)) => DateRange::from_calendar(Some(first), Some(last)),
            None => Ok(DateRange::unbounded()),
        };
    }

    if let Some(days) = last_days {
        return DateRange::last_days(days, Utc::now());
    }

    let first = from.map(parse_day).transpose()?;
    let last = to.map(parse_day).transpose()?;
    DateRange::from_calendar(first, last)
}

fn install_ctrlc(cancel: Arc<AtomicBool>) {
    let result = ctrlc::set_handler(move || {
        eprintln!("\nCancelling after the current card...");
        cancel.store(true, Ordering::SeqCst);
    });

    if let Err(e) = result {
        debug!(error = %e, "Ctrl+C handler not installed");
    }
}

fn print_summary(book: &ReportBook) {
    for (name, sheet) in book.iter() {
        let rows: Vec<String> = sheet
            .tables()
            .iter()
            .map(|t| t.rows.len().to_string())
            .collect();
        info(format!("{name}: {} rows", rows.join(" + ")));
    }
}

fn print_preview(book: &ReportBook) {
    for (name, sheet) in book.iter() {
        for t in sheet.tables() {
            header(name);
            let rows: Vec<Vec<String>> = t
                .rows
                .iter()
                .map(|r| r.iter().map(|c| c.display()).collect())
                .collect();
            println!("{}", table::render(&t.columns, &rows, PREVIEW_ROWS));
        }
    }
}
