use crate::core::runner::ReportKind;
use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for boardreport
/// CLI application to rebuild Trello card stage history and export reports
#[derive(Parser)]
#[command(
    name = "boardreport",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rebuild Trello card stage history and export time-in-stage, movement, status and velocity reports",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Manage the configuration file (view, edit or set credentials)
    Config {
        #[arg(long = "print", help = "Print the current configuration (secrets masked)")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        /// Store the given credentials in the configuration file
        #[arg(long = "set")]
        set: bool,

        #[arg(long = "api-key", requires = "set")]
        api_key: Option<String>,

        #[arg(long = "token", requires = "set")]
        token: Option<String>,

        #[arg(long = "board-id", requires = "set")]
        board_id: Option<String>,
    },

    /// Test the connection to the configured board
    Check,

    /// Fetch the whole board (lists, cards, card actions) into a JSON file
    Snapshot {
        /// Output file
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate a report
    Report {
        /// Which report to generate
        #[arg(long, value_enum, default_value = "full")]
        kind: ReportKind,

        /// Output format (default: `default_format` from the configuration)
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file (default: Report_<Kind>_<YYYYMMDD>.<ext> in the current directory)
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Restrict detailed and movement reports to stage entries in a period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2025")
        /// - YYYY-MM              → entire month (e.g. "2025-06")
        /// - YYYY-MM-DD           → specific day  (e.g. "2025-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        ///
        /// Special value:
        /// - all                   → whole history
        #[arg(long, value_name = "RANGE", conflicts_with_all = ["last_days", "from", "to"])]
        range: Option<String>,

        /// Only stage entries from the last N days
        #[arg(long, value_name = "DAYS", conflicts_with_all = ["from", "to"])]
        last_days: Option<u32>,

        /// First day (YYYY-MM-DD) of a custom period
        #[arg(long, value_name = "DATE")]
        from: Option<String>,

        /// Last day (YYYY-MM-DD) of a custom period, inclusive
        #[arg(long, value_name = "DATE")]
        to: Option<String>,

        /// Read the board from a snapshot file instead of the API
        #[arg(long, value_name = "FILE")]
        snapshot: Option<PathBuf>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,

        /// Print the generated tables to the terminal as well
        #[arg(long)]
        preview: bool,
    },
}
