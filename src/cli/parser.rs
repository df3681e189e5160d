use crate::output::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for rinactive
/// CLI application to find users inactive for too many business days
#[derive(Parser)]
#[command(
    name = "rinactive",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find roster users inactive for 45 or more business days, holidays excluded",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv); logs go to stderr
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter a roster CSV and report inactive users
    Filter {
        /// Holiday file (JSON array of {"month": M, "day": D})
        #[arg(long, value_name = "FILE")]
        holidays: String,

        /// Roster CSV file (first row is a header)
        #[arg(long, value_name = "FILE")]
        csv: String,

        /// Reference date (YYYY-MM-DD); defaults to the local date
        #[arg(long, value_name = "DATE")]
        today: Option<String>,

        /// Minimum business days of inactivity to report
        #[arg(long)]
        threshold: Option<i64>,

        /// Organizational unit path exempt from inactivity tracking
        #[arg(long = "exclude-ou", value_name = "PATH")]
        exclude_ou: Option<String>,

        /// Year the holiday entries are anchored to
        #[arg(long = "holiday-year", value_name = "YYYY")]
        holiday_year: Option<i32>,

        /// Match holidays by month and day in any year
        #[arg(long = "recurring-holidays")]
        recurring_holidays: bool,

        /// Report malformed rows in `skipped` instead of failing the run
        #[arg(long = "skip-bad-rows")]
        skip_bad_rows: bool,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Check mode: do not read the inputs, report no change
        #[arg(long)]
        check: bool,
    },

    /// Count business days between two dates (both included)
    Count {
        /// Start date (YYYY-MM-DD)
        start: String,

        /// End date (YYYY-MM-DD)
        end: String,

        /// Optional holiday file
        #[arg(long, value_name = "FILE")]
        holidays: Option<String>,

        /// Year the holiday entries are anchored to
        #[arg(long = "holiday-year", value_name = "YYYY")]
        holiday_year: Option<i32>,

        /// Match holidays by month and day in any year
        #[arg(long = "recurring-holidays")]
        recurring_holidays: bool,
    },

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write a default configuration file
        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        /// Overwrite an existing file with --init
        #[arg(long, short = 'f', requires = "init")]
        force: bool,
    },
}
