use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for TimeVault
#[derive(Parser)]
#[command(
    name = "timevault",
    version = env!("CARGO_PKG_VERSION"),
    about = "Personal time tracking: clock in/out, weekly overtime and payroll estimates",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Clock in (start a work session)
    In,

    /// Clock out (close the session and record a time entry)
    Out,

    /// Undo the last clock-out while the undo window is open
    Undo,

    /// Show the dashboard
    Status,

    /// List closed time entries
    Timecard {
        #[arg(
            long,
            short,
            default_value = "week",
            help = "today, week (last 7 days), month or all"
        )]
        filter: String,
    },

    /// Regular/overtime summary for a pay period
    Payroll {
        #[arg(
            long,
            short,
            default_value = "current-month",
            help = "current-week, last-week, current-month, last-month, ytd, all or YYYY-MM-DD:YYYY-MM-DD"
        )]
        period: String,
    },

    /// Totals, 30-day averages and the last 12 months
    Report,

    /// Delete a time entry by id
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Reorder time entries (every id exactly once)
    Reorder {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },

    /// Show or change pay settings
    Settings {
        #[arg(long, help = "Hourly rate")]
        rate: Option<String>,

        #[arg(long, help = "Overtime multiplier")]
        multiplier: Option<String>,

        #[arg(long, help = "Weekly hours after which overtime starts")]
        threshold: Option<String>,

        #[arg(long, help = "Weekly hours goal")]
        target: Option<String>,

        #[arg(long, help = "Currency symbol")]
        currency: Option<String>,

        #[arg(long = "time-format", help = "Clock display: 12 or 24")]
        time_format: Option<String>,
    },

    /// Export data
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "PERIOD",
            help = "Payroll period for csv/xlsx/pdf (see `payroll --period`)"
        )]
        period: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace all data with a JSON snapshot
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Ask the assistant
    Ask {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        #[arg(long, help = "Skip the Ollama backend and answer locally")]
        offline: bool,
    },

    /// Show smart suggestions
    Suggest,

    /// Store sync credentials and show the sync code
    Sync {
        #[arg(long, conflicts_with = "pin")]
        email: Option<String>,

        #[arg(long)]
        pin: Option<String>,
    },

    /// Delete all entries and reset settings
    Clear {
        #[arg(long, help = "Confirm the reset")]
        yes: bool,
    },
}
