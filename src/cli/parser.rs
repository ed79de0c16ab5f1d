use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rbreakcheck
/// CLI application to reconcile punch-clock and app break records
#[derive(Parser)]
#[command(
    name = "rbreakcheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile punch-clock and app break records and list the corrections to make",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or per-station setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The two input files plus report context overrides.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Punch-clock timecard export (source A: .csv, .xlsx, .xls, .ods)
    pub source_a: String,

    /// App break log (source B: .csv, .xlsx, .xls, .ods)
    pub source_b: String,

    /// Station code (default: detected from file names)
    #[arg(long)]
    pub station: Option<String>,

    /// Report date YYYY-MM-DD (default: detected from file names, else today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
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

    /// Reconcile two break files and print the prioritized action list
    Analyze {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(long = "all", help = "Also print the full table of every employee")]
        all: bool,

        #[arg(long = "no-scripts", help = "Do not print the conversation scripts")]
        no_scripts: bool,
    },

    /// Reconcile two break files and write the report to a file
    Export {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(long, help = "Export only employees that need a correction")]
        action_only: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
