use crate::export::{ExportFormat, RenderFormat};
use clap::{Parser, Subcommand};

/// Command-line interface definition for eldgraph
/// Render ELD duty-status log sheets as timeline charts
#[derive(Parser)]
#[command(
    name = "eldgraph",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render ELD duty-status log sheets of a trip as timeline charts and inspect them",
    long_about = None
)]
pub struct Cli {
    /// Override activity database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory holding `<trip_id>.json` documents
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the activity database
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long = "op", help = "Only rows of one operation (render, export, ...)")]
        op: Option<String>,
    },

    /// List the days of a trip (day selector)
    Days {
        /// Trip log JSON file, or trip id looked up in the data directory
        source: String,
    },

    /// Render the chart of one day (or every day) to a file
    Render {
        /// Trip log JSON file, or trip id looked up in the data directory
        source: String,

        #[arg(long = "day", help = "Day number to render (default: first day)")]
        day: Option<u32>,

        #[arg(long = "format", value_enum, help = "Output format (default from config)")]
        format: Option<RenderFormat>,

        #[arg(long = "file", value_name = "FILE", help = "Output file")]
        file: String,

        #[arg(
            long = "pointer",
            value_name = "X,Y",
            help = "Pointer position in pixels: draw the tooltip of the event under it"
        )]
        pointer: Option<String>,

        #[arg(
            long = "all",
            conflicts_with_all = ["day", "pointer"],
            help = "Render every day (PDF: one page per day, SVG/JSON: <stem>_day<N>.<ext>)"
        )]
        all: bool,

        #[arg(long = "force", help = "Overwrite existing files without asking")]
        force: bool,
    },

    /// Print the tooltip for a pointer position on a day chart
    Hover {
        source: String,

        #[arg(long = "day")]
        day: u32,

        #[arg(long = "x", allow_negative_numbers = true)]
        x: f64,

        #[arg(long = "y", allow_negative_numbers = true)]
        y: f64,
    },

    /// Per-day totals: reported by the log vs drawn on the chart
    Summary { source: String },

    /// Export the status intervals of a trip
    Export {
        source: String,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "force", help = "Overwrite existing file without asking")]
        force: bool,
    },

    /// Line-driven viewer session on stdin (day N, move X Y, leave, render FILE, days, quit)
    View { source: String },
}
