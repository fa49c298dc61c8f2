use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use cadence_core::VERSION;

/// Cadence - composable, consistently spaced terminal output
#[derive(Parser)]
#[command(name = "cadence")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a theme file
    #[arg(long, global = true, env = "CADENCE_THEME", value_name = "PATH")]
    pub theme: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII glyphs only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Output format; defaults to pretty on a capable terminal
    #[arg(long, global = true, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// How much decoration to put on rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// No colors or animation, stable for logs and scripts
    Plain,
    /// Colors and animated spinners when stdout is a terminal
    Pretty,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a showcase of every element
    Demo(DemoArgs),

    /// Render JSON records as a table
    Table(TableArgs),

    /// Inspect or create theme files
    #[command(subcommand)]
    Theme(ThemeCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the `demo` command
#[derive(Args)]
pub struct DemoArgs {
    /// Skip the spinner section
    #[arg(long)]
    pub no_spinner: bool,

    /// Rows per page for the demo table
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,
}

/// Arguments for the `table` command
#[derive(Args)]
pub struct TableArgs {
    /// JSON file holding an array of objects (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Table title
    #[arg(long)]
    pub title: Option<String>,

    /// Rows per page; navigation needs an interactive terminal
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Fixed table width in columns
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Fixed column width, as NAME=COLS (repeatable)
    #[arg(long = "column-width", value_name = "NAME=COLS")]
    pub column_widths: Vec<String>,

    /// Truncate long cells instead of wrapping them
    #[arg(long)]
    pub no_wrap: bool,

    /// Stretch the table to the terminal width
    #[arg(long)]
    pub expand: bool,
}

#[derive(Subcommand)]
pub enum ThemeCommand {
    /// Print the resolved theme
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the default theme to a file
    Init {
        /// Destination (defaults to the XDG config path)
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
