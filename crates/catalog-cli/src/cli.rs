//! CLI argument definitions for the catalog browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog",
    version,
    about = "Browse, search and render a technical component catalog",
    long_about = "Browse, search and render a technical component catalog.\n\n\
                  A catalog is a directory of components, each with a config.json\n\
                  holding its data table and a diagram.svg with {{ key }} placeholders."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog root directory (default: $CATALOG_ROOT, then ./catalog).
    #[arg(long = "catalog", value_name = "DIR", global = true)]
    pub catalog: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the catalog tree.
    Tree(TreeArgs),

    /// Fuzzy-search the catalog and print the matching part of the tree.
    Search(SearchArgs),

    /// Show a component's details and data table.
    Show(ShowArgs),

    /// Render a component diagram for one of its data rows.
    Render(RenderArgs),

    /// Load every component and report problems.
    Check(CheckArgs),
}

#[derive(Args)]
pub struct TreeArgs {
    /// Let the last listed path decide when a path is both a leaf and a
    /// folder, instead of failing.
    #[arg(long = "last-wins")]
    pub last_wins: bool,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Search text; matched against component names and paths.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Acceptance threshold from 0 (exact) to 1 (anything).
    #[arg(long = "threshold", value_name = "SCORE", conflicts_with = "preset")]
    pub threshold: Option<f64>,

    /// Matching preset.
    #[arg(long = "preset", value_enum)]
    pub preset: Option<SearchPresetArg>,

    /// Print a table of matching components with their scores.
    #[arg(long = "explain")]
    pub explain: bool,

    /// Let the last listed path decide when a path is both a leaf and a
    /// folder, instead of failing.
    #[arg(long = "last-wins")]
    pub last_wins: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Component path, e.g. screws/socket_head.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Highlight this data row.
    #[arg(long = "row", value_name = "N")]
    pub row: Option<usize>,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Component path, e.g. screws/socket_head.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Data row to substitute (zero-based). Without it the diagram is
    /// printed as authored.
    #[arg(long = "row", value_name = "N")]
    pub row: Option<usize>,

    /// Write the rendered diagram to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip the val_<key> element pass for old diagrams.
    #[arg(long = "no-legacy")]
    pub no_legacy: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SearchPresetArg {
    Strict,
    Default,
    Relaxed,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
