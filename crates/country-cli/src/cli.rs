//! CLI argument definitions for the country select inspector.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use country_model::SelectionMode;

#[derive(Parser)]
#[command(
    name = "country-select",
    version,
    about = "Inspect the country select field - catalog, value normalization and storage",
    long_about = "Inspect the country select field.\n\n\
                  Lists the country catalog, normalizes raw stored or submitted values,\n\
                  reports the storage column type, and prints the render context."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-targets", global = true)]
    pub log_targets: bool,

    /// JSON message table used to translate country labels.
    #[arg(long = "messages", value_name = "PATH", global = true)]
    pub messages: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the country catalog in display order.
    Options(OptionsArgs),

    /// Normalize a raw field value and print it as JSON.
    Normalize(NormalizeArgs),

    /// Print the storage column type for a field.
    ColumnType(FieldArgs),

    /// Print the context a template renderer would receive.
    RenderContext(RenderContextArgs),
}

#[derive(Args)]
pub struct OptionsArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OptionsFormatArg,
}

/// Field definition: either a config file or an inline mode.
#[derive(Args, Clone, Default)]
pub struct FieldArgs {
    /// Selection mode: single or multi.
    #[arg(long = "mode", value_name = "MODE", default_value = "single")]
    pub mode: SelectionMode,

    /// Load the field definition from a TOML or JSON file (overrides --mode).
    #[arg(long = "field", value_name = "PATH")]
    pub field: Option<PathBuf>,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// Raw value: a code, JSON array/object text, or empty for no value.
    #[arg(value_name = "VALUE", default_value = "")]
    pub value: String,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Print the persisted form instead of the normalized value.
    #[arg(long = "stored", conflicts_with = "full")]
    pub stored: bool,

    /// Include the catalog-aligned option view.
    #[arg(long = "full")]
    pub full: bool,
}

#[derive(Args)]
pub struct RenderContextArgs {
    /// Field handle used as the input name.
    #[arg(value_name = "HANDLE")]
    pub handle: String,

    /// Raw value to render.
    #[arg(value_name = "VALUE", default_value = "")]
    pub value: String,

    #[command(flatten)]
    pub field: FieldArgs,

    /// Form namespace applied to the element id.
    #[arg(long = "namespace", value_name = "NS")]
    pub namespace: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OptionsFormatArg {
    Table,
    Json,
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
