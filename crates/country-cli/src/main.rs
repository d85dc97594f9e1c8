//! Country select inspection CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use country_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use country_cli::commands::{
    load_catalog, run_column_type, run_normalize, run_options, run_render_context,
};
use country_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let catalog = load_catalog(cli.messages.as_deref())?;
    match &cli.command {
        Command::Options(args) => run_options(args, &catalog),
        Command::Normalize(args) => run_normalize(args, &catalog),
        Command::ColumnType(args) => run_column_type(args, &catalog),
        Command::RenderContext(args) => run_render_context(args, &catalog),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig::default()
        .with_level_filter(cli.verbosity.tracing_level_filter())
        .with_timestamps(cli.log_timestamps)
        .with_target(cli.log_targets)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config = config.with_level_filter(match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        });
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config.with_format(format).with_ansi(ansi)
}
