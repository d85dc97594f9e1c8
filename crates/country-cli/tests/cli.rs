//! Argument parsing for the global logging flags and the field mode.

use clap::Parser;
use country_cli::cli::{Cli, Command};
use country_model::SelectionMode;

#[test]
fn test_mode_is_parsed_from_text() {
    let cli = Cli::try_parse_from(["country-select", "column-type", "--mode", "multiple"])
        .expect("parse args");
    let Command::ColumnType(args) = cli.command else {
        panic!("expected column-type");
    };
    assert_eq!(args.mode, SelectionMode::Multi);

    let cli = Cli::try_parse_from(["country-select", "normalize", "US"]).expect("parse args");
    let Command::Normalize(args) = cli.command else {
        panic!("expected normalize");
    };
    assert_eq!(args.field.mode, SelectionMode::Single);
}

#[test]
fn test_unknown_mode_is_rejected() {
    let err = Cli::try_parse_from(["country-select", "normalize", "US", "--mode", "many"])
        .err()
        .expect("invalid mode");
    assert!(err.to_string().contains("unknown selection mode 'many'"));
}

#[test]
fn test_log_layout_flags() {
    let cli = Cli::try_parse_from([
        "country-select",
        "options",
        "--log-timestamps",
        "--log-targets",
    ])
    .expect("parse args");
    assert!(cli.log_timestamps);
    assert!(cli.log_targets);

    let cli = Cli::try_parse_from(["country-select", "options"]).expect("parse args");
    assert!(!cli.log_timestamps);
    assert!(!cli.log_targets);
}
