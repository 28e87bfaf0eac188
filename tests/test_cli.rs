use clap::Parser;
use readeck_highlights::cli::args::Args;
use std::path::PathBuf;

#[test]
fn given_no_arguments_when_parsing_then_uses_defaults() {
    // Arrange
    let args = vec!["readeck-highlights"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.env_file, None);
    assert_eq!(parsed.verbose, 0);
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    let args = vec!["readeck-highlights", "-vv"];

    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_env_file_flag_when_parsing_then_keeps_path() {
    let args = vec!["readeck-highlights", "--env-file", "/etc/readeck/export.env"];

    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(
        parsed.env_file,
        Some(PathBuf::from("/etc/readeck/export.env"))
    );
}

#[test]
fn given_positional_argument_when_parsing_then_fails() {
    let args = vec!["readeck-highlights", "highlights.csv"];

    let result = Args::try_parse_from(args);

    assert!(result.is_err(), "Should not accept positional arguments");
}
