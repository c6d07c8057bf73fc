use std::path::PathBuf;

use super::*;

#[test]
fn cli_no_files() {
    let cli = Cli::parse_from(["notice-guard"]);
    assert!(cli.files.is_empty());
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_files_keep_order() {
    let cli = Cli::parse_from(["notice-guard", "b.go", "a.c", "scripts/x.py"]);
    assert_eq!(
        cli.files,
        vec![
            PathBuf::from("b.go"),
            PathBuf::from("a.c"),
            PathBuf::from("scripts/x.py"),
        ]
    );
}

#[test]
fn cli_verbose_counts() {
    let cli = Cli::parse_from(["notice-guard", "-vv", "a.c"]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.files, vec![PathBuf::from("a.c")]);
}

#[test]
fn cli_long_verbose() {
    let cli = Cli::parse_from(["notice-guard", "--verbose", "a.c"]);
    assert_eq!(cli.verbose, 1);
}

#[test]
fn cli_unknown_flag_is_rejected() {
    let result = Cli::try_parse_from(["notice-guard", "--fix", "a.c"]);
    assert!(result.is_err());
}

#[test]
fn cli_double_dash_allows_dash_file_names() {
    let cli = Cli::parse_from(["notice-guard", "--", "-odd.c"]);
    assert_eq!(cli.files, vec![PathBuf::from("-odd.c")]);
}
