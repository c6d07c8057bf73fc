use std::path::PathBuf;

use super::*;

fn path() -> PathBuf {
    PathBuf::from("cmd/main.go")
}

#[test]
fn banner_line() {
    assert_eq!(
        TextFormatter.format_banner(),
        "Checking copyright headers...\n"
    );
}

#[test]
fn passed_and_skipped_are_silent() {
    assert!(
        TextFormatter
            .format_result(&CheckResult::Passed { path: path() })
            .is_empty()
    );
    assert!(
        TextFormatter
            .format_result(&CheckResult::Skipped { path: path() })
            .is_empty()
    );
}

#[test]
fn missing_copyright_lines() {
    let output = TextFormatter.format_result(&CheckResult::MissingCopyright { path: path() });
    assert_eq!(
        output,
        "# Copyright check error(s) in: cmd/main.go\n\
         \t# Missing or invalid copyright. Expected: Copyright Contributors to the cpackget project.\n"
    );
}

#[test]
fn missing_license_lines() {
    let output = TextFormatter.format_result(&CheckResult::MissingLicense { path: path() });
    assert_eq!(
        output,
        "# Copyright check error(s) in: cmd/main.go\n\
         \t# Missing or invalid license. Expected: SPDX-License-Identifier: Apache-2.0\n"
    );
}

#[test]
fn missing_both_lists_copyright_first() {
    let output = TextFormatter.format_result(&CheckResult::MissingBoth { path: path() });
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("copyright"));
    assert!(lines[2].contains("license"));
}

#[test]
fn mime_error_line() {
    let output = TextFormatter.format_result(&CheckResult::MimeError {
        path: path(),
        message: "permission denied".to_string(),
    });
    assert_eq!(
        output,
        "# Error reading MIME type of cmd/main.go: permission denied\n"
    );
}

#[test]
fn parse_error_line() {
    let output = TextFormatter.format_result(&CheckResult::ParseError {
        path: path(),
        message: "Unsupported MIME type image/png".to_string(),
    });
    assert_eq!(
        output,
        "# Failed to parse comments in cmd/main.go: Unsupported MIME type image/png\n"
    );
}

#[test]
fn summary_only_on_failure() {
    assert!(TextFormatter.format_summary(0).is_empty());
    assert_eq!(
        TextFormatter.format_summary(1),
        ">> error: One or more files are missing a valid copyright or license header\n"
    );
}
