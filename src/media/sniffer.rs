use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{NoticeGuardError, Result};

use super::MediaTypeDetector;
use super::policy::PLAIN_TEXT;

const OCTET_STREAM: &str = "application/octet-stream";
const SHELL_SCRIPT: &str = "text/x-shellscript";

/// A text heuristic: every pattern must match for the rule to apply.
struct SniffRule {
    media_type: &'static str,
    patterns: Vec<Regex>,
}

impl SniffRule {
    fn new(media_type: &'static str, patterns: &[&str]) -> Self {
        Self {
            media_type,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("Invalid regex"))
                .collect(),
        }
    }

    fn matches(&self, text: &str) -> bool {
        self.patterns.iter().all(|p| p.is_match(text))
    }
}

/// Classifies files by their bytes, never by their name.
///
/// Checks run in order: `#!` interpreter line, text heuristics for UTF-8
/// content without NUL bytes, then binary magic numbers. Text nothing
/// recognizes is `text/plain`; binary nothing recognizes is
/// `application/octet-stream`.
pub struct ContentSniffer {
    rules: Vec<SniffRule>,
}

impl Default for ContentSniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSniffer {
    #[must_use]
    pub fn new() -> Self {
        let rules = vec![
            SniffRule::new("text/xml", &[r"\A\s*<\?xml\s"]),
            SniffRule::new("text/html", &[r"(?i)\A\s*(?:<!doctype\s+html|<html[\s>])"]),
            SniffRule::new(
                "text/x-java",
                &[
                    r"(?m)^\s*package\s+[\w.]+\s*;",
                    r"(?m)^\s*(?:import\s+[\w.*]+\s*;|(?:public\s+|final\s+|abstract\s+)*(?:class|interface|enum)\s+\w+)",
                ],
            ),
            SniffRule::new(
                "text/x-c++",
                &[
                    r"(?m)^\s*(?:namespace\s+\w+\s*\{|template\s*<|using\s+namespace\s+\w+|class\s+\w+[^;\n]*\{|#include\s*<(?:iostream|string|vector|map|memory|algorithm|cstdint|cstdio|cstdlib)>)",
                ],
            ),
            SniffRule::new(
                "text/x-c",
                &[r"(?m)^\s*#(?:include|define|ifndef|ifdef|pragma)\b"],
            ),
            SniffRule::new(
                "text/x-script.python",
                &[
                    r"(?m)^(?:def\s+\w+\s*\(|class\s+\w+(?:\([^)]*\))?\s*:|import\s+[\w.]+(?:\s+as\s+\w+)?\s*$|from\s+[\w.]+\s+import\s)",
                ],
            ),
        ];

        Self { rules }
    }

    /// Media type for the given file content.
    #[must_use]
    pub fn sniff(&self, bytes: &[u8]) -> String {
        if let Some(media_type) = Self::sniff_shebang(bytes) {
            return media_type.to_string();
        }

        if let Ok(text) = std::str::from_utf8(bytes)
            && !text.contains('\0')
        {
            return self.sniff_text(text).to_string();
        }

        // Several magic numbers are two-byte prefixes, so only binary content
        // is matched against them.
        infer::get(bytes).map_or_else(
            || OCTET_STREAM.to_string(),
            |kind| kind.mime_type().to_string(),
        )
    }

    fn sniff_text(&self, text: &str) -> &'static str {
        self.rules
            .iter()
            .find(|rule| rule.matches(text))
            .map_or(PLAIN_TEXT, |rule| rule.media_type)
    }

    /// Media type named by a `#!` interpreter line, if there is one.
    fn sniff_shebang(bytes: &[u8]) -> Option<&'static str> {
        let rest = bytes.strip_prefix(b"#!")?;
        let line_len = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
        let line = String::from_utf8_lossy(&rest[..line_len]);

        let mut words = line.split_whitespace();
        let program = words.next()?;
        let mut interpreter = program.rsplit('/').next().unwrap_or(program);
        if interpreter == "env" {
            interpreter = words.find(|w| !w.starts_with('-')).unwrap_or_default();
        }

        Some(interpreter_media_type(interpreter))
    }
}

fn interpreter_media_type(interpreter: &str) -> &'static str {
    if interpreter.starts_with("python") {
        "text/x-script.python"
    } else if interpreter.starts_with("ruby") {
        "text/x-ruby"
    } else if interpreter == "node" || interpreter == "nodejs" {
        "application/javascript"
    } else {
        SHELL_SCRIPT
    }
}

impl MediaTypeDetector for ContentSniffer {
    fn detect(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| NoticeGuardError::file_read(path, e))?;
        Ok(self.sniff(&bytes))
    }
}

#[cfg(test)]
#[path = "sniffer_tests.rs"]
mod tests;
