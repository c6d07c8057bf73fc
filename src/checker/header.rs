use std::fs;
use std::path::Path;

use crate::extractor::{CommentExtractor, GrammarExtractor, join_comments};
use crate::media::{ContentSniffer, MediaTypeDetector, MediaTypePolicy};
use crate::notice::NoticeStatus;

use super::CheckResult;

/// Checks single files for the copyright and license notices.
///
/// Detection and extraction are pluggable; the default wiring sniffs content
/// with [`ContentSniffer`] and extracts comments with [`GrammarExtractor`].
pub struct HeaderChecker<D = ContentSniffer, E = GrammarExtractor> {
    detector: D,
    extractor: E,
    policy: MediaTypePolicy,
    verbose: u8,
}

impl Default for HeaderChecker {
    fn default() -> Self {
        Self::new(ContentSniffer::new(), GrammarExtractor::default())
    }
}

impl<D: MediaTypeDetector, E: CommentExtractor> HeaderChecker<D, E> {
    #[must_use]
    pub fn new(detector: D, extractor: E) -> Self {
        Self {
            detector,
            extractor,
            policy: MediaTypePolicy::default(),
            verbose: 0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: MediaTypePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Trace each step on stderr: `1` per-file summaries, `2` also skips and
    /// media type overrides.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check one file. Never fails: every error becomes a [`CheckResult`].
    #[must_use]
    pub fn check(&self, path: &Path) -> CheckResult {
        let size = match fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                return CheckResult::MimeError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                };
            }
        };

        if size == 0 {
            if self.verbose >= 2 {
                eprintln!("{}: empty, skipped", path.display());
            }
            return CheckResult::Skipped {
                path: path.to_path_buf(),
            };
        }

        let detected = match self.detector.detect(path) {
            Ok(media_type) => media_type,
            Err(e) => {
                return CheckResult::MimeError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                };
            }
        };

        let media_type = self.policy.resolve(&detected);
        if self.verbose >= 2 && self.policy.overrides(&detected) {
            eprintln!("{}: {detected} treated as {media_type}", path.display());
        }

        let comments = match self.extractor.extract(path, media_type) {
            Ok(comments) => comments,
            Err(e) => {
                return CheckResult::ParseError {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                };
            }
        };

        if self.verbose >= 1 {
            let grammar = self.extractor.grammar_name(media_type).unwrap_or("custom");
            eprintln!(
                "{}: {media_type} ({grammar}), {} comment(s)",
                path.display(),
                comments.len()
            );
        }

        let status = NoticeStatus::scan(&join_comments(&comments));
        CheckResult::from_status(path.to_path_buf(), status)
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
