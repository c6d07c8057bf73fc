//! The fixed notices every checked file must carry in its comments.

/// Copyright line required in every non-empty file.
pub const COPYRIGHT_TEXT: &str = "Copyright Contributors to the cpackget project.";

/// SPDX license identifier required in every non-empty file.
pub const LICENSE_TEXT: &str = "SPDX-License-Identifier: Apache-2.0";

/// Which of the two notices were found in a file's comment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeStatus {
    pub copyright_found: bool,
    pub license_found: bool,
}

impl NoticeStatus {
    /// Search `comment_text` for both notices (exact, case-sensitive).
    #[must_use]
    pub fn scan(comment_text: &str) -> Self {
        Self {
            copyright_found: comment_text.contains(COPYRIGHT_TEXT),
            license_found: comment_text.contains(LICENSE_TEXT),
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.copyright_found && self.license_found
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;
