use regex::Regex;

use crate::error::{NoticeGuardError, Result};
use crate::extractor::Comment;

use super::{CommentGrammar, LineIndex};

/// Literals are matched first so that `//` or `/*` inside a string, char or
/// backtick literal is never taken for a comment.
const C_STYLE_PATTERN: &str = concat!(
    r#"(?P<literal>"(?:[^"\\\n]|\\(?s:.))*"|'(?:[^'\\\n]|\\(?s:.))*'|`[^`]*`)"#,
    r"|//(?P<single_content>[^\n]*)",
    r"|/\*(?P<multi_content>(?s:.*?))\*/",
    r"|(?P<unterminated>/\*)",
);

/// `//` line comments and `/* */` block comments.
///
/// Shared by C, C++, Go, Java and JavaScript. Block comments do not nest.
pub struct CStyleGrammar {
    pattern: Regex,
}

impl Default for CStyleGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl CStyleGrammar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(C_STYLE_PATTERN).expect("Invalid regex"),
        }
    }
}

impl CommentGrammar for CStyleGrammar {
    fn name(&self) -> &'static str {
        "C-style"
    }

    fn extract(&self, source: &str) -> Result<Vec<Comment>> {
        let lines = LineIndex::new(source);
        let mut comments = Vec::new();

        for caps in self.pattern.captures_iter(source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let line = lines.line_of(whole.start());

            if let Some(content) = caps.name("single_content") {
                comments.push(Comment::single_line(content.as_str(), line));
            } else if let Some(content) = caps.name("multi_content") {
                comments.push(Comment::multi_line(content.as_str(), line));
            } else if caps.name("unterminated").is_some() {
                return Err(NoticeGuardError::UnterminatedComment { line });
            }
        }

        Ok(comments)
    }
}

#[cfg(test)]
#[path = "c_style_tests.rs"]
mod tests;
