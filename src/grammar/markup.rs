use regex::Regex;

use crate::error::{NoticeGuardError, Result};
use crate::extractor::Comment;

use super::{CommentGrammar, LineIndex};

const MARKUP_PATTERN: &str = r"<!--(?P<content>(?s:.*?))-->|(?P<unterminated><!--)";

/// `<!-- -->` comments in HTML and XML.
pub struct MarkupGrammar {
    pattern: Regex,
}

impl Default for MarkupGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupGrammar {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(MARKUP_PATTERN).expect("Invalid regex"),
        }
    }
}

impl CommentGrammar for MarkupGrammar {
    fn name(&self) -> &'static str {
        "Markup"
    }

    fn extract(&self, source: &str) -> Result<Vec<Comment>> {
        let lines = LineIndex::new(source);
        let mut comments = Vec::new();

        for caps in self.pattern.captures_iter(source) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let line = lines.line_of(whole.start());

            match caps.name("content") {
                Some(content) => {
                    let multiline = content.as_str().contains('\n');
                    comments.push(Comment::new(content.as_str(), line, multiline));
                }
                None => return Err(NoticeGuardError::UnterminatedComment { line }),
            }
        }

        Ok(comments)
    }
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
