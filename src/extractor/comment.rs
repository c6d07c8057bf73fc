/// A single comment found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Comment body without its delimiters, otherwise untouched.
    pub text: String,
    /// 1-based line on which the comment starts.
    pub line: usize,
    pub multiline: bool,
}

impl Comment {
    #[must_use]
    pub fn new(text: impl Into<String>, line: usize, multiline: bool) -> Self {
        Self {
            text: text.into(),
            line,
            multiline,
        }
    }

    #[must_use]
    pub fn single_line(text: impl Into<String>, line: usize) -> Self {
        Self::new(text, line, false)
    }

    #[must_use]
    pub fn multi_line(text: impl Into<String>, line: usize) -> Self {
        Self::new(text, line, true)
    }
}

/// Join comment bodies in file order, one per line.
#[must_use]
pub fn join_comments(comments: &[Comment]) -> String {
    comments
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
