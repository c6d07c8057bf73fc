use indexmap::IndexMap;

pub const PLAIN_TEXT: &str = "text/plain";
pub const CPP_SOURCE: &str = "text/x-c++";

/// Overrides applied to a detected media type before grammar lookup.
///
/// The default table sends `text/plain` to the C++ grammar, so extensionless
/// sources and languages the sniffer cannot name (Go, for one) are still
/// scanned for `//` and `/* */` comments.
#[derive(Debug, Clone)]
pub struct MediaTypePolicy {
    overrides: IndexMap<String, String>,
}

impl Default for MediaTypePolicy {
    fn default() -> Self {
        Self::empty().with_override(PLAIN_TEXT, CPP_SOURCE)
    }
}

impl MediaTypePolicy {
    /// A policy with no overrides; every type resolves to itself.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            overrides: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_override(mut self, detected: &str, effective: &str) -> Self {
        self.overrides
            .insert(detected.to_string(), effective.to_string());
        self
    }

    /// The media type to use for comment extraction.
    #[must_use]
    pub fn resolve<'a>(&'a self, detected: &'a str) -> &'a str {
        self.overrides
            .get(detected)
            .map_or(detected, String::as_str)
    }

    /// Returns true if `detected` would be replaced by `resolve`.
    #[must_use]
    pub fn overrides(&self, detected: &str) -> bool {
        self.overrides.contains_key(detected)
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
