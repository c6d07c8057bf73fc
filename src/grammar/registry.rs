use indexmap::IndexMap;

use super::{CStyleGrammar, CommentGrammar, HashGrammar, MarkupGrammar, PythonGrammar};

/// Media types that share the C-style grammar.
const C_STYLE_MEDIA_TYPES: &[&str] = &[
    "text/x-c",
    "text/x-c++",
    "text/x-go",
    "text/x-java",
    "text/x-java-source",
    "text/x-javascript",
    "application/javascript",
];

/// Maps media types to the grammar that extracts their comments.
pub struct GrammarRegistry {
    grammars: Vec<Box<dyn CommentGrammar>>,
    media_type_map: IndexMap<String, usize>,
}

impl GrammarRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            grammars: Vec::new(),
            media_type_map: IndexMap::new(),
        }
    }

    /// Register `grammar` for every media type in `media_types`.
    ///
    /// A media type registered twice resolves to the later grammar.
    pub fn register(&mut self, media_types: &[&str], grammar: Box<dyn CommentGrammar>) {
        let idx = self.grammars.len();
        for media_type in media_types {
            self.media_type_map.insert((*media_type).to_string(), idx);
        }
        self.grammars.push(grammar);
    }

    #[must_use]
    pub fn get_by_media_type(&self, media_type: &str) -> Option<&dyn CommentGrammar> {
        self.media_type_map
            .get(media_type)
            .map(|&idx| self.grammars[idx].as_ref())
    }
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        let mut registry = Self::new();

        registry.register(C_STYLE_MEDIA_TYPES, Box::new(CStyleGrammar::new()));
        registry.register(&["text/x-shellscript"], Box::new(HashGrammar::shell()));
        registry.register(
            &["text/x-python", "text/x-script.python"],
            Box::new(PythonGrammar),
        );
        registry.register(&["text/x-ruby"], Box::new(HashGrammar::ruby()));
        registry.register(&["text/html", "text/xml"], Box::new(MarkupGrammar::new()));

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
