//! Configuration support
//!
//! Hosts can pick a default language and declare extra grammars in TOML.
//! Configured grammars are added on top of the built-in ones; they cannot
//! replace a built-in identifier.
//!
//! Example:
//! ```text
//! default_language = "yaml"
//!
//! [[grammar]]
//! name = "yaml"
//! aliases = ["yml"]
//! protected = [
//!     { kind = "comment", pattern = '#[^\n]*' },
//!     { kind = "string", pattern = '"(?:[^"\\\n]|\\.)*"' },
//! ]
//!
//! [grammar.secondary]
//! keywords = '\b(true|false|null)\b'
//! numbers = '-?\b\d+(?:\.\d+)?\b'
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{GrammarError, Result};
use crate::highlighter::{Highlighter, DEFAULT_LANGUAGE};
use crate::syntax::{Grammar, GrammarTable, SecondaryKind, SpanKind};

/// Highlighter settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlighterConfig {
    /// Language used when the host does not name one
    pub default_language: String,
    /// Extra grammars
    #[serde(rename = "grammar")]
    pub grammars: Vec<GrammarConfig>,
}

impl Default for HighlighterConfig {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
            grammars: Vec::new(),
        }
    }
}

/// One configured grammar
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    pub name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Protected alternatives, tried in order
    #[serde(default)]
    pub protected: Vec<ProtectedConfig>,
    /// Secondary kind name to pattern
    #[serde(default)]
    pub secondary: BTreeMap<String, String>,
}

/// One protected alternative
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProtectedConfig {
    /// "comment", "string" or "tag"
    pub kind: String,
    pub pattern: String,
}

impl GrammarConfig {
    /// Compile this entry into a grammar
    pub fn build(&self) -> Result<Grammar> {
        let mut builder = Grammar::builder(&self.name);
        for alias in &self.aliases {
            builder = builder.alias(alias);
        }
        for alt in &self.protected {
            let kind = SpanKind::from_name(&alt.kind)
                .ok_or_else(|| GrammarError::UnknownSpanKind(alt.kind.clone()))?;
            builder = builder.protected(kind, &alt.pattern);
        }
        for (name, pattern) in &self.secondary {
            let kind = SecondaryKind::from_name(name)
                .ok_or_else(|| GrammarError::UnknownSecondaryKind(name.clone()))?;
            builder = builder.secondary(kind, pattern);
        }
        builder.build()
    }
}

impl HighlighterConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        tracing::debug!(
            default_language = %config.default_language,
            grammars = config.grammars.len(),
            "parsed highlighter configuration"
        );
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading highlighter configuration");
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The built-in grammars plus every configured grammar
    pub fn grammar_table(&self) -> Result<GrammarTable> {
        let mut table = GrammarTable::builtin();
        for entry in &self.grammars {
            table.register(entry.build()?)?;
        }
        Ok(table)
    }

    /// A highlighter over [`Self::grammar_table`] set to the default language
    pub fn highlighter(&self) -> Result<Highlighter> {
        let table = Arc::new(self.grammar_table()?);
        Ok(Highlighter::with_table(table, &self.default_language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlighter::Highlight;

    const YAML: &str = r#"
default_language = "yaml"

[[grammar]]
name = "yaml"
aliases = ["yml"]
protected = [
    { kind = "comment", pattern = '#[^\n]*' },
    { kind = "string", pattern = '"(?:[^"\\\n]|\\.)*"' },
]

[grammar.secondary]
keywords = '\b(true|false|null)\b'
numbers = '-?\b\d+(?:\.\d+)?\b'
"#;

    #[test]
    fn test_defaults() {
        let config = HighlighterConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_language, "javascript");
        assert!(config.grammars.is_empty());
    }

    #[test]
    fn test_parse_grammar() {
        let config = HighlighterConfig::from_toml_str(YAML).unwrap();
        assert_eq!(config.default_language, "yaml");
        assert_eq!(config.grammars.len(), 1);
        assert_eq!(config.grammars[0].aliases, vec!["yml"]);
        assert_eq!(config.grammars[0].protected[0].kind, "comment");
    }

    #[test]
    fn test_configured_highlighter() {
        let config = HighlighterConfig::from_toml_str(YAML).unwrap();
        let highlighter = config.highlighter().unwrap();
        assert_eq!(highlighter.language(), "yaml");
        assert_eq!(
            highlighter.highlight("on: true # yes"),
            "on: <span class=\"keyword\">true</span> <span class=\"comment\"># yes</span>"
        );

        let table = config.grammar_table().unwrap();
        assert!(table.contains("yml"));
        assert!(table.contains("javascript"));
    }

    #[test]
    fn test_unknown_kinds() {
        let bad_span = r#"
[[grammar]]
name = "x"
protected = [{ kind = "heredoc", pattern = "<<" }]
"#;
        let config = HighlighterConfig::from_toml_str(bad_span).unwrap();
        assert!(matches!(
            config.grammar_table(),
            Err(GrammarError::UnknownSpanKind(ref k)) if k == "heredoc"
        ));

        let bad_secondary = r#"
[[grammar]]
name = "x"
[grammar.secondary]
operators = '[+-]'
"#;
        let config = HighlighterConfig::from_toml_str(bad_secondary).unwrap();
        assert!(matches!(
            config.grammar_table(),
            Err(GrammarError::UnknownSecondaryKind(_))
        ));
    }

    #[test]
    fn test_cannot_replace_builtin() {
        let config = HighlighterConfig::from_toml_str("[[grammar]]\nname = \"CSS\"\n").unwrap();
        assert!(matches!(
            config.grammar_table(),
            Err(GrammarError::DuplicateIdentifier(_))
        ));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        // Patterns belong under `protected` and `[grammar.secondary]`
        let misplaced = "[[grammar]]\nname = \"yaml\"\ncomment = ['#[^\\n]*']\nkeywords = '\\b(true|false)\\b'\n";
        assert!(matches!(
            HighlighterConfig::from_toml_str(misplaced),
            Err(GrammarError::Config(_))
        ));

        let misspelled = "default_langauge = \"css\"\n";
        assert!(matches!(
            HighlighterConfig::from_toml_str(misspelled),
            Err(GrammarError::Config(_))
        ));

        let bad_alternative = "[[grammar]]\nname = \"x\"\nprotected = [{ kind = \"string\", regex = '\"' }]\n";
        assert!(matches!(
            HighlighterConfig::from_toml_str(bad_alternative),
            Err(GrammarError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            HighlighterConfig::from_toml_str("default_language = "),
            Err(GrammarError::Config(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = HighlighterConfig::load(Path::new("/nonexistent/highlight.toml"));
        assert!(matches!(result, Err(GrammarError::Io(_))));
    }
}
