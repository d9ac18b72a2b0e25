//! Grammar table
//!
//! This module provides the GrammarTable that maps language identifiers
//! and their aliases to grammars.

use std::collections::HashMap;
use std::sync::Arc;

use super::builtin;
use super::language::Grammar;
use crate::error::{GrammarError, Result};

/// Registry of grammars keyed by lower-case identifier
///
/// An alias and its canonical name resolve to the same `Arc<Grammar>`.
/// Registration is additive: an identifier, once taken, cannot be
/// redefined.
#[derive(Clone, Default)]
pub struct GrammarTable {
    /// Identifier (canonical or alias) to grammar
    grammars: HashMap<String, Arc<Grammar>>,
    /// Canonical names, in registration order
    canonical: Vec<String>,
}

impl GrammarTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the built-in grammars
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for grammar in builtin::all_languages() {
            if let Err(err) = table.register(grammar) {
                tracing::error!(%err, "built-in grammar failed to register");
            }
        }
        table
    }

    /// Register a grammar under its name and aliases
    ///
    /// Fails without modifying the table if any identifier is taken.
    pub fn register(&mut self, grammar: Grammar) -> Result<()> {
        let mut identifiers = Vec::with_capacity(1 + grammar.aliases.len());
        identifiers.push(grammar.name.clone());
        identifiers.extend(grammar.aliases.iter().cloned());

        for (i, id) in identifiers.iter().enumerate() {
            if id.is_empty() {
                return Err(GrammarError::EmptyIdentifier);
            }
            if self.grammars.contains_key(id) || identifiers[..i].contains(id) {
                return Err(GrammarError::DuplicateIdentifier(id.clone()));
            }
        }

        tracing::debug!(language = %grammar.name, aliases = ?grammar.aliases, "registering grammar");

        let grammar = Arc::new(grammar);
        self.canonical.push(grammar.name.clone());
        for id in identifiers {
            self.grammars.insert(id, Arc::clone(&grammar));
        }
        Ok(())
    }

    /// Look up a grammar by identifier, ignoring case
    ///
    /// Unregistered and empty identifiers resolve to `None`.
    pub fn resolve(&self, language: &str) -> Option<&Arc<Grammar>> {
        if language.is_empty() {
            return None;
        }
        self.grammars.get(&language.to_lowercase())
    }

    pub fn contains(&self, language: &str) -> bool {
        self.resolve(language).is_some()
    }

    /// Canonical language names, sorted
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.canonical.iter().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let table = GrammarTable::builtin();
        assert!(table.resolve("JavaScript").is_some());
        assert!(table.resolve("CSS").is_some());
        assert!(table.resolve("Json").is_some());
    }

    #[test]
    fn test_aliases_share_instance() {
        let table = GrammarTable::builtin();
        let js = table.resolve("js").unwrap();
        let javascript = table.resolve("javascript").unwrap();
        assert!(Arc::ptr_eq(js, javascript));

        let htm = table.resolve("HTM").unwrap();
        assert_eq!(htm.name, "html");
    }

    #[test]
    fn test_unknown_languages() {
        let table = GrammarTable::builtin();
        assert!(table.resolve("").is_none());
        assert!(table.resolve("unknown-lang-xyz").is_none());
        // Identifiers are not trimmed
        assert!(table.resolve(" json ").is_none());
        assert!(!table.contains("rust"));
    }

    #[test]
    fn test_list_languages() {
        let table = GrammarTable::builtin();
        assert_eq!(
            table.list_languages(),
            vec!["css", "html", "javascript", "json", "sql"]
        );
    }

    #[test]
    fn test_register_is_additive() {
        let mut table = GrammarTable::builtin();
        let yaml = Grammar::builder("yaml").alias("yml").comment(r"#[^\n]*").build().unwrap();
        table.register(yaml).unwrap();
        assert!(table.contains("yml"));

        let clash = Grammar::builder("ecmascript").alias("js").build().unwrap();
        let err = table.register(clash).unwrap_err();
        assert!(matches!(err, GrammarError::DuplicateIdentifier(ref id) if id == "js"));
        // Nothing from the rejected grammar was registered
        assert!(!table.contains("ecmascript"));
        assert_eq!(table.resolve("js").unwrap().name, "javascript");
    }

    #[test]
    fn test_duplicate_alias_within_grammar() {
        let mut table = GrammarTable::new();
        let grammar = Grammar::builder("x").alias("X").build().unwrap();
        assert!(table.register(grammar).is_err());
        assert!(table.list_languages().is_empty());
    }
}
