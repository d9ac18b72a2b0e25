//! Grammar descriptors
//!
//! This module provides the Grammar struct that bundles a language's
//! protected-span pattern with its secondary patterns, and the scan loop
//! that turns raw text into a token stream.

use std::collections::BTreeMap;

use super::rules::{ProtectedPattern, SecondaryPattern};
use super::secondary::classify;
use super::tag::tag_tokens;
use super::tokens::{SecondaryKind, SpanKind, Token, TokenKind};
use crate::error::{GrammarError, Result};

/// A complete grammar for one language
///
/// Grammars are immutable once built and hold no scan state, so one
/// instance can serve any number of concurrent highlight calls.
pub struct Grammar {
    /// Canonical, lower-case identifier (e.g., "javascript")
    pub name: String,
    /// Alternate identifiers resolving to this grammar (e.g., ["js"])
    pub aliases: Vec<String>,
    /// Comments, strings and tags; `None` means all text is free text
    protected: Option<ProtectedPattern>,
    /// Secondary rules, one per kind, in pass order
    secondary: Vec<SecondaryPattern>,
}

impl Grammar {
    /// Start building a grammar
    pub fn builder(name: &str) -> GrammarBuilder {
        GrammarBuilder::new(name)
    }

    pub fn has_protected(&self) -> bool {
        self.protected.is_some()
    }

    /// Whether matched tags are decomposed into name and attributes
    pub fn has_tags(&self) -> bool {
        self.protected.as_ref().is_some_and(|p| p.has_tags())
    }

    /// Secondary kinds this grammar classifies, in pass order
    pub fn secondary_kinds(&self) -> Vec<SecondaryKind> {
        self.secondary.iter().map(|p| p.kind).collect()
    }

    /// Split `text` into classified tokens
    ///
    /// The scan cursor lives on this call's stack. Free text between
    /// protected spans goes through secondary classification; protected
    /// spans are classified by the alternative that matched them.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let Some(protected) = &self.protected else {
            return classify(text, 0, &self.secondary);
        };

        let mut tokens = Vec::new();
        let mut free_from = 0;
        let mut search_from = 0;

        while search_from <= text.len() {
            let Some(found) = protected.find_at(text, search_from) else {
                break;
            };

            if found.is_empty() {
                // Never let an empty match stall the scan
                tracing::trace!(language = %self.name, at = found.start, "skipping empty protected match");
                search_from = next_char_boundary(text, found.start);
                continue;
            }

            tokens.extend(classify(&text[free_from..found.start], free_from, &self.secondary));

            match found.kind {
                SpanKind::Comment => {
                    tokens.push(Token::new(TokenKind::Comment, text, found.start, found.end))
                }
                SpanKind::String => {
                    tokens.push(Token::new(TokenKind::String, text, found.start, found.end))
                }
                SpanKind::Tag => tokens.extend(tag_tokens(&text[found.start..found.end], found.start)),
            }

            free_from = found.end;
            search_from = found.end;
        }

        tokens.extend(classify(&text[free_from..], free_from, &self.secondary));
        tokens
    }
}

/// Offset of the character after the one at `pos`, or past the end
fn next_char_boundary(text: &str, pos: usize) -> usize {
    match text[pos..].chars().next() {
        Some(c) => pos + c.len_utf8(),
        None => text.len() + 1,
    }
}

/// Builder for [`Grammar`]
///
/// Protected alternatives are tried in the order they are added.
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    name: String,
    aliases: Vec<String>,
    protected: Vec<(SpanKind, String)>,
    secondary: BTreeMap<SecondaryKind, String>,
}

impl GrammarBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            ..Default::default()
        }
    }

    /// Add an alternate identifier
    pub fn alias(mut self, alias: &str) -> Self {
        self.aliases.push(alias.trim().to_lowercase());
        self
    }

    /// Add a protected alternative
    pub fn protected(mut self, kind: SpanKind, pattern: &str) -> Self {
        self.protected.push((kind, pattern.to_string()));
        self
    }

    pub fn comment(self, pattern: &str) -> Self {
        self.protected(SpanKind::Comment, pattern)
    }

    pub fn string(self, pattern: &str) -> Self {
        self.protected(SpanKind::String, pattern)
    }

    pub fn tag(self, pattern: &str) -> Self {
        self.protected(SpanKind::Tag, pattern)
    }

    /// Set the secondary pattern for `kind`, replacing any earlier one
    pub fn secondary(mut self, kind: SecondaryKind, pattern: &str) -> Self {
        self.secondary.insert(kind, pattern.to_string());
        self
    }

    pub fn selectors(self, pattern: &str) -> Self {
        self.secondary(SecondaryKind::Selector, pattern)
    }

    pub fn properties(self, pattern: &str) -> Self {
        self.secondary(SecondaryKind::Property, pattern)
    }

    pub fn keywords(self, pattern: &str) -> Self {
        self.secondary(SecondaryKind::Keyword, pattern)
    }

    pub fn builtins(self, pattern: &str) -> Self {
        self.secondary(SecondaryKind::Builtin, pattern)
    }

    pub fn numbers(self, pattern: &str) -> Self {
        self.secondary(SecondaryKind::Number, pattern)
    }

    /// Compile every pattern
    pub fn build(self) -> Result<Grammar> {
        if self.name.is_empty() || self.aliases.iter().any(|a| a.is_empty()) {
            return Err(GrammarError::EmptyIdentifier);
        }

        let protected = if self.protected.is_empty() {
            None
        } else {
            Some(ProtectedPattern::new(&self.name, &self.protected)?)
        };

        let secondary = self
            .secondary
            .iter()
            .map(|(kind, pattern)| SecondaryPattern::new(&self.name, *kind, pattern))
            .collect::<Result<Vec<_>>>()?;

        Ok(Grammar {
            name: self.name,
            aliases: self.aliases,
            protected,
            secondary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_language() -> Grammar {
        Grammar::builder("Test")
            .alias("tst")
            .comment(r"//[^\n]*")
            .string(r#""(?:[^"\\\n]|\\.)*""#)
            .numbers(r"\b\d+\b")
            .keywords(r"\b(let|if)\b")
            .build()
            .unwrap()
    }

    fn kinds<'a>(tokens: &[Token<'a>]) -> Vec<(TokenKind, &'a str)> {
        tokens.iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn test_builder_normalizes_names() {
        let lang = create_test_language();
        assert_eq!(lang.name, "test");
        assert_eq!(lang.aliases, vec!["tst"]);
        assert!(lang.has_protected());
        assert!(!lang.has_tags());
        assert_eq!(
            lang.secondary_kinds(),
            vec![SecondaryKind::Keyword, SecondaryKind::Number]
        );
    }

    #[test]
    fn test_simple_highlighting() {
        let lang = create_test_language();
        let tokens = lang.tokenize("let x = 42;");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Keyword, "let"),
                (TokenKind::Plain, " x = "),
                (TokenKind::Number, "42"),
                (TokenKind::Plain, ";"),
            ]
        );
    }

    #[test]
    fn test_protected_spans_skip_secondary() {
        let lang = create_test_language();
        let tokens = lang.tokenize("x = \"let 1\" // if 2\nif");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Plain, "x = "),
                (TokenKind::String, "\"let 1\""),
                (TokenKind::Plain, " "),
                (TokenKind::Comment, "// if 2"),
                (TokenKind::Plain, "\n"),
                (TokenKind::Keyword, "if"),
            ]
        );
    }

    #[test]
    fn test_tokens_cover_input() {
        let lang = create_test_language();
        let text = "a \"b\" // c\nlet d = 3 \"unterminated";
        let tokens = lang.tokenize(text);
        assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), text);
        let mut pos = 0;
        for token in &tokens {
            assert_eq!(token.start, pos);
            pos = token.end;
        }
        assert_eq!(pos, text.len());
    }

    #[test]
    fn test_empty_input() {
        let lang = create_test_language();
        assert!(lang.tokenize("").is_empty());
    }

    #[test]
    fn test_empty_matches_do_not_stall() {
        let lang = Grammar::builder("lazy")
            .string(r"x*")
            .build()
            .unwrap();
        let text = "abxxé";
        let tokens = lang.tokenize(text);
        assert_eq!(tokens.iter().map(|t| t.text).collect::<String>(), text);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::String && t.text == "xx"));
    }

    #[test]
    fn test_no_protected_pattern() {
        let lang = Grammar::builder("plainish")
            .keywords(r"\bSELECT\b")
            .build()
            .unwrap();
        assert!(!lang.has_protected());
        let tokens = lang.tokenize("SELECT 'x'");
        assert_eq!(tokens[0].kind, TokenKind::Keyword);
        assert_eq!(tokens[1].text, " 'x'");
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = Grammar::builder("bad").keywords(r"(unclosed").build();
        assert!(matches!(result, Err(GrammarError::InvalidPattern { .. })));
    }

    #[test]
    fn test_empty_name_is_an_error() {
        let result = Grammar::builder("  ").build();
        assert!(matches!(result, Err(GrammarError::EmptyIdentifier)));
    }
}
