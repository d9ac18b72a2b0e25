//! Highlighting entry points
//!
//! `highlight` is a pure `text -> markup` function: hosts call it on first
//! display and again whenever the text changes, then apply the returned
//! fragment to whatever surface they own.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::syntax::{escape_html, render, Grammar, GrammarTable, Token, TokenKind};

/// Language used when a host does not name one
pub const DEFAULT_LANGUAGE: &str = "javascript";

static BUILTIN_TABLE: Lazy<Arc<GrammarTable>> = Lazy::new(|| Arc::new(GrammarTable::builtin()));

/// The shared table of built-in grammars
pub fn builtin_table() -> Arc<GrammarTable> {
    Arc::clone(&BUILTIN_TABLE)
}

/// Highlight `text` as `language` using the built-in grammars
///
/// Unknown languages fall back to plain escaping. Never fails.
pub fn highlight(text: &str, language: &str) -> String {
    BUILTIN_TABLE.highlight(text, language)
}

/// Tokenize `text` as `language` using the built-in grammars
pub fn tokenize<'a>(text: &'a str, language: &str) -> Vec<Token<'a>> {
    BUILTIN_TABLE.tokenize(text, language)
}

fn highlight_grammar(grammar: Option<&Grammar>, text: &str) -> String {
    match grammar {
        Some(grammar) => render(&grammar.tokenize(text)),
        None => escape_html(text),
    }
}

fn tokenize_grammar<'a>(grammar: Option<&Grammar>, text: &'a str) -> Vec<Token<'a>> {
    match grammar {
        Some(grammar) => grammar.tokenize(text),
        None if text.is_empty() => Vec::new(),
        None => vec![Token::new(TokenKind::Plain, text, 0, text.len())],
    }
}

impl GrammarTable {
    /// Highlight `text` with the grammar `language` resolves to
    pub fn highlight(&self, text: &str, language: &str) -> String {
        let grammar = self.resolve(language);
        if grammar.is_none() {
            tracing::trace!(%language, "no grammar, escaping only");
        }
        highlight_grammar(grammar.map(Arc::as_ref), text)
    }

    /// Tokenize `text` with the grammar `language` resolves to
    ///
    /// Unknown languages yield a single plain token.
    pub fn tokenize<'a>(&self, text: &'a str, language: &str) -> Vec<Token<'a>> {
        tokenize_grammar(self.resolve(language).map(Arc::as_ref), text)
    }
}

/// Anything that can turn text into highlighted markup
///
/// Hosts hold a `Box<dyn Highlight>` so a custom highlighter can replace
/// the built-in one.
pub trait Highlight {
    fn highlight(&self, text: &str) -> String;
}

impl<F> Highlight for F
where
    F: Fn(&str) -> String,
{
    fn highlight(&self, text: &str) -> String {
        self(text)
    }
}

/// A highlighter bound to one language
#[derive(Clone)]
pub struct Highlighter {
    table: Arc<GrammarTable>,
    language: String,
    grammar: Option<Arc<Grammar>>,
}

impl Highlighter {
    /// Create a highlighter over the built-in grammars
    ///
    /// With no language given, [`DEFAULT_LANGUAGE`] is used.
    pub fn new(language: Option<&str>) -> Self {
        Self::with_table(builtin_table(), language.unwrap_or(DEFAULT_LANGUAGE))
    }

    /// Create a highlighter over a specific grammar table
    pub fn with_table(table: Arc<GrammarTable>, language: &str) -> Self {
        let grammar = table.resolve(language).cloned();
        Self {
            table,
            language: language.to_string(),
            grammar,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the current language has a grammar
    pub fn is_known(&self) -> bool {
        self.grammar.is_some()
    }

    /// Switch to another language
    pub fn set_language(&mut self, language: &str) {
        tracing::debug!(from = %self.language, to = %language, "switching highlight language");
        self.grammar = self.table.resolve(language).cloned();
        self.language = language.to_string();
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        tokenize_grammar(self.grammar.as_deref(), text)
    }
}

impl Highlight for Highlighter {
    fn highlight(&self, text: &str) -> String {
        highlight_grammar(self.grammar.as_deref(), text)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(None)
    }
}
