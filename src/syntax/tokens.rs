//! Token types for syntax highlighting
//!
//! This module defines the classification kinds attached to highlighted
//! text and the transient tokens produced by a single highlight pass.

/// Classification kinds for highlighted text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Comments (`// ...`, `/* ... */`, `<!-- ... -->`, `-- ...`)
    Comment,
    /// String, template and regex literals
    String,
    /// Markup tag names
    Tag,
    /// Language keywords
    Keyword,
    /// Built-in identifiers (`true`, `console`, `Math`, ...)
    Builtin,
    /// Numeric literals, including any trailing unit
    Number,
    /// CSS selectors
    Selector,
    /// CSS property names
    Property,
    /// Markup attribute names
    AttributeName,
    /// Markup attribute values, quotes included
    AttributeValue,
    /// Unclassified text
    Plain,
}

impl TokenKind {
    /// Get the class attribute value used when wrapping this kind
    ///
    /// This vocabulary is what stylesheets key on. `Plain` text is never
    /// wrapped. Built-ins share the keyword class and selectors use
    /// `function-name`.
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            TokenKind::Comment => Some("comment"),
            TokenKind::String => Some("string"),
            TokenKind::Tag => Some("tag"),
            TokenKind::Keyword => Some("keyword"),
            TokenKind::Builtin => Some("keyword"),
            TokenKind::Number => Some("number"),
            TokenKind::Selector => Some("function-name"),
            TokenKind::Property => Some("property"),
            TokenKind::AttributeName => Some("attr-name"),
            TokenKind::AttributeValue => Some("attr-value"),
            TokenKind::Plain => None,
        }
    }

    /// Get a human-readable name for this kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Comment => "Comment",
            TokenKind::String => "String",
            TokenKind::Tag => "Tag",
            TokenKind::Keyword => "Keyword",
            TokenKind::Builtin => "Builtin",
            TokenKind::Number => "Number",
            TokenKind::Selector => "Selector",
            TokenKind::Property => "Property",
            TokenKind::AttributeName => "AttributeName",
            TokenKind::AttributeValue => "AttributeValue",
            TokenKind::Plain => "Plain",
        }
    }
}

/// Which alternative of a protected-span pattern fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Comment,
    String,
    /// A whole markup tag, decomposed before rendering
    Tag,
}

impl SpanKind {
    /// Parse a span kind from its configuration name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "comment" => Some(SpanKind::Comment),
            "string" => Some(SpanKind::String),
            "tag" => Some(SpanKind::Tag),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpanKind::Comment => "comment",
            SpanKind::String => "string",
            SpanKind::Tag => "tag",
        }
    }
}

/// Secondary classification kinds, applied to text outside protected spans
///
/// The declaration order is the order passes run in: selectors and
/// properties claim their text before keywords, built-ins and numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecondaryKind {
    Selector,
    Property,
    Keyword,
    Builtin,
    Number,
}

impl SecondaryKind {
    /// All kinds, in pass order
    pub const ALL: [SecondaryKind; 5] = [
        SecondaryKind::Selector,
        SecondaryKind::Property,
        SecondaryKind::Keyword,
        SecondaryKind::Builtin,
        SecondaryKind::Number,
    ];

    /// Parse a secondary kind from its configuration name (singular or plural)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "selector" | "selectors" => Some(SecondaryKind::Selector),
            "property" | "properties" => Some(SecondaryKind::Property),
            "keyword" | "keywords" => Some(SecondaryKind::Keyword),
            "builtin" | "builtins" => Some(SecondaryKind::Builtin),
            "number" | "numbers" => Some(SecondaryKind::Number),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SecondaryKind::Selector => "selector",
            SecondaryKind::Property => "property",
            SecondaryKind::Keyword => "keyword",
            SecondaryKind::Builtin => "builtin",
            SecondaryKind::Number => "number",
        }
    }

    /// The token kind produced by matches of this pass
    pub fn token_kind(&self) -> TokenKind {
        match self {
            SecondaryKind::Selector => TokenKind::Selector,
            SecondaryKind::Property => TokenKind::Property,
            SecondaryKind::Keyword => TokenKind::Keyword,
            SecondaryKind::Builtin => TokenKind::Builtin,
            SecondaryKind::Number => TokenKind::Number,
        }
    }
}

/// A classified slice of the input
///
/// Tokens for one pass are contiguous and non-overlapping; concatenating
/// their text reproduces the input exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Byte offset where this token starts (inclusive)
    pub start: usize,
    /// Byte offset where this token ends (exclusive)
    pub end: usize,
    /// The raw, unescaped text
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a token covering `source[start..end]`
    pub fn new(kind: TokenKind, source: &'a str, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            text: &source[start..end],
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}
