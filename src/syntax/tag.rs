//! Markup tag decomposition
//!
//! A tag matched by a markup grammar is broken into its marker, name,
//! attributes and trailer so each piece can be styled on its own.
//! Every piece borrows from the raw tag text, and laying the pieces
//! end to end reproduces it exactly.

use once_cell::sync::Lazy;
use regex::Regex;

use super::tokens::{Token, TokenKind};

static TAG_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A(</?)([a-zA-Z][a-zA-Z0-9-]*)").expect("tag name pattern is valid")
});

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\A(\s+)([a-zA-Z-]+)(?:(\s*=\s*)("[^"]*"|'[^']*'))?"#)
        .expect("attribute pattern is valid")
});

/// One attribute inside a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub leading_whitespace: &'a str,
    pub name: &'a str,
    /// The `=` with any surrounding whitespace
    pub equals: Option<&'a str>,
    /// The value including its quotes
    pub value: Option<&'a str>,
}

impl Attribute<'_> {
    /// Quote character wrapping the value, if there is one
    pub fn quote(&self) -> Option<char> {
        self.value.and_then(|v| v.chars().next())
    }
}

/// A decomposed markup tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStructure<'a> {
    /// `<` or `</`
    pub marker: &'a str,
    pub name: &'a str,
    pub attributes: Vec<Attribute<'a>>,
    /// Whatever follows the last attribute, usually `>` or `/>`
    pub trailer: &'a str,
}

impl<'a> TagStructure<'a> {
    /// Decompose a raw tag, or `None` if it does not start with a marker and name
    pub fn parse(raw: &'a str) -> Option<Self> {
        let head = TAG_NAME.captures(raw)?;
        let marker = head.get(1)?.as_str();
        let name = head.get(2)?.as_str();
        let mut rest = &raw[head.get(0)?.end()..];

        let mut attributes = Vec::new();
        while let Some(caps) = ATTRIBUTE.captures(rest) {
            let (Some(whole), Some(ws), Some(attr_name)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                break;
            };
            attributes.push(Attribute {
                leading_whitespace: ws.as_str(),
                name: attr_name.as_str(),
                equals: caps.get(3).map(|m| m.as_str()),
                value: caps.get(4).map(|m| m.as_str()),
            });
            rest = &rest[whole.end()..];
        }

        Some(Self {
            marker,
            name,
            attributes,
            trailer: rest,
        })
    }

    /// Tokens for this tag, with offsets shifted so the tag starts at `offset`
    pub fn tokens(&self, offset: usize) -> Vec<Token<'a>> {
        let mut tokens = Vec::with_capacity(2 + self.attributes.len() * 4 + 1);
        let mut pos = offset;
        let mut push = |kind: TokenKind, text: &'a str| {
            if !text.is_empty() {
                tokens.push(Token {
                    kind,
                    start: pos,
                    end: pos + text.len(),
                    text,
                });
                pos += text.len();
            }
        };

        push(TokenKind::Plain, self.marker);
        push(TokenKind::Tag, self.name);
        for attr in &self.attributes {
            push(TokenKind::Plain, attr.leading_whitespace);
            push(TokenKind::AttributeName, attr.name);
            if let (Some(equals), Some(value)) = (attr.equals, attr.value) {
                push(TokenKind::Plain, equals);
                push(TokenKind::AttributeValue, value);
            }
        }
        push(TokenKind::Plain, self.trailer);

        tokens
    }
}

/// Tokens for a raw tag starting at `offset`
///
/// Text that does not decompose becomes a single plain token, so it is
/// still escaped on output.
pub fn tag_tokens(raw: &str, offset: usize) -> Vec<Token<'_>> {
    match TagStructure::parse(raw) {
        Some(tag) => tag.tokens(offset),
        None => {
            tracing::trace!(len = raw.len(), "tag did not decompose, emitting as plain text");
            if raw.is_empty() {
                return Vec::new();
            }
            vec![Token {
                kind: TokenKind::Plain,
                start: offset,
                end: offset + raw.len(),
                text: raw,
            }]
        }
    }
}
