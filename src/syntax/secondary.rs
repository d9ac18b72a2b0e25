//! Secondary classification of free text
//!
//! Free text is the text between protected spans. It is escaped first and
//! the grammar's secondary patterns run over the escaped form, one pass per
//! kind in pass order. A pass may only claim text no earlier pass claimed,
//! and never a region that starts or ends inside an entity.

use std::collections::BTreeMap;
use std::ops::Range;

use super::escape::EscapedText;
use super::rules::SecondaryPattern;
use super::tokens::{Token, TokenKind};

/// Regions of escaped text claimed so far, keyed by start
struct Claims {
    ranges: BTreeMap<usize, (usize, TokenKind)>,
}

impl Claims {
    fn new() -> Self {
        Self {
            ranges: BTreeMap::new(),
        }
    }

    fn overlaps(&self, range: &Range<usize>) -> bool {
        self.ranges
            .range(..range.end)
            .next_back()
            .is_some_and(|(_, (end, _))| *end > range.start)
    }

    fn claim(&mut self, range: Range<usize>, kind: TokenKind) {
        self.ranges.insert(range.start, (range.end, kind));
    }
}

/// Classify `raw`, a run of free text found at `offset` in the input
pub fn classify<'a>(raw: &'a str, offset: usize, patterns: &[SecondaryPattern]) -> Vec<Token<'a>> {
    if raw.is_empty() {
        return Vec::new();
    }
    if patterns.is_empty() {
        return vec![token(TokenKind::Plain, raw, offset, 0, raw.len())];
    }

    let escaped = EscapedText::new(raw);
    let mut claims = Claims::new();

    for pattern in patterns {
        let kind = pattern.kind.token_kind();
        for range in pattern.find_iter(escaped.as_str()) {
            if escaped.splits_entity(range.start) || escaped.splits_entity(range.end) {
                continue;
            }
            if claims.overlaps(&range) {
                continue;
            }
            claims.claim(range, kind);
        }
    }

    let mut tokens = Vec::with_capacity(claims.ranges.len() * 2 + 1);
    let mut pos = 0;
    for (start, (end, kind)) in claims.ranges {
        let start = escaped.raw_offset(start);
        let end = escaped.raw_offset(end);
        if start > pos {
            tokens.push(token(TokenKind::Plain, raw, offset, pos, start));
        }
        tokens.push(token(kind, raw, offset, start, end));
        pos = end;
    }
    if pos < raw.len() {
        tokens.push(token(TokenKind::Plain, raw, offset, pos, raw.len()));
    }

    tokens
}

fn token(kind: TokenKind, raw: &str, offset: usize, start: usize, end: usize) -> Token<'_> {
    Token {
        kind,
        start: offset + start,
        end: offset + end,
        text: &raw[start..end],
    }
}
