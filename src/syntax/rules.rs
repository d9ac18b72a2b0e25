//! Pattern rules for syntax highlighting
//!
//! This module defines the two rule types a grammar is built from: the
//! protected-span pattern that carves out comments, strings and tags, and
//! the secondary patterns that classify the free text in between.
//!
//! Rules are plain compiled regexes. They hold no scan position; callers
//! pass the offset to search from on every call.

use std::ops::Range;

use regex::Regex;

use super::tokens::{SecondaryKind, SpanKind};
use crate::error::{GrammarError, Result};

/// Capture group that narrows a secondary match to the part to wrap
pub const VALUE_GROUP: &str = "value";

fn compile(language: &str, rule: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| GrammarError::InvalidPattern {
        language: language.to_string(),
        rule: rule.to_string(),
        source,
    })
}

/// A match of the protected-span pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectedMatch {
    /// Which alternative fired
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl ProtectedMatch {
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An ordered alternation of comment, string and tag patterns
///
/// Each alternative is compiled into its own named group so a match
/// reports which alternative fired instead of relying on group numbering.
pub struct ProtectedPattern {
    regex: Regex,
    /// Group name and kind of each alternative, in declaration order
    alternatives: Vec<(String, SpanKind)>,
}

impl ProtectedPattern {
    /// Compile the alternation. Earlier alternatives win ties at the same offset.
    pub fn new(language: &str, alternatives: &[(SpanKind, String)]) -> Result<Self> {
        let mut combined = String::new();
        let mut groups = Vec::with_capacity(alternatives.len());

        for (i, (kind, pattern)) in alternatives.iter().enumerate() {
            // Validate alone first so the error names the offending alternative
            compile(language, &format!("{} alternative {}", kind.name(), i), pattern)?;

            let group = format!("protected{}", i);
            if !combined.is_empty() {
                combined.push('|');
            }
            combined.push_str(&format!("(?P<{}>{})", group, pattern));
            groups.push((group, *kind));
        }

        Ok(Self {
            regex: compile(language, "protected", &combined)?,
            alternatives: groups,
        })
    }

    /// Find the leftmost protected span starting at or after `start`
    pub fn find_at(&self, text: &str, start: usize) -> Option<ProtectedMatch> {
        if start > text.len() {
            return None;
        }
        let caps = self.regex.captures_at(text, start)?;
        let whole = caps.get(0)?;
        let kind = self
            .alternatives
            .iter()
            .find(|(group, _)| caps.name(group).is_some())
            .map(|(_, kind)| *kind)
            .unwrap_or(SpanKind::String);

        Some(ProtectedMatch {
            kind,
            start: whole.start(),
            end: whole.end(),
        })
    }

    /// Whether any alternative denotes a whole tag
    pub fn has_tags(&self) -> bool {
        self.alternatives.iter().any(|(_, kind)| *kind == SpanKind::Tag)
    }
}

/// A single secondary classification rule
///
/// If the pattern has a `value` group only that group is wrapped and the
/// rest of the match stays plain; otherwise the whole match is wrapped.
pub struct SecondaryPattern {
    pub kind: SecondaryKind,
    regex: Regex,
}

impl SecondaryPattern {
    pub fn new(language: &str, kind: SecondaryKind, pattern: &str) -> Result<Self> {
        Ok(Self {
            kind,
            regex: compile(language, kind.name(), pattern)?,
        })
    }

    /// Ranges to wrap, left to right, non-overlapping and non-empty
    pub fn find_iter<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.regex.captures_iter(text).filter_map(|caps| {
            let m = caps.name(VALUE_GROUP).or_else(|| caps.get(0))?;
            (!m.range().is_empty()).then(|| m.range())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn js_like() -> ProtectedPattern {
        ProtectedPattern::new(
            "test",
            &[
                (SpanKind::Comment, r"//[^\n]*".to_string()),
                (SpanKind::String, r#""(?:[^"\\\n]|\\.)*""#.to_string()),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_protected_reports_alternative() {
        let pattern = js_like();
        let text = r#"x = "a"; // done"#;

        let first = pattern.find_at(text, 0).unwrap();
        assert_eq!(first.kind, SpanKind::String);
        assert_eq!(&text[first.start..first.end], "\"a\"");

        let second = pattern.find_at(text, first.end).unwrap();
        assert_eq!(second.kind, SpanKind::Comment);
        assert_eq!(&text[second.start..second.end], "// done");

        assert_eq!(pattern.find_at(text, second.end), None);
    }

    #[test]
    fn test_protected_has_no_carried_state() {
        let pattern = js_like();
        let text = "// one";
        assert_eq!(pattern.find_at(text, 0), pattern.find_at(text, 0));
        assert!(!pattern.has_tags());
    }

    #[test]
    fn test_inner_groups_do_not_shift_kinds() {
        let pattern = ProtectedPattern::new(
            "test",
            &[
                (SpanKind::Comment, r"(#)(.*)".to_string()),
                (SpanKind::Tag, r"<(\w+)>".to_string()),
            ],
        )
        .unwrap();
        let found = pattern.find_at("<b>", 0).unwrap();
        assert_eq!(found.kind, SpanKind::Tag);
        assert!(pattern.has_tags());
    }

    #[test]
    fn test_invalid_alternative_is_named() {
        let err = ProtectedPattern::new("broken", &[(SpanKind::String, "(".to_string())])
            .err()
            .unwrap();
        let message = err.to_string();
        assert!(message.contains("broken"));
        assert!(message.contains("string alternative 0"));
    }

    #[test]
    fn test_secondary_value_group() {
        let rule = SecondaryPattern::new(
            "css",
            SecondaryKind::Property,
            r"\b(?P<value>[a-zA-Z-]+)\s*:",
        )
        .unwrap();
        let text = "color : red; margin:0";
        let ranges: Vec<_> = rule.find_iter(text).map(|r| &text[r]).collect();
        assert_eq!(ranges, vec!["color", "margin"]);
    }

    #[test]
    fn test_secondary_whole_match() {
        let rule = SecondaryPattern::new("css", SecondaryKind::Number, r"\b\d+(px|em)?\b").unwrap();
        let text = "10px 2em 3";
        let ranges: Vec<_> = rule.find_iter(text).map(|r| &text[r]).collect();
        assert_eq!(ranges, vec!["10px", "2em", "3"]);
    }
}
