//! JSON grammar
//!
//! Comments are accepted so JSONC-style configuration files highlight too.

use super::BLOCK_COMMENT;
use crate::error::Result;
use crate::syntax::language::Grammar;

/// Create JSON grammar
pub fn json_language() -> Result<Grammar> {
    Grammar::builder("json")
        .comment(&format!(r"//[^\n]*|{}", BLOCK_COMMENT))
        .string(r#""(?:[^"\\]|\\.)*""#)
        .keywords(r"\b(true|false|null)\b")
        .numbers(r"-?\b\d+\.?\d*(?:e[+-]?\d+)?\b")
        .build()
}
