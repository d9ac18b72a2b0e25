//! CSS grammar
//!
//! Secondary patterns match escaped text, so the child combinator is
//! written as `&gt;`.

use super::{BLOCK_COMMENT, QUOTED_STRING, SINGLE_QUOTED_STRING};
use crate::error::Result;
use crate::syntax::language::Grammar;

const SELECTORS: &str = r"(?P<value>[.#]?[a-zA-Z_][\w-]*(?:\s*(?:&gt;|[+~])\s*[.#]?[a-zA-Z_][\w-]*)*)\s*\{";

const PROPERTIES: &str = r"\b(?P<value>[a-zA-Z-]+)\s*:";

/// Numbers keep their unit inside the same span
const NUMBERS: &str = r"\b\d+\.?\d*(?:(?:px|rem|em|vh|vw|ms|s|deg|fr)\b|%|\b)";

const KEYWORDS: &str = r"\b(important|inherit|initial|unset|none|auto|block|inline|flex|grid)\b";

/// Create CSS grammar
pub fn css_language() -> Result<Grammar> {
    Grammar::builder("css")
        .comment(BLOCK_COMMENT)
        .string(QUOTED_STRING)
        .string(SINGLE_QUOTED_STRING)
        .selectors(SELECTORS)
        .properties(PROPERTIES)
        .numbers(NUMBERS)
        .keywords(KEYWORDS)
        .build()
}
