//! HTML grammar
//!
//! Whole tags are protected spans; they are decomposed into tag name,
//! attribute names and attribute values afterwards.

use super::{QUOTED_STRING, SINGLE_QUOTED_STRING};
use crate::error::Result;
use crate::syntax::language::Grammar;

const TAG: &str = r#"</?[a-zA-Z][a-zA-Z0-9-]*(?:\s+[a-zA-Z-]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s>]*))?)*\s*/?>"#;

/// Create HTML grammar
pub fn html_language() -> Result<Grammar> {
    Grammar::builder("html")
        .alias("htm")
        .comment(r"<!--[\s\S]*?-->")
        .string(QUOTED_STRING)
        .string(SINGLE_QUOTED_STRING)
        .tag(TAG)
        .build()
}
