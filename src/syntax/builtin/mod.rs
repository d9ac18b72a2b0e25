//! Built-in grammars
//!
//! This module provides highlighting grammars for the languages a code
//! editing surface is expected to handle out of the box.

mod css;
mod html;
mod javascript;
mod json;
mod sql;

use super::language::Grammar;
use crate::error::Result;

/// Double and single quoted strings that end at the line
pub(crate) const QUOTED_STRING: &str = r#""(?:[^"\\\n]|\\.)*""#;
pub(crate) const SINGLE_QUOTED_STRING: &str = r"'(?:[^'\\\n]|\\.)*'";

/// `/* ... */`
pub(crate) const BLOCK_COMMENT: &str = r"/\*[\s\S]*?\*/";

/// Constructors for every built-in grammar
const BUILTINS: [fn() -> Result<Grammar>; 5] = [
    javascript::javascript_language,
    json::json_language,
    html::html_language,
    css::css_language,
    sql::sql_language,
];

/// Get all built-in grammars
pub fn all_languages() -> Vec<Grammar> {
    BUILTINS
        .iter()
        .filter_map(|build| match build() {
            Ok(grammar) => Some(grammar),
            Err(err) => {
                tracing::error!(%err, "built-in grammar failed to compile");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_compiles() {
        for build in BUILTINS {
            if let Err(err) = build() {
                panic!("built-in grammar failed: {}", err);
            }
        }
        assert_eq!(all_languages().len(), BUILTINS.len());
    }
}
