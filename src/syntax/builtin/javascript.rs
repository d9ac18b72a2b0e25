//! JavaScript grammar

use super::{BLOCK_COMMENT, QUOTED_STRING, SINGLE_QUOTED_STRING};
use crate::error::Result;
use crate::syntax::language::Grammar;

const KEYWORDS: &str = r"\b(async|await|break|case|catch|class|const|continue|debugger|default|delete|do|else|export|extends|finally|for|from|function|get|if|import|in|instanceof|let|new|of|return|set|static|super|switch|this|throw|try|typeof|var|void|while|with|yield)\b";

const BUILTINS: &str = r"\b(true|false|null|undefined|NaN|Infinity|console|window|document|Math|JSON|Array|Object|String|Number|Boolean|Date|RegExp|Map|Set|Promise|Error|Symbol|parseInt|parseFloat|require|module|exports)\b";

const NUMBERS: &str = r"\b(\d+\.?\d*(?:e[+-]?\d+)?|0x[0-9a-fA-F]+|0b[01]+|0o[0-7]+)\b";

/// Regex literal: cannot open with `/` or `*`, which would make it a comment
const REGEX_LITERAL: &str = r"/(?:\\.|\[(?:\\.|[^\]\\\n])*\]|[^/*\\\n])(?:\\.|\[(?:\\.|[^\]\\\n])*\]|[^/\\\n])*/[gimsuvy]*";

/// Create JavaScript grammar
pub fn javascript_language() -> Result<Grammar> {
    Grammar::builder("javascript")
        .alias("js")
        .comment(&format!(r"//[^\n]*|{}", BLOCK_COMMENT))
        .string(QUOTED_STRING)
        .string(SINGLE_QUOTED_STRING)
        .string(r"`(?:[^`\\]|\\[\s\S])*`")
        .string(REGEX_LITERAL)
        .keywords(KEYWORDS)
        .builtins(BUILTINS)
        .numbers(NUMBERS)
        .build()
}
