//! SQL grammar

use super::{BLOCK_COMMENT, QUOTED_STRING, SINGLE_QUOTED_STRING};
use crate::error::Result;
use crate::syntax::language::Grammar;

const KEYWORDS: &str = r"(?i)\b(SELECT|FROM|WHERE|AND|OR|INSERT|INTO|VALUES|UPDATE|SET|DELETE|CREATE|TABLE|DROP|ALTER|ADD|COLUMN|INDEX|JOIN|LEFT|RIGHT|INNER|OUTER|ON|AS|ORDER|BY|GROUP|HAVING|LIMIT|OFFSET|UNION|ALL|DISTINCT|COUNT|SUM|AVG|MIN|MAX|NOT|NULL|IS|IN|BETWEEN|LIKE|EXISTS|CASE|WHEN|THEN|ELSE|END|PRIMARY|KEY|FOREIGN|REFERENCES|CONSTRAINT|DEFAULT|CHECK|UNIQUE|CASCADE|GRANT|REVOKE|COMMIT|ROLLBACK|BEGIN|TRANSACTION|INT|VARCHAR|DATETIME|AUTO_INCREMENT|CURRENT_TIMESTAMP)\b";

/// Create SQL grammar
pub fn sql_language() -> Result<Grammar> {
    Grammar::builder("sql")
        .comment(&format!(r"--[^\n]*|{}", BLOCK_COMMENT))
        .string(QUOTED_STRING)
        .string(SINGLE_QUOTED_STRING)
        .keywords(KEYWORDS)
        .numbers(r"\b\d+\.?\d*\b")
        .build()
}
