//! markup-highlight - regex-driven, HTML-safe syntax highlighting
//!
//! Raw source text goes in, an escaped HTML fragment with
//! `<span class="...">` wrappers comes out. Comments, strings and markup
//! tags are carved out first; keywords, built-ins, numbers, selectors and
//! properties are classified only in the text between them.
//!
//! ```
//! use markup_highlight::highlight;
//!
//! let html = highlight("const x = 42;", "javascript");
//! assert!(html.contains("<span class=\"keyword\">const</span>"));
//! assert!(html.contains("<span class=\"number\">42</span>"));
//! ```

pub mod config;
pub mod error;
pub mod highlighter;
pub mod syntax;

pub use config::HighlighterConfig;
pub use error::{GrammarError, Result};
pub use highlighter::{builtin_table, highlight, tokenize, Highlight, Highlighter, DEFAULT_LANGUAGE};
pub use syntax::{escape_html, Grammar, GrammarTable, Token, TokenKind};
