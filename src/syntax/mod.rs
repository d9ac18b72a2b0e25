//! Syntax highlighting engine
//!
//! This module provides the pieces the highlighter is built from:
//! - Grammar descriptors and the table that resolves them by language
//! - The protected-span scan and secondary classification
//! - Markup tag decomposition
//! - Escaping and markup rendering

mod builtin;
mod escape;
mod language;
mod manager;
mod markup;
mod rules;
mod secondary;
mod tag;
mod tokens;

pub use escape::escape_html;
pub use language::{Grammar, GrammarBuilder};
pub use manager::GrammarTable;
pub use markup::{render, render_token};
pub use tag::{Attribute, TagStructure};
pub use tokens::{SecondaryKind, SpanKind, Token, TokenKind};
