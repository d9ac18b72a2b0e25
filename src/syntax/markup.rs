//! Markup rendering
//!
//! Turns a token stream into an HTML fragment. Every token's text is
//! escaped exactly once; classified tokens are wrapped in a
//! `<span class="...">` carrying their kind's class name.

use super::escape::push_escaped;
use super::tokens::Token;

/// Render one token as a markup fragment
pub fn render_token(token: &Token) -> String {
    let mut out = String::with_capacity(token.text.len() + 32);
    match token.kind.class_name() {
        Some(class) => {
            out.push_str("<span class=\"");
            out.push_str(class);
            out.push_str("\">");
            push_escaped(&mut out, token.text);
            out.push_str("</span>");
        }
        None => push_escaped(&mut out, token.text),
    }
    out
}

/// Render a token stream, joining the fragments in order
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(render_token).collect::<Vec<_>>().concat()
}
