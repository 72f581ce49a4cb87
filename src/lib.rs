#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

use crate::lexer::tokens::TokenStream;

/// Renders a token stream as display lines, one token per line, preserving
/// stream order. Writing the result to a console is the caller's concern.
pub fn render_tokens(tokens: &TokenStream) -> String {
    let mut output = String::new();

    for token in tokens {
        output.push_str(&token.to_string());
        output.push('\n');
    }

    output
}
