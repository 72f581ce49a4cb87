//! Integration tests for end-to-end scanning and rendering.
//!
//! These tests verify that the complete pipeline works through the public
//! API, from raw input text to the rendered token listing.

use lexical_analyzer::lexer::lexer::scan;
use lexical_analyzer::lexer::tokens::Category;
use lexical_analyzer::render_tokens;

#[test]
fn test_scan_and_render_statement() {
    let rendered = render_tokens(&scan("if x = 5"));

    assert_eq!(
        rendered,
        "<Token: '5', Categoria: int>\n\
         <Token: 'if', Categoria: identifier>\n\
         <Token: 'x', Categoria: identifier>\n\
         <Token: 'if', Categoria: keyword>\n\
         <Token: '=', Categoria: symbol>\n"
    );
}

#[test]
fn test_scan_and_render_float_literal() {
    let rendered = render_tokens(&scan("3.14"));

    assert_eq!(
        rendered,
        "<Token: '3', Categoria: int>\n\
         <Token: '14', Categoria: int>\n\
         <Token: '3.14', Categoria: float>\n"
    );
}

#[test]
fn test_scan_and_render_multiline_program() {
    let rendered = render_tokens(&scan("int x = 1\nx = x + 2"));

    assert_eq!(
        rendered,
        "<Token: '1', Categoria: int>\n\
         <Token: 'int', Categoria: identifier>\n\
         <Token: 'x', Categoria: identifier>\n\
         <Token: 'int', Categoria: keyword>\n\
         <Token: '=', Categoria: symbol>\n\
         <Token: '2', Categoria: int>\n\
         <Token: 'x', Categoria: identifier>\n\
         <Token: 'x', Categoria: identifier>\n\
         <Token: '=', Categoria: symbol>\n\
         <Token: '+', Categoria: symbol>\n"
    );
}

#[test]
fn test_scan_quoted_text_keeps_quotes_in_string_token() {
    let tokens = scan("\"hello world\"");

    let string_tokens: Vec<_> = tokens
        .iter()
        .filter(|token| token.category == Category::String)
        .collect();

    assert_eq!(string_tokens.len(), 1);
    assert_eq!(string_tokens[0].text, "\"hello world\"");
}

#[test]
fn test_render_of_empty_scan_is_empty() {
    assert_eq!(render_tokens(&scan("")), "");
}
