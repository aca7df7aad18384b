#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};
use crate::tokens::tokens::Token;

pub mod ast;
pub mod errors;
pub mod parser;
pub mod tokens;

/// Byte offset of the caret for `position` when the token sequence is
/// rendered as a single space-separated line.
fn caret_offset(tokens: &[Token], position: usize) -> usize {
    tokens[..position.min(tokens.len())]
        .iter()
        .map(|token| token.to_string().len() + 1)
        .sum()
}


pub fn display_error(error: Error, tokens: &[Token]) {
    /*
        Error: TokenMismatch (expected `Semicolon`, received `RightParen`)
        -> token 4
           | Println LeftParen Integer(1) RightParen RightParen
           |                                         ^
    */

    let position = error.get_position();

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> token {}", position);

    let rendered: Vec<String> = tokens.iter().map(|token| token.to_string()).collect();
    println!("   | {}", rendered.join(" "));
    println!("   | {}^", " ".repeat(caret_offset(tokens, position)));
}
