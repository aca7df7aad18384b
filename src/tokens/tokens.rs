use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single lexical unit of a minilang program.
///
/// Tokens are pure values: equality is structural (two `Variable` tokens
/// are equal iff their names match, two `Integer` tokens iff their values
/// match, marker tokens iff they are the same variant). The serde derives
/// define the on-disk encoding the harness reads, e.g.
/// `["Println", "LeftParen", {"Integer": 1}, "RightParen", "Semicolon"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Plus,
    Minus,
    LessThan,
    Equals,

    LeftParen,
    RightParen,
    LeftCurly,
    RightCurly,
    Semicolon,

    // Reserved
    If,
    Else,
    Println,

    Variable(String),
    Integer(i64),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Token {
    /// Shorthand for a `Variable` token.
    pub fn variable(name: &str) -> Token {
        Token::Variable(String::from(name))
    }
}
