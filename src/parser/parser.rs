//! Parser context and the position-based parsing contract.
//!
//! This module contains the main Parser struct, the success carrier for
//! parse results, and the top-level entry point. The parser holds the
//! token sequence immutably; there is no internal cursor. Each parsing
//! function receives the position it starts at and reports the position
//! of the next unconsumed token in its result, so a caller can chain
//! productions by plain position arithmetic and can abandon a speculative
//! sub-parse by simply discarding its result.

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::Token,
};

use super::stmt::parse_program;

/// Success half of a parse: the parsed value plus the position of the
/// next unconsumed token.
///
/// Invariant: `next_position` is never less than the position the parse
/// started at and never greater than the token-sequence length.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<A> {
    pub value: A,
    pub next_position: usize,
}

impl<A> Parsed<A> {
    pub fn new(value: A, next_position: usize) -> Self {
        Parsed {
            value,
            next_position,
        }
    }
}

/// Result type shared by every parsing function.
pub type ParseResult<A> = Result<Parsed<A>, Error>;

/// The parser context: the token sequence every production reads from.
///
/// The sequence is never mutated or reordered after construction. All
/// cursor state lives in the positions threaded through the parsing
/// functions, which keeps speculative attempts free of cleanup work.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
}

impl Parser {
    /// Creates a new Parser instance over a finished token sequence.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens }
    }

    /// Number of tokens in the sequence.
    pub fn num_tokens(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the token at `position`.
    ///
    /// This is the only primitive that inspects the token sequence; the
    /// parsing functions above it are expressed purely in terms of
    /// position arithmetic. Reading is side-effect free, so two calls at
    /// the same position always return equal tokens.
    ///
    /// # Returns
    ///
    /// Returns Ok(&Token) when the position is in bounds, otherwise an
    /// InvalidPosition error at that position.
    pub fn token_at(&self, position: usize) -> Result<&Token, Error> {
        self.tokens
            .get(position)
            .ok_or_else(|| Error::new(ErrorImpl::InvalidPosition { position }, position))
    }

    /// Checks that the token at `position` structurally equals `expected`.
    ///
    /// Performs no cursor advance itself; callers advance past the
    /// checked token explicitly. All "must be exactly this token" checks
    /// (parentheses, braces, semicolons, `else`) go through here.
    ///
    /// # Returns
    ///
    /// Returns Ok(()) if the current token matches, otherwise a
    /// TokenMismatch error carrying both tokens.
    pub fn expect(&self, position: usize, expected: &Token) -> Result<(), Error> {
        let token = self.token_at(position)?;
        if token != expected {
            Err(Error::new(
                ErrorImpl::TokenMismatch {
                    expected: expected.to_string(),
                    received: token.to_string(),
                },
                position,
            ))
        } else {
            Ok(())
        }
    }
}

/// Parses a sequence of tokens into a Program.
///
/// This is the main entry point. It runs the program production at
/// position 0 and additionally requires that the whole token sequence was
/// consumed: a statement that parses successfully but leaves tokens
/// behind is a TrailingTokens error at the first unconsumed position.
/// This is the only point where trailing-garbage detection happens.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let parser = Parser::new(tokens);
    let program = parse_program(&parser, 0)?;

    if program.next_position != parser.num_tokens() {
        return Err(Error::new(
            ErrorImpl::TrailingTokens {
                remaining: parser.num_tokens() - program.next_position,
            },
            program.next_position,
        ));
    }

    Ok(program.value)
}
