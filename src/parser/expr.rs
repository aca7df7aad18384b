use crate::{
    ast::expressions::{Expr, Op},
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::Token,
};

use super::parser::{ParseResult, Parsed, Parser};

/// Recognizes any of the four binary operators, advancing by one.
///
/// The expression grammar itself only consumes the additive subset; the
/// comparison layers check their single operator token directly. This is
/// exposed for callers that need the full operator set.
pub fn parse_op(parser: &Parser, position: usize) -> ParseResult<Op> {
    let op = match parser.token_at(position)? {
        Token::Plus => Op::Add,
        Token::Minus => Op::Subtract,
        Token::LessThan => Op::LessThan,
        Token::Equals => Op::Equals,
        token => {
            return Err(Error::new(
                ErrorImpl::ExpectedOperator {
                    received: token.to_string(),
                },
                position,
            ))
        }
    };

    Ok(Parsed::new(op, position + 1))
}

/// Recognizes `+` or `-`, advancing by one.
pub fn parse_additive_op(parser: &Parser, position: usize) -> ParseResult<Op> {
    match parser.token_at(position)? {
        Token::Plus => Ok(Parsed::new(Op::Add, position + 1)),
        Token::Minus => Ok(Parsed::new(Op::Subtract, position + 1)),
        token => Err(Error::new(
            ErrorImpl::ExpectedOperator {
                received: token.to_string(),
            },
            position,
        )),
    }
}

/// primary_expr ::= variable | integer | '(' expr ')'
pub fn parse_primary_expr(parser: &Parser, position: usize) -> ParseResult<Expr> {
    match parser.token_at(position)? {
        Token::Variable(name) => Ok(Parsed::new(Expr::Variable(name.clone()), position + 1)),
        Token::Integer(value) => Ok(Parsed::new(Expr::Integer(*value), position + 1)),
        Token::LeftParen => {
            let inner = parse_expr(parser, position + 1)?;
            parser.expect(inner.next_position, &Token::RightParen)?;

            Ok(Parsed::new(inner.value, inner.next_position + 1))
        }
        token => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
            position,
        )),
    }
}

/// additive_expr ::= primary_expr ( ('+' | '-') primary_expr )*
pub fn parse_additive_expr(parser: &Parser, position: usize) -> ParseResult<Expr> {
    let first = parse_primary_expr(parser, position)?;
    let mut expr = first.value;
    let mut next = first.next_position;

    // Left fold: each repetition nests the running result as the left
    // operand, so `a + b - c` groups as `(a + b) - c`.
    while let Ok(op) = parse_additive_op(parser, next) {
        match parse_primary_expr(parser, op.next_position) {
            Ok(operand) => {
                expr = Expr::binary(expr, op.value, operand.value);
                next = operand.next_position;
            }
            // Failed attempt: `next` stays at the last good position and
            // the partial consumption is discarded.
            Err(_) => break,
        }
    }

    Ok(Parsed::new(expr, next))
}

/// less_than_expr ::= additive_expr ( '<' additive_expr )*
pub fn parse_less_than_expr(parser: &Parser, position: usize) -> ParseResult<Expr> {
    let first = parse_additive_expr(parser, position)?;
    let mut expr = first.value;
    let mut next = first.next_position;

    while parser.expect(next, &Token::LessThan).is_ok() {
        match parse_additive_expr(parser, next + 1) {
            Ok(operand) => {
                expr = Expr::binary(expr, Op::LessThan, operand.value);
                next = operand.next_position;
            }
            Err(_) => break,
        }
    }

    Ok(Parsed::new(expr, next))
}

/// equals_expr ::= less_than_expr ( '==' less_than_expr )*
pub fn parse_equals_expr(parser: &Parser, position: usize) -> ParseResult<Expr> {
    let first = parse_less_than_expr(parser, position)?;
    let mut expr = first.value;
    let mut next = first.next_position;

    while parser.expect(next, &Token::Equals).is_ok() {
        match parse_less_than_expr(parser, next + 1) {
            Ok(operand) => {
                expr = Expr::binary(expr, Op::Equals, operand.value);
                next = operand.next_position;
            }
            Err(_) => break,
        }
    }

    Ok(Parsed::new(expr, next))
}

/// expr ::= equals_expr
///
/// The equality layer binds loosest, so it is the entry into the
/// precedence hierarchy.
pub fn parse_expr(parser: &Parser, position: usize) -> ParseResult<Expr> {
    parse_equals_expr(parser, position)
}
