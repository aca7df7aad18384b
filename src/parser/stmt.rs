use crate::{
    ast::statements::{Program, Stmt},
    errors::errors::{Error, ErrorImpl},
    tokens::tokens::Token,
};

use super::{
    expr::parse_expr,
    parser::{ParseResult, Parsed, Parser},
};

/// stmt ::= if_stmt | block_stmt | println_stmt
///
/// Dispatches on the token at `position`; anything that cannot start a
/// statement is a hard failure naming the token.
pub fn parse_stmt(parser: &Parser, position: usize) -> ParseResult<Stmt> {
    match parser.token_at(position)? {
        Token::If => parse_if_stmt(parser, position),
        Token::LeftCurly => parse_block_stmt(parser, position),
        Token::Println => parse_println_stmt(parser, position),
        token => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: token.to_string(),
            },
            position,
        )),
    }
}

/// if_stmt ::= 'if' '(' expr ')' stmt 'else' stmt
///
/// The else branch is mandatory.
pub fn parse_if_stmt(parser: &Parser, position: usize) -> ParseResult<Stmt> {
    parser.expect(position, &Token::If)?;
    parser.expect(position + 1, &Token::LeftParen)?;

    let condition = parse_expr(parser, position + 2)?;
    parser.expect(condition.next_position, &Token::RightParen)?;

    let then_branch = parse_stmt(parser, condition.next_position + 1)?;
    parser.expect(then_branch.next_position, &Token::Else)?;

    let else_branch = parse_stmt(parser, then_branch.next_position + 1)?;

    Ok(Parsed::new(
        Stmt::If {
            condition: condition.value,
            then_branch: Box::new(then_branch.value),
            else_branch: Box::new(else_branch.value),
        },
        else_branch.next_position,
    ))
}

/// block_stmt ::= '{' stmt*
///
/// Statements are collected speculatively: the first attempt that fails
/// ends the repetition and its failure is swallowed. The production does
/// not consume a closing brace; a `}` is simply the token the repetition
/// stops at, left for the caller.
pub fn parse_block_stmt(parser: &Parser, position: usize) -> ParseResult<Stmt> {
    parser.expect(position, &Token::LeftCurly)?;

    let mut statements = Vec::new();
    let mut next = position + 1;

    while let Ok(stmt) = parse_stmt(parser, next) {
        statements.push(stmt.value);
        next = stmt.next_position;
    }

    Ok(Parsed::new(Stmt::Block(statements), next))
}

/// println_stmt ::= 'println' '(' expr ')' ';'
pub fn parse_println_stmt(parser: &Parser, position: usize) -> ParseResult<Stmt> {
    parser.expect(position, &Token::Println)?;
    parser.expect(position + 1, &Token::LeftParen)?;

    let arg = parse_expr(parser, position + 2)?;
    parser.expect(arg.next_position, &Token::RightParen)?;
    parser.expect(arg.next_position + 1, &Token::Semicolon)?;

    Ok(Parsed::new(
        Stmt::Println(arg.value),
        arg.next_position + 2,
    ))
}

/// program ::= stmt
///
/// Wraps exactly one top-level statement. Full-consumption checking lives
/// in the entry point, not here.
pub fn parse_program(parser: &Parser, position: usize) -> ParseResult<Program> {
    let stmt = parse_stmt(parser, position)?;

    Ok(Parsed::new(
        Program {
            statement: stmt.value,
        },
        stmt.next_position,
    ))
}
