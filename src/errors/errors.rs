use std::fmt::Display;

use thiserror::Error;

/// A parse failure: the failure taxonomy variant plus the token position
/// the parse failed at.
///
/// Positions are indices into the token sequence handed to the parser, not
/// byte offsets; the sequence itself is the only "source" that exists at
/// this layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: usize) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPosition { .. } => "InvalidPosition",
            ErrorImpl::TokenMismatch { .. } => "TokenMismatch",
            ErrorImpl::ExpectedOperator { .. } => "ExpectedOperator",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::TrailingTokens { .. } => "TrailingTokens",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPosition { .. } => ErrorTip::None,
            ErrorImpl::TokenMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "expected `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ExpectedOperator { received } => {
                ErrorTip::Suggestion(format!("expected an operator, received `{}`", received))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::TrailingTokens { remaining } => ErrorTip::Suggestion(format!(
                "the program ended but {} token(s) were left unconsumed",
                remaining
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("invalid token position: {position}")]
    InvalidPosition { position: usize },
    #[error("expected {expected}, received {received}")]
    TokenMismatch { expected: String, received: String },
    #[error("expected operator; received: {received}")]
    ExpectedOperator { received: String },
    #[error("unexpected token: {token}")]
    UnexpectedToken { token: String },
    #[error("{remaining} remaining token(s) at end of program")]
    TrailingTokens { remaining: usize },
}
