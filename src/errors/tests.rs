//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::InvalidPosition { position: 10 }, 10);

    assert_eq!(error.get_error_name(), "InvalidPosition");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "Semicolon".to_string(),
        },
        42,
    );

    assert_eq!(error.get_position(), 42);
}

#[test]
fn test_token_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TokenMismatch {
            expected: "RightParen".to_string(),
            received: "Semicolon".to_string(),
        },
        3,
    );

    assert_eq!(error.get_error_name(), "TokenMismatch");
}

#[test]
fn test_token_mismatch_message_carries_both_tokens() {
    let error = ErrorImpl::TokenMismatch {
        expected: "Else".to_string(),
        received: "Semicolon".to_string(),
    };

    assert_eq!(error.to_string(), "expected Else, received Semicolon");
}

#[test]
fn test_expected_operator_error() {
    let error = Error::new(
        ErrorImpl::ExpectedOperator {
            received: "LeftParen".to_string(),
        },
        0,
    );

    assert_eq!(error.get_error_name(), "ExpectedOperator");
}

#[test]
fn test_invalid_position_message() {
    let error = ErrorImpl::InvalidPosition { position: 7 };

    assert_eq!(error.to_string(), "invalid token position: 7");
}

#[test]
fn test_trailing_tokens_error() {
    let error = Error::new(ErrorImpl::TrailingTokens { remaining: 2 }, 5);

    assert_eq!(error.get_error_name(), "TrailingTokens");
    assert_eq!(error.get_position(), 5);
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::InvalidPosition { position: 0 }, 0);

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "RightCurly".to_string(),
        },
        0,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
