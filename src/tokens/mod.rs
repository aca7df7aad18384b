//! Token model for the parser.
//!
//! This module defines the closed set of tokens the parser consumes.
//! Tokens are produced upstream (the harness reads them from a token
//! file); the parser itself never creates or mutates them. It covers:
//!
//! - Marker tokens for operators, delimiters, and keywords
//! - Payload-carrying tokens for variables and integer literals
//! - Display rendering used in diagnostics

pub mod tokens;
