use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A parse diagnostic: what went wrong and where.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected, literal, ..
            } => ErrorTip::Suggestion(format!(
                "Expected {} here, found `{}`",
                expected,
                literal.escape_default()
            )),
            ErrorImpl::NoPrefixParseFn {
                kind: TokenKind::Illegal,
                literal,
            } => ErrorTip::Suggestion(format!(
                "Unrecognised character `{}`",
                literal.escape_default()
            )),
            ErrorImpl::NoPrefixParseFn { kind: TokenKind::EOF, .. } => {
                ErrorTip::Suggestion(String::from("Unexpected end of input"))
            }
            ErrorImpl::NoPrefixParseFn { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression into smaller `let` bindings",
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
    #[error("expected next token to be {expected}, got {found} ({literal:?}) instead")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        literal: String,
    },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind, literal: String },
    #[error("could not parse {token:?} as integer")]
    NumberParseError { token: String },
    #[error("expression nesting is too deep (maximum {limit} levels)")]
    NestingTooDeep { limit: usize },
}
