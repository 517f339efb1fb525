use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
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

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnrecognisedStatement { .. } => "UnrecognisedStatement",
            ErrorImpl::TokenLimitExceeded { .. } => "TokenLimitExceeded",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken {
                expected,
                received: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(format!("Unexpected end of input, expected {}", expected)),
            ErrorImpl::UnexpectedToken {
                expected, literal, ..
            } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, expected {}",
                literal, expected
            )),
            ErrorImpl::UnrecognisedStatement { .. } => ErrorTip::Suggestion(String::from(
                "Only `let` and `return` statements are understood",
            )),
            ErrorImpl::TokenLimitExceeded { .. } => ErrorTip::Suggestion(String::from(
                "Statements must end with `;`, did you miss a semicolon?",
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

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
    #[error("next token got={received} want={expected}")]
    UnexpectedToken {
        expected: TokenKind,
        received: TokenKind,
        literal: String,
    },
    #[error("no statement starts with {kind} {literal:?}")]
    UnrecognisedStatement { kind: TokenKind, literal: String },
    #[error("token limit of {limit} exceeded")]
    TokenLimitExceeded { limit: usize },
}
