use thiserror::Error;

use crate::{
    ast::expressions::ExprType,
    lexer::tokens::{Token, TokenKind},
};

/// A failed parse.
///
/// Errors carry no source position; they describe the offending token or
/// node only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
        }
    }

    /// A one-line hint for the user, shown next to the error name.
    pub fn get_tip(&self) -> String {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } if token.is_eof() => {
                String::from("Input ended where an expression was expected")
            }
            ErrorImpl::UnexpectedToken { token } => {
                format!("`{}` cannot start an expression", token)
            }
            ErrorImpl::ExpectedToken { expected, found } => {
                format!("Expected `{}`, found `{}`", expected, found)
            }
            ErrorImpl::InvalidAssignmentTarget { .. } => {
                String::from("The left-hand side of an assignment must be a name")
            }
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("could not parse \"{token}\"")]
    UnexpectedToken { token: Token },
    #[error("expected token {expected} and found \"{found}\"")]
    ExpectedToken { expected: TokenKind, found: Token },
    #[error("cannot assign to {target} ({found:?} expression)")]
    InvalidAssignmentTarget { target: String, found: ExprType },
}
