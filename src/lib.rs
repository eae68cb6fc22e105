#![allow(clippy::module_inception)]

use crate::errors::errors::Error;

pub mod ast;
pub mod errors;
pub mod harness;
pub mod lexer;
pub mod macros;
pub mod parser;

pub use crate::{ast::expressions::Expr, parser::parser::parse};

/// Formats an error the way the driver reports it.
///
/// ```text
/// Error: ExpectedToken (Expected `)`, found `end of input`)
/// ```
pub fn format_error(error: &Error) -> String {
    format!("Error: {} ({})", error.get_error_name(), error.get_tip())
}
