//! Parser module for building expression trees.
//!
//! This module contains a Pratt parser that turns a token stream into an
//! [`Expr`](crate::ast::expressions::Expr). It handles:
//!
//! - Names, grouping and the prefix operators `+ - ~ !`
//! - Binary operators with precedence and associativity
//! - Postfix `!`, calls, assignment and the `? :` conditional
//!
//! Every token kind can register a NUD (null denotation) handler to start an
//! expression and a LED (left denotation) handler with a binding power to
//! continue one. New operators are added by registering handlers, not by
//! touching the parse loop.

pub mod expr;
pub mod lookups;
pub mod parser;
