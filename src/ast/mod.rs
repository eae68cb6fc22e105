//! Abstract Syntax Tree (AST) definitions.
//!
//! Expressions are a closed enum. Each node renders to a fully
//! parenthesized canonical string through `Display`, which is what the
//! tests and the driver compare against.

pub mod expressions;
