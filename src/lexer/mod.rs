//! Lexical analysis module.
//!
//! This module turns expression source text into tokens. It handles:
//!
//! - Single character punctuation (`( ) , = + - * / ^ ~ ! ? :`)
//! - Identifiers (maximal runs of alphabetic characters)
//! - Silently skipping every other character, whitespace included
//! - A lookahead buffer that keeps yielding `EOF` once input runs out

pub mod lexer;
pub mod stream;
pub mod tokens;
