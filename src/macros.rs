//! Utility macros for the parser.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! Used by the lexer and the token stream to build tokens without
//! repeating the struct literal.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, String::from("a"));
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
        }
    };
    ($kind:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: String::new(),
        }
    };
}
