//! Error types for parsing.
//!
//! Every failure is fatal to the parse in progress and propagates straight
//! to the caller. It includes:
//!
//! - `UnexpectedToken` when no expression can start at a token
//! - `ExpectedToken` when a required `)` or `:` is missing
//! - `InvalidAssignmentTarget` when `=` follows something other than a name

pub mod errors;
