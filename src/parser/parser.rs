//! Parser implementation for building expression trees.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a Pratt parser: it owns a token stream and reads its
//! NUD (null denotation) and LED (left denotation) handlers, along with
//! their binding powers, from a shared [`Grammar`].

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        stream::TokenStream,
        tokens::{Token, TokenKind},
    },
};

use super::{
    expr::parse_expr,
    lookups::{BindingPower, Grammar, BANTAM_GRAMMAR},
};

/// The main parser structure that maintains parsing state.
///
/// Each parser exclusively owns its token stream and lookahead buffer.
/// The grammar is borrowed and never modified.
pub struct Parser<'g> {
    /// Lazily lexed tokens
    tokens: TokenStream,
    /// Parselet tables
    grammar: &'g Grammar,
}

impl Parser<'static> {
    /// Creates a parser over `tokens` using the built-in grammar.
    pub fn new(tokens: TokenStream) -> Self {
        Parser::with_grammar(tokens, &BANTAM_GRAMMAR)
    }
}

impl<'g> Parser<'g> {
    /// Creates a parser over `tokens` that dispatches through `grammar`.
    pub fn with_grammar(tokens: TokenStream, grammar: &'g Grammar) -> Self {
        Parser { tokens, grammar }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    /// Parses one expression whose operators all bind tighter than `bp`.
    ///
    /// Tokens after the expression are left in the stream.
    pub fn parse_expression(&mut self, bp: BindingPower) -> Result<Expr, Error> {
        parse_expr(self, bp)
    }

    /// Returns the token `distance` positions ahead without consuming it.
    pub fn peek(&mut self, distance: usize) -> &Token {
        self.tokens.peek(distance)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&mut self) -> TokenKind {
        self.peek(0).kind
    }

    /// Advances to the next token and returns the consumed one.
    pub fn advance(&mut self) -> Token {
        self.tokens.advance()
    }

    /// Consumes the current token if it is of `kind`.
    ///
    /// # Returns
    ///
    /// Returns true if a token was consumed. Nothing happens otherwise.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() != kind {
            return false;
        }

        self.advance();
        true
    }

    /// Consumes a token of the specified kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `ExpectedToken` error. The token is left in place on failure.
    pub fn consume(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.peek(0);
        if token.kind != expected_kind {
            return Err(Error::new(ErrorImpl::ExpectedToken {
                expected: expected_kind,
                found: token.clone(),
            }));
        }

        Ok(self.advance())
    }

    /// Checks whether all input has been consumed.
    pub fn is_at_end(&mut self) -> bool {
        self.current_token_kind() == TokenKind::EOF
    }
}

/// Parses a single expression from source text.
///
/// This is the main entry point. It builds a parser over the built-in
/// grammar and parses one expression at the lowest binding power.
///
/// # Returns
///
/// Result containing either the root expression or the first Error hit.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: &str) -> Result<Expr, Error> {
    let mut parser = Parser::new(TokenStream::from(source));
    parser.parse_expression(BindingPower::Default)
}
