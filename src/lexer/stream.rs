use std::collections::VecDeque;

use crate::MK_TOKEN;

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Lazily lexed tokens with arbitrary lookahead.
///
/// Tokens are pulled from the [`Lexer`] only when a peek or advance needs
/// them. Reads past the end of input keep producing `EOF`.
#[derive(Debug, Clone)]
pub struct TokenStream {
    lexer: Lexer,
    read: VecDeque<Token>,
}

impl TokenStream {
    pub fn new(source: String) -> Self {
        TokenStream {
            lexer: Lexer::new(source),
            read: VecDeque::new(),
        }
    }

    fn fill(&mut self, distance: usize) {
        while self.read.len() <= distance {
            let token = self.lexer.next_token();
            self.read.push_back(token);
        }
    }

    /// Returns the token `distance` positions ahead without consuming anything.
    pub fn peek(&mut self, distance: usize) -> &Token {
        self.fill(distance);
        &self.read[distance]
    }

    /// Consumes and returns the next token.
    pub fn advance(&mut self) -> Token {
        self.fill(0);
        self.read
            .pop_front()
            .unwrap_or_else(|| MK_TOKEN!(TokenKind::EOF))
    }
}

impl From<&str> for TokenStream {
    fn from(source: &str) -> Self {
        TokenStream::new(String::from(source))
    }
}
