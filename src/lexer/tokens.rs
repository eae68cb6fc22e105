use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Every punctuation glyph mapped back to its token kind.
    pub static ref PUNCTUATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        for kind in TokenKind::ALL {
            if let Some(punctuator) = kind.punctuator() {
                map.insert(punctuator, kind);
            }
        }
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    OpenParen,
    CloseParen,
    Comma,
    Assignment, // =
    Plus,
    Dash,
    Star,
    Slash,
    Caret,
    Tilde,
    Not, // !
    Question,
    Colon,

    Identifier,
    EOF,
}

impl TokenKind {
    pub const ALL: [TokenKind; 15] = [
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Comma,
        TokenKind::Assignment,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Caret,
        TokenKind::Tilde,
        TokenKind::Not,
        TokenKind::Question,
        TokenKind::Colon,
        TokenKind::Identifier,
        TokenKind::EOF,
    ];

    /// The single character this kind is spelled with, if it is punctuation.
    pub fn punctuator(&self) -> Option<char> {
        match self {
            TokenKind::OpenParen => Some('('),
            TokenKind::CloseParen => Some(')'),
            TokenKind::Comma => Some(','),
            TokenKind::Assignment => Some('='),
            TokenKind::Plus => Some('+'),
            TokenKind::Dash => Some('-'),
            TokenKind::Star => Some('*'),
            TokenKind::Slash => Some('/'),
            TokenKind::Caret => Some('^'),
            TokenKind::Tilde => Some('~'),
            TokenKind::Not => Some('!'),
            TokenKind::Question => Some('?'),
            TokenKind::Colon => Some(':'),
            TokenKind::Identifier | TokenKind::EOF => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.punctuator() {
            Some(punctuator) => write!(f, "{}", punctuator),
            None => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EOF => write!(f, "end of input"),
            _ => write!(f, "{}", self.value),
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }
}
