use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{Token, TokenKind, PUNCTUATOR_LOOKUP};

pub type RegexHandler = fn(&str) -> Option<Token>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the cursor.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: punctuator_regex(), handler: punctuator_handler },
        RegexPattern { regex: Regex::new(r"^\p{L}+").unwrap(), handler: symbol_handler },
    ];
}

/// One character class holding every glyph in `PUNCTUATOR_LOOKUP`.
fn punctuator_regex() -> Regex {
    let mut glyphs = PUNCTUATOR_LOOKUP.keys().copied().collect::<Vec<char>>();
    glyphs.sort_unstable();

    let class = glyphs
        .iter()
        .map(|glyph| regex::escape(&glyph.to_string()))
        .collect::<String>();

    Regex::new(&format!("^[{}]", class)).unwrap()
}

/// Scans source text one token at a time.
///
/// Once the source is exhausted every further call to [`Lexer::next_token`]
/// yields an `EOF` token, so callers never have to handle running out.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer { source, pos: 0 }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let remainder = self.remainder();

            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .and_then(|found| (pattern.handler)(found.as_str()))
            });

            if let Some(token) = matched {
                self.advance_n(token.value.len());
                return token;
            }

            // Anything else (whitespace included) is dropped without a token.
            if let Some(skipped) = remainder.chars().next() {
                tracing::trace!(character = ?skipped, pos = self.pos, "skipping character");
                self.advance_n(skipped.len_utf8());
            }
        }

        MK_TOKEN!(TokenKind::EOF)
    }
}

fn punctuator_handler(matched: &str) -> Option<Token> {
    let kind = PUNCTUATOR_LOOKUP.get(&matched.chars().next()?)?;
    Some(MK_TOKEN!(*kind, String::from(matched)))
}

fn symbol_handler(matched: &str) -> Option<Token> {
    Some(MK_TOKEN!(TokenKind::Identifier, String::from(matched)))
}

/// Tokenizes the whole source eagerly, up to and including the first `EOF`.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
