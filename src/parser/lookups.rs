use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::expressions::Expr,
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser};

/// Operator precedence, weakest first. A continuation only binds when its
/// precedence is strictly above the level the caller is parsing at.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Default,
    Assignment,
    Conditional,
    Sum,
    Product,
    Exponent,
    Prefix,
    Postfix,
    Call,
}

impl BindingPower {
    /// One level weaker than `self`. Parsing a right operand here lets an
    /// operator of the same precedence claim the rest, giving right
    /// associativity.
    pub fn lower(self) -> BindingPower {
        match self {
            BindingPower::Default | BindingPower::Assignment => BindingPower::Default,
            BindingPower::Conditional => BindingPower::Assignment,
            BindingPower::Sum => BindingPower::Conditional,
            BindingPower::Product => BindingPower::Sum,
            BindingPower::Exponent => BindingPower::Product,
            BindingPower::Prefix => BindingPower::Exponent,
            BindingPower::Postfix => BindingPower::Prefix,
            BindingPower::Call => BindingPower::Postfix,
        }
    }
}

/// Starts an expression. Receives the token that was just consumed.
pub type NUDHandler = fn(&mut Parser<'_>, Token) -> Result<Expr, Error>;
/// Extends `left`. Receives the consumed operator token and its own binding power.
pub type LEDHandler = fn(&mut Parser<'_>, Expr, Token, BindingPower) -> Result<Expr, Error>;

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// The parselet tables consulted by the parser.
///
/// A grammar is filled once through [`Grammar::nud`] and [`Grammar::led`]
/// and only read afterwards, so one table can back any number of parsers.
#[derive(Default, Clone)]
pub struct Grammar {
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix and postfix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for left denotation binding powers
    binding_power_lookup: BPLookup,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar::default()
    }

    /// Registers a left denotation handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence of this operator
    /// * `led_fn` - The handler function for this operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this expression start
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<(LEDHandler, BindingPower)> {
        let led_fn = self.led_lookup.get(&kind)?;
        let binding_power = self.binding_power_lookup.get(&kind)?;
        Some((*led_fn, *binding_power))
    }
}

pub fn create_token_lookups(grammar: &mut Grammar) {
    grammar.led(TokenKind::Assignment, BindingPower::Assignment, parse_assignment_expr);
    grammar.led(TokenKind::Question, BindingPower::Conditional, parse_conditional_expr);

    // Sum and product
    grammar.led(TokenKind::Plus, BindingPower::Sum, parse_binary_expr);
    grammar.led(TokenKind::Dash, BindingPower::Sum, parse_binary_expr);
    grammar.led(TokenKind::Star, BindingPower::Product, parse_binary_expr);
    grammar.led(TokenKind::Slash, BindingPower::Product, parse_binary_expr);
    grammar.led(TokenKind::Caret, BindingPower::Exponent, parse_right_binary_expr);

    grammar.led(TokenKind::Not, BindingPower::Postfix, parse_postfix_expr);
    grammar.led(TokenKind::OpenParen, BindingPower::Call, parse_call_expr);

    // Names, grouping and prefix operators
    grammar.nud(TokenKind::Identifier, parse_name_expr);
    grammar.nud(TokenKind::OpenParen, parse_grouping_expr);
    grammar.nud(TokenKind::Plus, parse_prefix_expr);
    grammar.nud(TokenKind::Dash, parse_prefix_expr);
    grammar.nud(TokenKind::Tilde, parse_prefix_expr);
    grammar.nud(TokenKind::Not, parse_prefix_expr);
}

lazy_static! {
    /// The built-in expression grammar, shared by every [`Parser::new`].
    pub static ref BANTAM_GRAMMAR: Grammar = {
        let mut grammar = Grammar::new();
        create_token_lookups(&mut grammar);
        grammar
    };
}
