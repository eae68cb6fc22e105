use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token = parser.advance();
    let Some(nud_fn) = parser.grammar().get_nud(token.kind) else {
        tracing::debug!(token = %token, "no expression starts with token");
        return Err(Error::new(ErrorImpl::UnexpectedToken { token }));
    };

    tracing::trace!(kind = ?token.kind, "nud");
    let mut left = nud_fn(parser, token)?;

    // While the next token continues the expression more tightly than bp, fold it into left
    loop {
        let kind = parser.current_token_kind();
        let Some((led_fn, led_bp)) = parser.grammar().get_led(kind) else {
            break;
        };

        if led_bp <= bp {
            break;
        }

        tracing::trace!(?kind, binding_power = ?led_bp, "led");
        let token = parser.advance();
        left = led_fn(parser, left, token, led_bp)?;
    }

    Ok(left)
}

pub fn parse_name_expr(_parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    Ok(Expr::Name(token.value))
}

pub fn parse_grouping_expr(parser: &mut Parser, _token: Token) -> Result<Expr, Error> {
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.consume(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_prefix_expr(parser: &mut Parser, token: Token) -> Result<Expr, Error> {
    // Prefix is weaker than postfix and call, so `-a!` is `-(a!)`.
    let right = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::prefix(token.kind, right))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    token: Token,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(left, token.kind, right))
}

pub fn parse_right_binary_expr(
    parser: &mut Parser,
    left: Expr,
    token: Token,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let right = parse_expr(parser, bp.lower())?;

    Ok(Expr::binary(left, token.kind, right))
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _token: Token,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let value = parse_expr(parser, bp.lower())?;

    let name = left.as_name().ok_or_else(|| {
        Error::new(ErrorImpl::InvalidAssignmentTarget {
            target: left.to_string(),
            found: left.get_expr_type(),
        })
    })?;

    Ok(Expr::assign(name, value))
}

pub fn parse_conditional_expr(
    parser: &mut Parser,
    condition: Expr,
    _token: Token,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let then_arm = parse_expr(parser, BindingPower::Default)?;
    parser.consume(TokenKind::Colon)?;
    let else_arm = parse_expr(parser, bp.lower())?;

    Ok(Expr::conditional(condition, then_arm, else_arm))
}

pub fn parse_postfix_expr(
    _parser: &mut Parser,
    left: Expr,
    token: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    Ok(Expr::postfix(left, token.kind))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    callee: Expr,
    _token: Token,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let mut arguments = vec![];

    if !parser.match_token(TokenKind::CloseParen) {
        loop {
            arguments.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.match_token(TokenKind::Comma) {
                break;
            }
        }

        parser.consume(TokenKind::CloseParen)?;
    }

    Ok(Expr::call(callee, arguments))
}
