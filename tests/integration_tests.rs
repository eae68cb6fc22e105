//! Integration tests for the public parsing API.
//!
//! These tests drive the crate the way a consumer would: source text in,
//! canonical rendering or a structured error out.

use bantam::{
    errors::errors::ErrorImpl,
    harness::{check, run_cases, Outcome, BANTAM_CASES},
    lexer::{lexer::tokenize, stream::TokenStream, tokens::TokenKind},
    parse,
    parser::{
        expr::parse_postfix_expr,
        lookups::{create_token_lookups, BindingPower, Grammar},
        parser::Parser,
    },
    Expr,
};

#[test]
fn test_conformance_suite() {
    let report = run_cases(BANTAM_CASES);

    assert!(report.all_passed(), "{:?}", report.failures());
    assert_eq!(report.passed(), 24);
}

#[test]
fn test_precedence_ordering() {
    let expr = parse("a = b + c * d ^ e - f / g").unwrap();
    assert_eq!(expr.to_string(), "(a = ((b + (c * (d ^ e))) - (f / g)))");
}

#[test]
fn test_left_associativity_for_each_operator() {
    for op in ["+", "-", "*", "/"] {
        let source = format!("x {} y {} z", op, op);
        let expected = format!("((x {} y) {} z)", op, op);
        assert_eq!(parse(&source).unwrap().to_string(), expected);
    }
}

#[test]
fn test_assignment_tree_shape() {
    let expr = parse("a = b = c").unwrap();

    assert_eq!(
        expr,
        Expr::assign("a", Expr::assign("b", Expr::name("c")))
    );
}

#[test]
fn test_roundtrip_of_rendering() {
    for case in BANTAM_CASES {
        let rendered = parse(case.source).unwrap().to_string();
        assert_eq!(parse(&rendered).unwrap().to_string(), rendered);
    }
}

#[test]
fn test_errors_surface_through_public_api() {
    let error = parse("").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");

    let error = parse("a + b = c").unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");

    let error = parse("a(b").unwrap_err();
    assert!(matches!(
        error.kind(),
        ErrorImpl::ExpectedToken { expected: TokenKind::CloseParen, .. }
    ));
}

#[test]
fn test_check_reports_error_outcome() {
    match check("(", "a") {
        Outcome::Failed { error, .. } => assert_eq!(error.get_error_name(), "UnexpectedToken"),
        other => panic!("Expected failure, got {:?}", other),
    }
}

#[test]
fn test_tokenize_public() {
    let tokens = tokenize("f(x)".to_string());
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<TokenKind>>();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_shared_grammar_across_threads() {
    let handles = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("a{} + b", "x".repeat(i));
                parse(&source).unwrap().to_string()
            })
        })
        .collect::<Vec<_>>();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("(a{} + b)", "x".repeat(i)));
    }
}

#[test]
fn test_extended_grammar_postfix_operator() {
    // `~` registered as a postfix operator alongside `!`.
    let mut grammar = Grammar::new();
    create_token_lookups(&mut grammar);
    grammar.led(TokenKind::Tilde, BindingPower::Postfix, parse_postfix_expr);

    let mut parser = Parser::with_grammar(TokenStream::from("-a~!"), &grammar);
    let expr = parser.parse_expression(BindingPower::Default).unwrap();

    assert_eq!(expr.to_string(), "(-((a~)!))");
}
