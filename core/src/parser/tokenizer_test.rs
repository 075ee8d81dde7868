//! Tests for the tokenizer

use super::super::{Span, TokenKind};
use super::tokenize;
use pretty_assertions::assert_eq;

const SYMBOLS: &[&str] = &[
    "!", "+", "-", "*", "/", "%", "&&", "||", ">", ">=", "<", "<=", "=", "==", "!=", "<>",
];

fn kinds(source: &str) -> Vec<TokenKind<'_>> {
    tokenize(source, SYMBOLS)
        .expect("tokenization should succeed")
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn test_simple_arithmetic() {
    assert_eq!(
        kinds("2 + 3*4"),
        vec![
            TokenKind::Number(2.0),
            TokenKind::Operator("+"),
            TokenKind::Number(3.0),
            TokenKind::Operator("*"),
            TokenKind::Number(4.0),
        ]
    );
}

#[test]
fn test_numeric_literals() {
    assert_eq!(kinds("1.5"), vec![TokenKind::Number(1.5)]);
    assert_eq!(kinds("1e3"), vec![TokenKind::Number(1000.0)]);
    assert_eq!(kinds("2.5e-1"), vec![TokenKind::Number(0.25)]);
    assert_eq!(kinds("1E+2"), vec![TokenKind::Number(100.0)]);
}

#[test]
fn test_exponent_marker_without_digits_is_an_identifier() {
    // "2e" is the number 2 followed by the identifier `e`.
    assert_eq!(
        kinds("2e"),
        vec![TokenKind::Number(2.0), TokenKind::Ident("e")]
    );
}

#[test]
fn test_minus_is_binary_between_values() {
    assert_eq!(
        kinds("3-2"),
        vec![
            TokenKind::Number(3.0),
            TokenKind::Operator("-"),
            TokenKind::Number(2.0),
        ]
    );
}

#[test]
fn test_minus_folds_after_open_paren() {
    assert_eq!(
        kinds("(-2)"),
        vec![
            TokenKind::LParen,
            TokenKind::Number(-2.0),
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_minus_folds_after_comma_and_at_start() {
    assert_eq!(kinds("-2"), vec![TokenKind::Number(-2.0)]);
    assert_eq!(
        kinds("MAX(1,-2)"),
        vec![
            TokenKind::Ident("MAX"),
            TokenKind::LParen,
            TokenKind::Number(1.0),
            TokenKind::Comma,
            TokenKind::Number(-2.0),
            TokenKind::RParen,
        ]
    );
}

#[test]
fn test_minus_folds_after_operator() {
    assert_eq!(
        kinds("2--3"),
        vec![
            TokenKind::Number(2.0),
            TokenKind::Operator("-"),
            TokenKind::Number(-3.0),
        ]
    );
}

#[test]
fn test_minus_before_identifier_stays_an_operator() {
    assert_eq!(
        kinds("-x"),
        vec![TokenKind::Operator("-"), TokenKind::Ident("x")]
    );
}

#[test]
fn test_identifiers_allow_underscores_and_dots() {
    assert_eq!(
        kinds("wind.speed_kts"),
        vec![TokenKind::Ident("wind.speed_kts")]
    );
}

#[test]
fn test_string_literal_kept_verbatim() {
    assert_eq!(kinds("'a\\nb'"), vec![TokenKind::Str("a\\nb")]);
    assert_eq!(kinds("''"), vec![TokenKind::Str("")]);
}

#[test]
fn test_unterminated_string_reports_offset() {
    let err = tokenize("1 + 'abc", SYMBOLS).unwrap_err();
    assert_eq!(err.span, Span(4..8));
    assert!(err.kind.to_string().contains("unterminated"));
}

#[test]
fn test_unknown_symbol_reports_offset() {
    let err = tokenize("1 $ 2", SYMBOLS).unwrap_err();
    assert_eq!(err.span, Span(2..3));
    assert!(err.kind.to_string().contains("$"));
}

#[test]
fn test_greedy_operator_matching() {
    assert_eq!(
        kinds("1>=2"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Operator(">="),
            TokenKind::Number(2.0),
        ]
    );
    assert_eq!(
        kinds("1!=2"),
        vec![
            TokenKind::Number(1.0),
            TokenKind::Operator("!="),
            TokenKind::Number(2.0),
        ]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(kinds(""), vec![]);
    assert_eq!(kinds("   "), vec![]);
}
