//! Tests for the shunting-yard pass

use pretty_assertions::assert_eq;

use super::to_rpn;
use crate::compiler::error::CompileErrorKind;
use crate::parser::tokenizer::tokenize;
use crate::symbols::{Environment, Scope};

fn rpn_string(source: &str) -> String {
    let env = Environment::default();
    let scope = Scope::new(&env, None);
    let symbols = scope.operator_symbols();
    let tokens = tokenize(source, &symbols).expect("tokenization should succeed");
    let rpn = to_rpn(&tokens, &scope).expect("conversion should succeed");
    rpn.iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn rpn_error(source: &str) -> CompileErrorKind {
    let env = Environment::default();
    let scope = Scope::new(&env, None);
    let symbols = scope.operator_symbols();
    let tokens = tokenize(source, &symbols).expect("tokenization should succeed");
    match to_rpn(&tokens, &scope) {
        Err(e) => e.kind,
        Ok(rpn) => panic!(
            "expected an error for {source}, got {}",
            rpn.iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        ),
    }
}

#[test]
fn test_precedence_orders_output() {
    assert_eq!(rpn_string("2+3*4"), "2 3 4 * +");
    assert_eq!(rpn_string("2*3+4"), "2 3 * 4 +");
}

#[test]
fn test_equal_precedence_left_associative() {
    assert_eq!(rpn_string("10-3-2"), "10 3 - 2 -");
    assert_eq!(rpn_string("2*6/3"), "2 6 * 3 /");
}

#[test]
fn test_grouping_parens_vanish() {
    assert_eq!(rpn_string("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(rpn_string("((1))"), "1");
}

#[test]
fn test_call_emits_begin_marker() {
    assert_eq!(rpn_string("MAX(1,2)"), "( 1 2 MAX");
    assert_eq!(rpn_string("RANDOM()"), "( RANDOM");
}

#[test]
fn test_nested_calls() {
    assert_eq!(rpn_string("MAX(1, MIN(2, 3))"), "( 1 ( 2 3 MIN MAX");
}

#[test]
fn test_call_arguments_may_contain_operators() {
    assert_eq!(rpn_string("MAX(1+2, 3)"), "( 1 2 + 3 MAX");
}

#[test]
fn test_unary_operator() {
    assert_eq!(rpn_string("!TRUE"), "TRUE !");
    assert_eq!(rpn_string("!x && y"), "x ! y &&");
}

#[test]
fn test_whitespace_between_name_and_paren_still_a_call() {
    assert_eq!(rpn_string("MAX (1, 2)"), "( 1 2 MAX");
}

#[test]
fn test_mismatched_parens() {
    assert!(matches!(
        rpn_error("(1+2"),
        CompileErrorKind::MismatchedParens
    ));
    assert!(matches!(
        rpn_error("1+2)"),
        CompileErrorKind::MismatchedParens
    ));
    assert!(matches!(
        rpn_error("MAX(1,2"),
        CompileErrorKind::MismatchedParens
    ));
}

#[test]
fn test_comma_outside_call() {
    assert!(matches!(
        rpn_error("1, 2"),
        CompileErrorKind::MisplacedSeparator
    ));
}
