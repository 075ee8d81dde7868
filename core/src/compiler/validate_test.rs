//! Tests for the arity validator

use super::validate;
use crate::compiler::error::CompileErrorKind;
use crate::compiler::shunting::to_rpn;
use crate::parser::tokenizer::tokenize;
use crate::symbols::{Environment, Scope};

fn check(source: &str) -> Result<(), CompileErrorKind> {
    let env = Environment::default();
    let scope = Scope::new(&env, None);
    let symbols = scope.operator_symbols();
    let tokens = tokenize(source, &symbols).expect("tokenization should succeed");
    let rpn = to_rpn(&tokens, &scope).expect("conversion should succeed");
    validate(&rpn, &scope).map_err(|e| e.kind)
}

#[test]
fn test_valid_expressions() {
    assert!(check("1").is_ok());
    assert!(check("1+2*3").is_ok());
    assert!(check("MAX(1,2,3)").is_ok());
    assert!(check("IF(TRUE, 1, 2)").is_ok());
    assert!(check("RANDOM()").is_ok());
    assert!(check("CLAMP(MAX(1, 2), 0, 10)").is_ok());
    assert!(check("!TRUE").is_ok());
}

#[test]
fn test_empty_expression() {
    assert!(matches!(
        check(""),
        Err(CompileErrorKind::EmptyExpression)
    ));
    assert!(matches!(
        check("()"),
        Err(CompileErrorKind::EmptyExpression)
    ));
}

#[test]
fn test_too_many_values() {
    assert!(matches!(
        check("1 2"),
        Err(CompileErrorKind::TooManyValues)
    ));
}

#[test]
fn test_operator_underflow() {
    assert!(matches!(
        check("1+"),
        Err(CompileErrorKind::MissingOperands(sym)) if sym == "+"
    ));
    assert!(matches!(
        check("!"),
        Err(CompileErrorKind::MissingOperands(_))
    ));
}

#[test]
fn test_exact_arity() {
    assert!(matches!(
        check("CLAMP(1,2)"),
        Err(CompileErrorKind::ArityMismatch { found: 2, .. })
    ));
    assert!(matches!(
        check("IF(TRUE, 1)"),
        Err(CompileErrorKind::ArityMismatch { found: 2, .. })
    ));
    assert!(matches!(
        check("NOT(1, 2)"),
        Err(CompileErrorKind::ArityMismatch { found: 2, .. })
    ));
}

#[test]
fn test_variadic_minimum_arity() {
    assert!(matches!(
        check("MAX()"),
        Err(CompileErrorKind::ArityMismatch { found: 0, .. })
    ));
    assert!(matches!(
        check("ONEOF(1)"),
        Err(CompileErrorKind::ArityMismatch { found: 1, .. })
    ));
}

#[test]
fn test_nested_call_arity_counts_per_scope() {
    // The inner call contributes exactly one value to the outer scope.
    assert!(check("MAX(MIN(1, 2))").is_ok());
    assert!(matches!(
        check("CLAMP(MIN(1, 2), 3)"),
        Err(CompileErrorKind::ArityMismatch { found: 2, .. })
    ));
}

#[test]
fn test_unknown_function() {
    assert!(matches!(
        check("NOSUCH(1)"),
        Err(CompileErrorKind::UnknownFunction(name)) if name == "NOSUCH"
    ));
}
