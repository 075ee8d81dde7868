//! Tests for the logic package

use bumpalo::Bump;
use pretty_assertions::assert_eq;

use crate::api::{Engine, EngineOptions};
use crate::values::Value;

fn eval_expr(source: &str) -> Value {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena, |env| env);
    let expr = engine.compile(source).expect("compilation should succeed");
    expr.eval().expect("evaluation should succeed")
}

#[test]
fn test_constants() {
    assert_eq!(eval_expr("TRUE"), Value::Bool(true));
    assert_eq!(eval_expr("FALSE"), Value::Bool(false));
}

#[test]
fn test_if_selects_branch() {
    assert_eq!(eval_expr("IF(TRUE, 1, 2)"), Value::Number(1.0));
    assert_eq!(eval_expr("IF(FALSE, 1, 2)"), Value::Number(2.0));
    assert_eq!(eval_expr("IF(3 > 2, 'yes', 'no')"), Value::from("yes"));
}

#[test]
fn test_if_is_lazy() {
    crate::test_utils::init_test_logging();
    // The false branch divides by zero; it must never be forced.
    assert_eq!(eval_expr("IF(TRUE, 1, 1/0)"), Value::Number(1.0));
    assert_eq!(eval_expr("IF(FALSE, 1/0, 2)"), Value::Number(2.0));
}

#[test]
fn test_not() {
    assert_eq!(eval_expr("NOT(TRUE)"), Value::Bool(false));
    assert_eq!(eval_expr("NOT(0)"), Value::Bool(true));
}

#[test]
fn test_oneof() {
    assert_eq!(eval_expr("ONEOF(2, 1, 2, 3)"), Value::Bool(true));
    assert_eq!(eval_expr("ONEOF(5, 1, 2, 3)"), Value::Bool(false));
    assert_eq!(eval_expr("ONEOF('b', 'a', 'b')"), Value::Bool(true));
    // Numeric equality across representations.
    assert_eq!(eval_expr("ONEOF(2, 2.0)"), Value::Bool(true));
}

#[test]
fn test_oneof_stops_at_first_match() {
    // Candidates after the first match are not forced.
    assert_eq!(eval_expr("ONEOF(1, 1, 1/0)"), Value::Bool(true));
}

#[test]
fn test_match() {
    assert_eq!(eval_expr("MATCH('^a.c$', 'abc')"), Value::Bool(true));
    assert_eq!(eval_expr("MATCH('^a.c$', 'abd')"), Value::Bool(false));
    assert_eq!(eval_expr("MATCH('[0-9]+', 'id-42')"), Value::Bool(true));
}

#[test]
fn test_match_invalid_pattern_is_a_runtime_error() {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena, |env| env);
    let expr = engine
        .compile("MATCH('(unclosed', 'x')")
        .expect("compilation should succeed");
    let err = expr.eval().unwrap_err();
    assert!(err.to_string().contains("regular expression"));
}
