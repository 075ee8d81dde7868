//! Tests for the built-in operators

use bumpalo::Bump;
use pretty_assertions::assert_eq;

use crate::api::{Engine, EngineOptions, Error};
use crate::values::Value;

fn eval_expr(source: &str) -> Value {
    try_eval(source).expect("evaluation should succeed")
}

fn try_eval(source: &str) -> Result<Value, Error> {
    let arena = Bump::new();
    let engine = Engine::new(EngineOptions::default(), &arena, |env| env);
    engine.compile(source).and_then(|expr| expr.eval())
}

#[test]
fn test_arithmetic() {
    assert_eq!(eval_expr("1+2"), Value::Number(3.0));
    assert_eq!(eval_expr("7-2"), Value::Number(5.0));
    assert_eq!(eval_expr("3*4"), Value::Number(12.0));
    assert_eq!(eval_expr("9/2"), Value::Number(4.5));
    assert_eq!(eval_expr("9%4"), Value::Number(1.0));
}

#[test]
fn test_plus_concatenates_strings() {
    assert_eq!(eval_expr("'ab' + 'cd'"), Value::from("abcd"));
    assert_eq!(eval_expr("'n=' + 1"), Value::from("n=1"));
}

#[test]
fn test_division_by_zero() {
    let err = try_eval("1/0").unwrap_err();
    assert!(err.to_string().contains("division by zero"));
    let err = try_eval("1%0").unwrap_err();
    assert!(err.to_string().contains("division by zero"));
}

#[test]
fn test_logical_operators() {
    assert_eq!(eval_expr("TRUE && FALSE"), Value::Bool(false));
    assert_eq!(eval_expr("TRUE && TRUE"), Value::Bool(true));
    assert_eq!(eval_expr("FALSE || TRUE"), Value::Bool(true));
    assert_eq!(eval_expr("!TRUE"), Value::Bool(false));
    assert_eq!(eval_expr("!(1 > 2)"), Value::Bool(true));
}

#[test]
fn test_logical_operators_are_not_short_circuiting() {
    // Unlike IF, operators force both operands.
    assert!(try_eval("FALSE && 1/0 > 0").is_err());
}

#[test]
fn test_relational_operators() {
    assert_eq!(eval_expr("3 > 2"), Value::Bool(true));
    assert_eq!(eval_expr("2 >= 2"), Value::Bool(true));
    assert_eq!(eval_expr("2 < 2"), Value::Bool(false));
    assert_eq!(eval_expr("2 <= 2"), Value::Bool(true));
    assert_eq!(eval_expr("'abc' < 'abd'"), Value::Bool(true));
}

#[test]
fn test_equality_operators() {
    assert_eq!(eval_expr("1 == 1.0"), Value::Bool(true));
    assert_eq!(eval_expr("1 = 1"), Value::Bool(true));
    assert_eq!(eval_expr("'abc' == 'abc'"), Value::Bool(true));
    assert_eq!(eval_expr("1 != 2"), Value::Bool(true));
    assert_eq!(eval_expr("1 <> 1"), Value::Bool(false));
    assert_eq!(eval_expr("TRUE == 1"), Value::Bool(true));
}

#[test]
fn test_coercion_failure_is_loud() {
    assert!(try_eval("'abc' * 2").is_err());
    assert!(try_eval("'abc' && TRUE").is_err());
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(eval_expr("2+3*4"), Value::Number(14.0));
    assert_eq!(eval_expr("(2+3)*4"), Value::Number(20.0));
    assert_eq!(eval_expr("10-3-2"), Value::Number(5.0));
    assert_eq!(eval_expr("2*3%4"), Value::Number(2.0));
    assert_eq!(eval_expr("1+2 > 2 && 4/2 == 2"), Value::Bool(true));
}
