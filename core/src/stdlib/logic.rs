//! Logical and selection functions.
//!
//! Constants: TRUE, FALSE
//! Functions: IF, NOT, ONEOF, MATCH

use regex::Regex;

use crate::compiler::Expr;
use crate::evaluator::{Evaluator, RuntimeError, RuntimeErrorKind};
use crate::symbols::{Arity, Environment, Function, Variable};
use crate::values::Value;

pub(crate) fn register(env: &mut Environment) {
    env.variables
        .insert("TRUE", Variable::Const(Value::Bool(true)));
    env.variables
        .insert("FALSE", Variable::Const(Value::Bool(false)));

    let funcs = &mut env.functions;

    // Only the selected branch is ever forced; the other may safely
    // contain operations that would fail, like a division by zero.
    funcs.insert(Function::new(
        "IF",
        Arity::Exact(3),
        |ev: &Evaluator, args: &[&Expr]| {
            if ev.eval(args[0])?.as_bool()? {
                ev.eval(args[1])
            } else {
                ev.eval(args[2])
            }
        },
    ));

    funcs.insert(Function::new(
        "NOT",
        Arity::Exact(1),
        |ev: &Evaluator, args: &[&Expr]| Ok(Value::Bool(!ev.eval(args[0])?.as_bool()?)),
    ));

    // Membership test: does the selector equal any of the candidates?
    // Candidates after the first match are not forced.
    funcs.insert(Function::new(
        "ONEOF",
        Arity::AtLeast(2),
        |ev: &Evaluator, args: &[&Expr]| {
            let selector = ev.eval(args[0])?;
            for candidate in &args[1..] {
                if selector.loosely_equals(&ev.eval(candidate)?) {
                    return Ok(Value::Bool(true));
                }
            }
            Ok(Value::Bool(false))
        },
    ));

    funcs.insert(Function::new(
        "MATCH",
        Arity::Exact(2),
        |ev: &Evaluator, args: &[&Expr]| {
            let pattern = ev.eval(args[0])?.to_text();
            let text = ev.eval(args[1])?.to_text();
            // TODO: memoize compiled patterns keyed by pattern text.
            let regex = Regex::new(&pattern).map_err(|e| {
                RuntimeError::new(RuntimeErrorKind::InvalidRegex(e.to_string().into()))
            })?;
            Ok(Value::Bool(regex.is_match(&text)))
        },
    ));
}

#[cfg(test)]
#[path = "logic_test.rs"]
mod logic_test;
