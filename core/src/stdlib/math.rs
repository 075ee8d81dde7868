//! Math functions and constants.
//!
//! Constants: PI, e
//! Functions: ABS, ROUND, FLOOR, CEILING, SQRT, SIN, COS, TAN, RAD, DEG,
//!            MAX, MIN, CLAMP, RANDOM
//!
//! The trig functions take *degrees*; RAD and DEG convert between degrees
//! and radians.

use core::cmp::Ordering;

use super::unary_number;
use crate::compiler::Expr;
use crate::evaluator::{Evaluator, RuntimeError};
use crate::symbols::{Arity, Environment, Function, Variable};
use crate::values::Value;

pub(crate) fn register(env: &mut Environment) {
    env.variables
        .insert("PI", Variable::Const(Value::Number(core::f64::consts::PI)));
    env.variables
        .insert("e", Variable::Const(Value::Number(core::f64::consts::E)));

    let funcs = &mut env.functions;

    funcs.insert(unary_number("ABS", f64::abs));
    funcs.insert(unary_number("ROUND", f64::round));
    funcs.insert(unary_number("FLOOR", f64::floor));
    funcs.insert(unary_number("CEILING", f64::ceil));
    // SQRT of a negative yields NaN (IEEE 754 semantics).
    funcs.insert(unary_number("SQRT", f64::sqrt));

    funcs.insert(unary_number("SIN", |deg| deg.to_radians().sin()));
    funcs.insert(unary_number("COS", |deg| deg.to_radians().cos()));
    funcs.insert(unary_number("TAN", |deg| deg.to_radians().tan()));
    funcs.insert(unary_number("RAD", f64::to_radians));
    funcs.insert(unary_number("DEG", f64::to_degrees));

    funcs.insert(Function::new(
        "MAX",
        Arity::AtLeast(1),
        |ev: &Evaluator, args: &[&Expr]| extreme(ev, args, Ordering::Greater),
    ));
    funcs.insert(Function::new(
        "MIN",
        Arity::AtLeast(1),
        |ev: &Evaluator, args: &[&Expr]| extreme(ev, args, Ordering::Less),
    ));

    funcs.insert(Function::new(
        "CLAMP",
        Arity::Exact(3),
        |ev: &Evaluator, args: &[&Expr]| {
            let value = ev.eval(args[0])?.as_number()?;
            let lo = ev.eval(args[1])?.as_number()?;
            let hi = ev.eval(args[2])?.as_number()?;
            Ok(Value::Number(value.max(lo).min(hi)))
        },
    ));

    funcs.insert(Function::new(
        "RANDOM",
        Arity::Exact(0),
        |_: &Evaluator, _: &[&Expr]| Ok(Value::Number(rand::random::<f64>())),
    ));
}

/// The argument that wins every comparison in the given direction, under
/// the total value ordering.
fn extreme(ev: &Evaluator, args: &[&Expr], keep: Ordering) -> Result<Value, RuntimeError> {
    let values = ev.eval_all(args)?;
    let mut best = values[0].clone();
    for value in &values[1..] {
        if value.compare(&best) == keep {
            best = value.clone();
        }
    }
    Ok(best)
}

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;
