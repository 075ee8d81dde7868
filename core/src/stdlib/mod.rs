//! Built-in operators, functions and constants.
//!
//! The default environment is built once, at first use, and shared by
//! every engine in the process. It is immutable: hosts layer their own
//! registrations over it, they never write into it.

pub mod logic;
pub mod math;
pub mod operators;

use lazy_static::lazy_static;

use crate::compiler::Expr;
use crate::evaluator::Evaluator;
use crate::symbols::{Arity, Environment, Function};
use crate::values::Value;

lazy_static! {
    static ref DEFAULTS: Environment = {
        let mut env = Environment::default();
        operators::register(&mut env);
        math::register(&mut env);
        logic::register(&mut env);
        env
    };
}

/// The process-wide default environment.
pub fn defaults() -> &'static Environment {
    &DEFAULTS
}

/// An eager one-argument numeric function: forces its argument, coerces
/// it to a number, applies `f`.
pub(crate) fn unary_number(
    name: &str,
    f: impl Fn(f64) -> f64 + Send + Sync + 'static,
) -> Function {
    Function::new(name, Arity::Exact(1), move |ev: &Evaluator, args: &[&Expr]| {
        let x = ev.eval(args[0])?.as_number()?;
        Ok(Value::Number(f(x)))
    })
}
