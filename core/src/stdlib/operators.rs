//! The built-in operator set.
//!
//! Symbol : precedence : associativity : arity, matching the catalog the
//! language guarantees. Precedence values are only meaningful relative to
//! one another.

use core::cmp::Ordering;

use crate::evaluator::{RuntimeError, RuntimeErrorKind};
use crate::symbols::{Assoc, Environment, Operator};
use crate::values::Value;

pub(crate) fn register(env: &mut Environment) {
    let ops = &mut env.operators;

    ops.insert(Operator::unary("!", 20, Assoc::Right, |v| {
        Ok(Value::Bool(!v.as_bool()?))
    }));

    // `+` is polymorphic: numeric sum, or concatenation when either side
    // is a string.
    ops.insert(Operator::binary("+", 20, Assoc::Left, |a, b| Ok(a.add(b))));
    ops.insert(Operator::binary("-", 20, Assoc::Left, |a, b| {
        Ok(Value::Number(a.as_number()? - b.as_number()?))
    }));

    ops.insert(Operator::binary("*", 30, Assoc::Left, |a, b| {
        Ok(Value::Number(a.as_number()? * b.as_number()?))
    }));
    ops.insert(Operator::binary("/", 30, Assoc::Left, |a, b| {
        let divisor = b.as_number()?;
        if divisor == 0.0 {
            return Err(RuntimeError::new(RuntimeErrorKind::DivisionByZero));
        }
        Ok(Value::Number(a.as_number()? / divisor))
    }));
    ops.insert(Operator::binary("%", 30, Assoc::Left, |a, b| {
        let divisor = b.as_number()?;
        if divisor == 0.0 {
            return Err(RuntimeError::new(RuntimeErrorKind::DivisionByZero));
        }
        Ok(Value::Number(a.as_number()? % divisor))
    }));

    // Both operands are forced before these run; `IF` is the lazy
    // conditional, not `&&`/`||`.
    ops.insert(Operator::binary("&&", 4, Assoc::Left, |a, b| {
        Ok(Value::Bool(a.as_bool()? && b.as_bool()?))
    }));
    ops.insert(Operator::binary("||", 2, Assoc::Left, |a, b| {
        Ok(Value::Bool(a.as_bool()? || b.as_bool()?))
    }));

    ops.insert(relation(">", 10, |o| o == Ordering::Greater));
    ops.insert(relation(">=", 10, |o| o != Ordering::Less));
    ops.insert(relation("<", 10, |o| o == Ordering::Less));
    ops.insert(relation("<=", 10, |o| o != Ordering::Greater));

    ops.insert(relation("=", 7, |o| o == Ordering::Equal));
    ops.insert(relation("==", 7, |o| o == Ordering::Equal));
    ops.insert(relation("!=", 7, |o| o != Ordering::Equal));
    ops.insert(relation("<>", 7, |o| o != Ordering::Equal));
}

/// A relational operator over the total value ordering.
fn relation(
    symbol: &str,
    precedence: u8,
    pred: impl Fn(Ordering) -> bool + Send + Sync + 'static,
) -> Operator {
    Operator::binary(symbol, precedence, Assoc::Left, move |a, b| {
        Ok(Value::Bool(pred(a.compare(b))))
    })
}

#[cfg(test)]
#[path = "operators_test.rs"]
mod operators_test;
