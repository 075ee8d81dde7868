//! The dynamically-typed runtime value.
//!
//! Every expression evaluates to a [`Value`]: a number, a boolean, or a
//! string. Values are immutable once constructed and cheap to clone
//! (strings are refcounted [`EcoString`]s).
//!
//! Coercion and comparison rules live here so that operators, built-in
//! functions and host functions all agree on them:
//!
//! - `as_number`: numbers are identity, booleans are 0/1, strings are
//!   parsed and fail loudly when non-numeric.
//! - `as_bool`: booleans are identity, numbers are non-zero = true,
//!   strings accept only `"true"`/`"false"` (any case) and fail loudly
//!   otherwise.
//! - `compare`: a total order. Two strings compare lexicographically;
//!   everything else compares numerically, with a string falling back to
//!   lexicographic comparison of the display projections when it does not
//!   parse as a number.
//! - `add`: numeric sum, unless either operand is a string, in which case
//!   both display projections are concatenated.

use core::cmp::Ordering;
use core::fmt;

use ecow::EcoString;
use static_assertions::assert_impl_all;

/// Error produced by a failed coercion, e.g. `'abc'` used as a number.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ValueError(pub EcoString);

/// A dynamically-typed runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Str(EcoString),
}

assert_impl_all!(Value: Send, Sync, Clone);

impl Value {
    /// Name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
        }
    }

    /// Coerce to a number. Strings are parsed; parse failure is an error.
    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Str(s) => s.trim().parse::<f64>().map_err(|_| {
                ValueError(ecow::eco_format!("cannot convert '{s}' to a number"))
            }),
        }
    }

    /// Coerce to a boolean. Numbers are non-zero = true; strings accept
    /// only `"true"` and `"false"`, case-insensitively.
    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Number(n) => Ok(*n != 0.0),
            Value::Str(s) => {
                if s.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(ValueError(ecow::eco_format!(
                        "cannot convert '{s}' to a boolean"
                    )))
                }
            }
        }
    }

    /// The display projection: what the value looks like as text.
    pub fn to_text(&self) -> EcoString {
        match self {
            Value::Str(s) => s.clone(),
            other => ecow::eco_format!("{other}"),
        }
    }

    /// Numeric interpretation, if one exists. Unlike [`Value::as_number`]
    /// this never fails: a non-numeric string yields `None`.
    fn numeric_value(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Str(s) => s.trim().parse::<f64>().ok(),
        }
    }

    /// Total ordering across all values, used by the relational operators
    /// and by MIN/MAX/ONEOF.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ => match (self.numeric_value(), other.numeric_value()) {
                (Some(a), Some(b)) => num_cmp(a, b),
                _ => self.to_text().cmp(&other.to_text()),
            },
        }
    }

    /// Equality under [`Value::compare`], so `1 == 1.0` and `1 == TRUE`.
    pub fn loosely_equals(&self, other: &Value) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// Polymorphic addition: numeric sum, or concatenation when either
    /// operand is a string. Total; never fails.
    pub fn add(&self, other: &Value) -> Value {
        match (self, other) {
            (Value::Str(_), _) | (_, Value::Str(_)) => {
                let mut out = self.to_text();
                out.push_str(&other.to_text());
                Value::Str(out)
            }
            (a, b) => {
                // Neither side is a string, so the numeric interpretation
                // always exists.
                let a = a.numeric_value().unwrap_or_default();
                let b = b.numeric_value().unwrap_or_default();
                Value::Number(a + b)
            }
        }
    }
}

/// Numeric comparison that stays total in the presence of NaN.
fn num_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                // Render integral values without a trailing ".0".
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

impl From<EcoString> for Value {
    fn from(s: EcoString) -> Self {
        Value::Str(s)
    }
}

#[cfg(test)]
#[path = "dynamic_test.rs"]
mod dynamic_test;
