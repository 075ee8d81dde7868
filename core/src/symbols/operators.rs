//! Operator registry.

use std::sync::Arc;

use ecow::EcoString;
use hashbrown::HashMap;

use crate::evaluator::RuntimeError;
use crate::values::Value;

/// Eager evaluation function of an operator. Receives its operands
/// already forced, in source order.
pub type OperatorFn = dyn Fn(&[Value]) -> Result<Value, RuntimeError> + Send + Sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// An infix or prefix operator: symbol, precedence, associativity, arity
/// (1 = unary, 2 = binary) and its evaluation function.
#[derive(Clone)]
pub struct Operator {
    symbol: EcoString,
    pub precedence: u8,
    pub assoc: Assoc,
    pub arity: u8,
    eval: Arc<OperatorFn>,
}

impl Operator {
    /// A prefix operator taking one operand.
    pub fn unary(
        symbol: &str,
        precedence: u8,
        assoc: Assoc,
        eval: impl Fn(&Value) -> Result<Value, RuntimeError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            precedence,
            assoc,
            arity: 1,
            eval: Arc::new(move |args: &[Value]| eval(&args[0])),
        }
    }

    /// An infix operator taking two operands.
    pub fn binary(
        symbol: &str,
        precedence: u8,
        assoc: Assoc,
        eval: impl Fn(&Value, &Value) -> Result<Value, RuntimeError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            precedence,
            assoc,
            arity: 2,
            eval: Arc::new(move |args: &[Value]| eval(&args[0], &args[1])),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Apply to already-forced operands. `args.len()` must equal the
    /// arity; the compiler's validation pass guarantees this.
    pub fn apply(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        (self.eval)(args)
    }
}

impl core::fmt::Debug for Operator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .field("assoc", &self.assoc)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Registry of operators, keyed by symbol.
#[derive(Debug, Clone, Default)]
pub struct Operators {
    entries: HashMap<EcoString, Operator>,
}

impl Operators {
    /// Register an operator, replacing any previous one with the same
    /// symbol in this layer.
    pub fn insert(&mut self, operator: Operator) {
        self.entries.insert(operator.symbol.clone(), operator);
    }

    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.entries.get(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
