//! Function registry.

use core::fmt;
use std::sync::Arc;

use ecow::EcoString;
use hashbrown::HashMap;

use crate::compiler::Expr;
use crate::evaluator::{Evaluator, RuntimeError};
use crate::values::Value;

/// Lazy evaluation function: receives the *unevaluated* argument subtrees
/// and the evaluator to force them with. Forcing only what is needed is
/// what lets `IF(cond, a, b)` skip the unselected branch entirely.
pub type FunctionFn = dyn for<'a> Fn(&Evaluator, &[&'a Expr<'a>]) -> Result<Value, RuntimeError>
    + Send
    + Sync;

/// Declared argument count of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(u8),
    AtLeast(u8),
}

impl Arity {
    pub fn accepts(&self, found: usize) -> bool {
        match self {
            Arity::Exact(n) => found == *n as usize,
            Arity::AtLeast(n) => found >= *n as usize,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "exactly {n}"),
            Arity::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

/// A callable function with a declared arity and a lazy evaluation
/// function.
#[derive(Clone)]
pub struct Function {
    name: EcoString,
    pub arity: Arity,
    eval: Arc<FunctionFn>,
}

impl Function {
    pub fn new(
        name: &str,
        arity: Arity,
        eval: impl for<'a> Fn(&Evaluator, &[&'a Expr<'a>]) -> Result<Value, RuntimeError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            eval: Arc::new(eval),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with unevaluated argument subtrees. The validation pass has
    /// already checked the argument count against the declared arity.
    pub fn call<'a>(
        &self,
        evaluator: &Evaluator,
        args: &[&'a Expr<'a>],
    ) -> Result<Value, RuntimeError> {
        (self.eval)(evaluator, args)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Registry of functions, keyed case-insensitively by name.
#[derive(Debug, Clone, Default)]
pub struct Functions {
    entries: HashMap<EcoString, Function>,
}

impl Functions {
    /// Register a function, replacing any previous one with the same name
    /// in this layer.
    pub fn insert(&mut self, function: Function) {
        let key: EcoString = function.name.to_ascii_uppercase().into();
        self.entries.insert(key, function);
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.entries.get(name.to_ascii_uppercase().as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
