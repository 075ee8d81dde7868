//! Variable registry.

use core::fmt;
use std::sync::Arc;

use ecow::EcoString;
use hashbrown::HashMap;

use crate::values::Value;

/// Getter for a dynamic variable. Reads host-owned state; called once per
/// evaluation of each referencing site.
pub type VariableFn = dyn Fn() -> Value + Send + Sync;

/// A named value: either a constant, or a dynamic handle whose getter is
/// consulted at every evaluation (this is how expressions observe state
/// the host refreshes between ticks).
#[derive(Clone)]
pub enum Variable {
    Const(Value),
    Dynamic(Arc<VariableFn>),
}

impl Variable {
    /// Wrap a getter closure into a dynamic variable.
    pub fn dynamic(getter: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Variable::Dynamic(Arc::new(getter))
    }

    /// Current value of the variable.
    pub fn read(&self) -> Value {
        match self {
            Variable::Const(v) => v.clone(),
            Variable::Dynamic(getter) => getter(),
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Const(v) => f.debug_tuple("Const").field(v).finish(),
            Variable::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Registry of variables, keyed case-insensitively by name.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    entries: HashMap<EcoString, Variable>,
}

impl Variables {
    /// Register a variable, replacing any previous one with the same name
    /// in this layer.
    pub fn insert(&mut self, name: &str, variable: Variable) {
        let key: EcoString = name.to_ascii_uppercase().into();
        self.entries.insert(key, variable);
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.get(name.to_ascii_uppercase().as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
