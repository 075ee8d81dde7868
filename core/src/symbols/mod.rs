//! Case-insensitive symbol registries.
//!
//! Three tables ([`Operators`], [`Functions`], [`Variables`]) grouped
//! into an [`Environment`]. The process-wide default environment (built-in
//! operators, functions and constants) is immutable and shared; each engine
//! carries its own environment for host registrations, and a compilation
//! may pass one more overlay. [`Scope`] performs the layered lookup:
//! overlay first, then the engine environment, then the defaults. Inner
//! layers shadow outer ones and never mutate them.

pub mod functions;
pub mod operators;
pub mod variables;

pub use functions::{Arity, Function, Functions};
pub use operators::{Assoc, Operator, Operators};
pub use variables::{Variable, Variables};

/// One layer of symbol tables.
#[derive(Clone, Default)]
pub struct Environment {
    pub operators: Operators,
    pub functions: Functions,
    pub variables: Variables,
}

/// Layered lookup over up to three environments.
///
/// Construction is cheap; a scope lives for one compilation.
pub struct Scope<'a> {
    layers: smallvec::SmallVec<[&'a Environment; 3]>,
}

impl<'a> Scope<'a> {
    /// Overlay (optional) → engine environment → process defaults.
    pub fn new(engine: &'a Environment, overlay: Option<&'a Environment>) -> Self {
        let mut layers = smallvec::SmallVec::new();
        if let Some(overlay) = overlay {
            layers.push(overlay);
        }
        layers.push(engine);
        layers.push(crate::stdlib::defaults());
        Self { layers }
    }

    pub fn operator(&self, symbol: &str) -> Option<&Operator> {
        self.layers.iter().find_map(|env| env.operators.get(symbol))
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.layers.iter().find_map(|env| env.functions.get(name))
    }

    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.layers.iter().find_map(|env| env.variables.get(name))
    }

    /// Union of all registered operator symbols, for the tokenizer.
    pub fn operator_symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .layers
            .iter()
            .flat_map(|env| env.operators.symbols())
            .collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }
}
