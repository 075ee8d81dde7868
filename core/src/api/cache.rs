//! The expression cache: the front door for hosts that evaluate textual
//! expressions repeatedly.
//!
//! `eval(source)` compiles on first sight and memoizes the result, in
//! both directions. A source that compiled is never re-parsed; a source
//! that failed is remembered on the failed list and yields the same error
//! on every subsequent call without touching the compiler again. There is
//! no invalidation path: entries never transition back to uncompiled.
//!
//! # Concurrency
//!
//! The cache is confined to one thread (interior mutability, not `Sync`).
//! Compiled programs themselves are immutable; the contract for hosts is
//! to call [`ExpressionCache::update`] once at the start of a tick, before
//! the evaluations that depend on the refreshed variables.

use core::cell::{Cell, RefCell};
use std::sync::Arc;

use ecow::EcoString;
use hashbrown::HashMap;

use super::engine::Engine;
use super::error::Error;
use super::expression::{self, CompiledExpression};
use super::options::EvalOptions;
use crate::compiler::Expr;
use crate::evaluator::{Evaluator, RuntimeError};
use crate::symbols::{Arity, Operator};
use crate::values::Value;

/// A handle the host registers to have its state refreshed by
/// [`ExpressionCache::update`] once per tick, before evaluations read it
/// through dynamic variables.
pub trait Refresh: Send + Sync {
    fn refresh(&self);
}

enum CacheEntry<'arena> {
    Compiled(CompiledExpression<'arena>),
    Failed(Error),
}

/// Memoizing wrapper around an [`Engine`].
pub struct ExpressionCache<'arena> {
    engine: Engine<'arena>,
    entries: RefCell<HashMap<EcoString, CacheEntry<'arena>>>,
    failed: RefCell<Vec<EcoString>>,
    providers: RefCell<Vec<Arc<dyn Refresh>>>,
    compiles: Cell<u64>,
}

impl<'arena> ExpressionCache<'arena> {
    pub fn new(engine: Engine<'arena>) -> Self {
        Self {
            engine,
            entries: RefCell::new(HashMap::new()),
            failed: RefCell::new(Vec::new()),
            providers: RefCell::new(Vec::new()),
            compiles: Cell::new(0),
        }
    }

    pub fn engine(&self) -> &Engine<'arena> {
        &self.engine
    }

    /// Evaluate `source`, compiling it the first time it is seen.
    pub fn eval(&self, source: &str) -> Result<Value, Error> {
        let (root, options) = self.lookup_or_compile(source)?;
        expression::run(root, options, source)
    }

    /// Whether `source` compiles. The empty string is considered valid by
    /// convention. Results are cached like [`ExpressionCache::eval`]'s.
    pub fn check(&self, source: &str) -> bool {
        if source.trim().is_empty() {
            return true;
        }
        self.lookup_or_compile(source).is_ok()
    }

    /// Refresh all attached providers. Call once per tick, before the
    /// evaluations that read the refreshed state.
    pub fn update(&self) {
        let providers = self.providers.borrow();
        tracing::trace!(providers = providers.len(), "refreshing dynamic variables");
        for provider in providers.iter() {
            provider.refresh();
        }
    }

    /// Attach a provider to be refreshed by [`ExpressionCache::update`].
    pub fn attach(&self, provider: Arc<dyn Refresh>) {
        self.providers.borrow_mut().push(provider);
    }

    /// Sources that failed to compile, in first-seen order.
    pub fn failed_sources(&self) -> Vec<EcoString> {
        self.failed.borrow().clone()
    }

    /// How many times the full compilation pipeline has run. Diagnostics;
    /// lets hosts (and tests) confirm that repeated evaluation does not
    /// recompile.
    pub fn compile_count(&self) -> u64 {
        self.compiles.get()
    }

    /// Register a constant on the underlying engine. Affects future
    /// compilations only.
    pub fn register_variable(&mut self, name: &str, value: Value) {
        self.engine.register_variable(name, value);
    }

    /// Register a dynamic variable on the underlying engine.
    pub fn register_dynamic_variable(
        &mut self,
        name: &str,
        getter: impl Fn() -> Value + Send + Sync + 'static,
    ) {
        self.engine.register_dynamic_variable(name, getter);
    }

    /// Register a function on the underlying engine.
    pub fn register_function(
        &mut self,
        name: &str,
        arity: Arity,
        eval: impl for<'a> Fn(&Evaluator, &[&'a Expr<'a>]) -> Result<Value, RuntimeError>
        + Send
        + Sync
        + 'static,
    ) {
        self.engine.register_function(name, arity, eval);
    }

    /// Register an operator on the underlying engine.
    pub fn register_operator(&mut self, operator: Operator) {
        self.engine.register_operator(operator);
    }

    /// Find or create the cache entry for `source`, returning what an
    /// evaluation needs. The borrow is released before evaluation so host
    /// functions may call back into this cache.
    fn lookup_or_compile(
        &self,
        source: &str,
    ) -> Result<(&'arena Expr<'arena>, EvalOptions), Error> {
        if let Some(entry) = self.entries.borrow().get(source) {
            return match entry {
                CacheEntry::Compiled(program) => {
                    Ok((program.root(), program.default_eval_options().clone()))
                }
                CacheEntry::Failed(error) => Err(error.clone()),
            };
        }

        tracing::debug!(%source, "expression cache miss");
        self.compiles.set(self.compiles.get() + 1);
        match self.engine.compile(source) {
            Ok(program) => {
                let parts = (program.root(), program.default_eval_options().clone());
                self.entries
                    .borrow_mut()
                    .insert(source.into(), CacheEntry::Compiled(program));
                Ok(parts)
            }
            Err(error) => {
                tracing::debug!(%source, %error, "compilation failed, caching failure");
                self.entries
                    .borrow_mut()
                    .insert(source.into(), CacheEntry::Failed(error.clone()));
                self.failed.borrow_mut().push(source.into());
                Err(error)
            }
        }
    }
}
