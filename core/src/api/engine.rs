//! The Tarn compilation engine.

use bumpalo::Bump;

use super::{CompiledExpression, EngineOptions, EnvironmentBuilder, Error};
use crate::compiler::Expr;
use crate::evaluator::{Evaluator, RuntimeError};
use crate::parser::tokenizer;
use crate::symbols::{Arity, Environment, Operator, Scope, Variable};
use crate::values::Value;

/// The Tarn compilation engine.
///
/// The engine manages:
/// - Runtime configuration ([`EngineOptions`])
/// - The host environment (constants, dynamic variables, functions,
///   operators), layered over the built-in defaults
/// - The compilation arena all programs are allocated into
///
/// # Lifetimes
///
/// - `'arena`: lifetime of the arena holding compiled trees. All compiled
///   expressions borrow from this arena.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use tarn_core::api::{Engine, EngineOptions};
/// use tarn_core::values::Value;
///
/// let arena = Bump::new();
/// let engine = Engine::new(EngineOptions::default(), &arena, |env| {
///     env.variable("ALTITUDE", Value::Number(1200.0))
/// });
///
/// let expr = engine.compile("CLAMP(ALTITUDE / 1000, 0, 10)").unwrap();
/// assert_eq!(expr.eval().unwrap(), Value::Number(1.2));
/// ```
pub struct Engine<'arena> {
    arena: &'arena Bump,
    environment: Environment,
    options: EngineOptions,
}

impl<'arena> Engine<'arena> {
    /// Create a new engine with a host environment.
    ///
    /// The initialization closure receives an [`EnvironmentBuilder`] and
    /// returns it with the host's registrations applied.
    pub fn new(
        options: EngineOptions,
        arena: &'arena Bump,
        init: impl FnOnce(EnvironmentBuilder) -> EnvironmentBuilder,
    ) -> Self {
        let environment = init(EnvironmentBuilder::new())
            .build()
            .expect("environment should build successfully");
        Self {
            arena,
            environment,
            options,
        }
    }

    /// Access the engine's environment.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Register a constant after construction, replacing any previous
    /// engine-level registration with the same name. Already-compiled
    /// expressions are unaffected.
    pub fn register_variable(&mut self, name: &str, value: Value) {
        self.environment.variables.insert(name, Variable::Const(value));
    }

    /// Register a dynamic variable after construction.
    pub fn register_dynamic_variable(
        &mut self,
        name: &str,
        getter: impl Fn() -> Value + Send + Sync + 'static,
    ) {
        self.environment
            .variables
            .insert(name, Variable::dynamic(getter));
    }

    /// Register a function after construction.
    pub fn register_function(
        &mut self,
        name: &str,
        arity: Arity,
        eval: impl for<'a> Fn(&Evaluator, &[&'a Expr<'a>]) -> Result<Value, RuntimeError>
        + Send
        + Sync
        + 'static,
    ) {
        self.environment
            .functions
            .insert(crate::symbols::Function::new(name, arity, eval));
    }

    /// Register an operator after construction.
    pub fn register_operator(&mut self, operator: Operator) {
        self.environment.operators.insert(operator);
    }

    /// Compile an expression against the engine environment.
    pub fn compile(&self, source: &str) -> Result<CompiledExpression<'arena>, Error> {
        self.compile_inner(source, None)
    }

    /// Compile with an additional overlay environment that shadows the
    /// engine environment for this expression only.
    pub fn compile_with(
        &self,
        source: &str,
        overlay: &Environment,
    ) -> Result<CompiledExpression<'arena>, Error> {
        self.compile_inner(source, Some(overlay))
    }

    fn compile_inner(
        &self,
        source: &str,
        overlay: Option<&Environment>,
    ) -> Result<CompiledExpression<'arena>, Error> {
        tracing::debug!(%source, "compiling expression");
        let scope = Scope::new(&self.environment, overlay);

        // Intern the source so tokens and tree nodes can borrow from the
        // arena instead of the caller's string.
        let interned: &'arena str = self.arena.alloc_str(source);

        let symbols = scope.operator_symbols();
        let tokens = tokenizer::tokenize(interned, &symbols)
            .map_err(|e| Error::compilation(source, e.to_diagnostic()))?;

        let (root, rpn) = crate::compiler::compile(self.arena, &tokens, &scope)
            .map_err(|e| Error::compilation(source, e.to_diagnostic()))?;

        Ok(CompiledExpression::new(
            root,
            rpn,
            source.into(),
            self.options.default_eval_options.clone(),
        ))
    }
}
