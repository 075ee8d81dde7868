//! Environment builder for registering host symbols.

use core::fmt;

use crate::compiler::Expr;
use crate::evaluator::{Evaluator, RuntimeError};
use crate::symbols::{Arity, Environment, Function, Operator, Variable};
use crate::values::Value;

/// Builder for an engine's environment: the host-registered constants,
/// dynamic variables, functions and operators that expressions may use on
/// top of the built-in defaults.
///
/// Registrations shadow the defaults with the same name but never mutate
/// them; other engines are unaffected.
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
///     env.variable("GRAVITY", Value::Number(9.81))
/// });
///
/// let expr = engine.compile("GRAVITY * 2").unwrap();
/// assert_eq!(expr.eval().unwrap(), Value::Number(19.62));
/// ```
pub struct EnvironmentBuilder {
    environment: Environment,
    duplicates: Vec<String>,
}

impl EnvironmentBuilder {
    pub fn new() -> Self {
        Self {
            environment: Environment::default(),
            duplicates: Vec::new(),
        }
    }

    /// Register a constant.
    pub fn variable(mut self, name: &str, value: Value) -> Self {
        self.check_duplicate_variable(name);
        self.environment
            .variables
            .insert(name, Variable::Const(value));
        self
    }

    /// Register a dynamic variable. The getter is consulted at every
    /// evaluation of each referencing expression.
    pub fn dynamic_variable(
        mut self,
        name: &str,
        getter: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Self {
        self.check_duplicate_variable(name);
        self.environment
            .variables
            .insert(name, Variable::dynamic(getter));
        self
    }

    /// Register a function. The evaluation closure receives its arguments
    /// *unevaluated* and forces them through the evaluator as needed.
    pub fn function(
        mut self,
        name: &str,
        arity: Arity,
        eval: impl for<'a> Fn(&Evaluator, &[&'a Expr<'a>]) -> Result<Value, RuntimeError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        if self.environment.functions.get(name).is_some() {
            self.duplicates.push(name.to_string());
            return self;
        }
        self.environment
            .functions
            .insert(Function::new(name, arity, eval));
        self
    }

    /// Register an operator.
    pub fn operator(mut self, operator: Operator) -> Self {
        if self.environment.operators.get(operator.symbol()).is_some() {
            self.duplicates.push(operator.symbol().to_string());
            return self;
        }
        self.environment.operators.insert(operator);
        self
    }

    /// Build the final environment.
    ///
    /// Returns an error if any registration failed (e.g. duplicates).
    pub fn build(self) -> Result<Environment, BindError> {
        if !self.duplicates.is_empty() {
            return Err(BindError::Duplicate(self.duplicates));
        }
        Ok(self.environment)
    }

    fn check_duplicate_variable(&mut self, name: &str) {
        if self.environment.variables.get(name).is_some() {
            self.duplicates.push(name.to_string());
        }
    }
}

impl Default for EnvironmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Error produced by [`EnvironmentBuilder::build`].
#[derive(Debug, Clone)]
pub enum BindError {
    /// The same name was registered more than once.
    Duplicate(Vec<String>),
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::Duplicate(names) => {
                write!(f, "duplicate registration:")?;
                for name in names {
                    write!(f, " '{name}'")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for BindError {}
