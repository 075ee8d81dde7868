//! Tarn - a small embeddable expression language
//!
//! # Overview
//!
//! Tarn evaluates textual expressions against live host state. It is built
//! for hosts that compile an expression once and evaluate it every tick
//! against variables the host refreshes: condition triggers, gauge
//! formulas, spawn rules, alert thresholds.
//!
//! The language is deliberately small: numbers, booleans and strings,
//! infix operators, function calls, and nothing else. No loops, no
//! assignment, no user-defined functions, no I/O.
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use tarn::{Engine, EngineOptions, Value};
//!
//! // Create an arena for compiled programs
//! let arena = Bump::new();
//!
//! // Create an engine with a host environment
//! let engine = Engine::new(EngineOptions::default(), &arena, |env| {
//!     env.variable("ALTITUDE_FT", Value::Number(12000.0))
//! });
//!
//! // Compile once, evaluate as often as needed
//! let expr = engine.compile("IF(ALTITUDE_FT > 10000, 'on', 'off')").unwrap();
//! assert_eq!(expr.eval().unwrap(), Value::from("on"));
//! ```
//!
//! # Caching and live state
//!
//! [`ExpressionCache`] memoizes compilation per source string, remembers
//! sources that failed to compile (a broken expression costs one compile,
//! ever), and drives the per-tick refresh of dynamic variables:
//!
//! ```
//! use bumpalo::Bump;
//! use tarn::{Engine, EngineOptions, ExpressionCache, Value};
//!
//! let arena = Bump::new();
//! let engine = Engine::new(EngineOptions::default(), &arena, |env| {
//!     env.dynamic_variable("WIND_KTS", || Value::Number(14.0))
//! });
//! let cache = ExpressionCache::new(engine);
//!
//! cache.update(); // refresh attached providers, once per tick
//! assert_eq!(cache.eval("WIND_KTS > 10").unwrap(), Value::Bool(true));
//! assert_eq!(cache.compile_count(), 1);
//! ```

// Error rendering utilities
pub mod error_renderer;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};

// Re-export public API from tarn_core
pub use tarn_core::api::{
    CompiledExpression, Diagnostic, Engine, EngineOptions, EnvironmentBuilder, Error,
    EvalOptions, EvalOptionsOverride, ExpressionCache, Refresh, RelatedInfo, Severity,
};

// Re-export commonly used types and values
pub use tarn_core::evaluator::{Evaluator, RuntimeError, RuntimeErrorKind};
pub use tarn_core::parser::Span;
pub use tarn_core::symbols::{self, Arity, Assoc, Environment, Function, Operator, Variable};
pub use tarn_core::values::{self, Value};
