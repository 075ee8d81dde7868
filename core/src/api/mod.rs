//! Public API for the Tarn expression language.
//!
//! This module provides the stable public API for compiling and
//! evaluating Tarn expressions:
//!
//! 1. [`Engine`]: compiles expressions against a host environment.
//! 2. [`CompiledExpression`]: an immutable program, evaluated on demand.
//! 3. [`ExpressionCache`]: memoizes compilation per source string and
//!    drives the per-tick refresh of dynamic variables.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use tarn_core::api::{Engine, EngineOptions, ExpressionCache};
//! use tarn_core::values::Value;
//!
//! let arena = Bump::new();
//! let engine = Engine::new(EngineOptions::default(), &arena, |env| {
//!     env.variable("WIND", Value::Number(12.0))
//! });
//! let cache = ExpressionCache::new(engine);
//!
//! assert_eq!(
//!     cache.eval("IF(WIND > 10, 'gusty', 'calm')").unwrap(),
//!     Value::from("gusty"),
//! );
//! // The second evaluation reuses the compiled program.
//! assert_eq!(cache.eval("IF(WIND > 10, 'gusty', 'calm')").is_ok(), true);
//! assert_eq!(cache.compile_count(), 1);
//! ```

pub mod cache;
pub mod engine;
pub mod environment;
pub mod error;
pub mod expression;
pub mod options;

pub use cache::{ExpressionCache, Refresh};
pub use engine::Engine;
pub use environment::{BindError, EnvironmentBuilder};
pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use expression::CompiledExpression;
pub use options::{EngineOptions, EvalOptions, EvalOptionsOverride};
