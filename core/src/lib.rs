//! Core implementation of the Tarn expression language.
//!
//! The pipeline is: source string → [`parser::tokenizer`] → token stream →
//! [`compiler::shunting`] (infix to postfix) → [`compiler::validate`] (stack
//! arity check) → [`compiler::build`] (postfix to lazy evaluation tree) →
//! [`api::CompiledExpression`]. Evaluation walks the tree on demand, reading
//! host state through the variable handles resolved at build time.
//!
//! Host applications normally use the re-exports from the `tarn` facade
//! crate rather than depending on `tarn-core` directly.

pub mod api;
pub mod compiler;
pub mod evaluator;
pub mod parser;
pub mod stdlib;
pub mod symbols;
pub mod values;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level.
    /// Call this at the start of tests where you want to see logging output.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
