//! Compiled Tarn expressions.

use ecow::EcoString;

use super::error::Error;
use super::options::{EvalOptions, EvalOptionsOverride};
use crate::compiler::{Expr, RpnToken};
use crate::evaluator::{Evaluator, RuntimeErrorKind};
use crate::values::Value;

/// A compiled expression ready for evaluation.
///
/// Compiled expressions borrow from the engine's arena and can be
/// evaluated any number of times; each evaluation reads the *current*
/// values of any dynamic variables it references. The program itself is
/// immutable and never mutated by evaluation.
pub struct CompiledExpression<'arena> {
    /// Root of the lazy evaluation tree.
    root: &'arena Expr<'arena>,

    /// The postfix list the tree was built from, kept for introspection.
    rpn: Vec<RpnToken<'arena>>,

    /// Original source text, for error reporting.
    source: EcoString,

    /// Default evaluation options.
    default_eval_options: EvalOptions,
}

impl<'arena> CompiledExpression<'arena> {
    /// Called internally by `Engine::compile`.
    pub(crate) fn new(
        root: &'arena Expr<'arena>,
        rpn: Vec<RpnToken<'arena>>,
        source: EcoString,
        default_eval_options: EvalOptions,
    ) -> Self {
        Self {
            root,
            rpn,
            source,
            default_eval_options,
        }
    }

    /// Evaluate with the engine's default options.
    pub fn eval(&self) -> Result<Value, Error> {
        self.eval_with(EvalOptionsOverride::default())
    }

    /// Evaluate, overriding selected options for this call.
    pub fn eval_with(&self, options_override: EvalOptionsOverride) -> Result<Value, Error> {
        let mut options = self.default_eval_options.clone();
        options.override_with(&options_override);
        run(self.root, options, &self.source)
    }

    /// The original source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The postfix (RPN) form the tree was built from, rendered as a
    /// space-separated list. Useful for diagnostics.
    pub fn to_rpn(&self) -> String {
        let mut out = String::new();
        for (i, token) in self.rpn.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&token.to_string());
        }
        out
    }

    pub(crate) fn root(&self) -> &'arena Expr<'arena> {
        self.root
    }

    pub(crate) fn default_eval_options(&self) -> &EvalOptions {
        &self.default_eval_options
    }
}

/// Evaluate a tree root, converting runtime errors to the public error
/// type. Shared between [`CompiledExpression`] and the expression cache.
pub(crate) fn run(
    root: &Expr<'_>,
    options: EvalOptions,
    source: &str,
) -> Result<Value, Error> {
    Evaluator::new(options).eval(root).map_err(|e| match e.kind {
        RuntimeErrorKind::StepLimitExceeded(_) => Error::ResourceExceeded(e.to_string()),
        _ => Error::runtime(source, e.to_diagnostic()),
    })
}
