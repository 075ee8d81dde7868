//! Lazy tree-walking evaluation.
//!
//! The evaluator forces a subtree only when asked to: operators force
//! their operands, but a function receives its argument subtrees
//! unevaluated and decides what to force. Evaluation is pure with respect
//! to the engine; all observable effects come from dynamic variable
//! getters and host functions reading host-owned state.

pub mod error;

pub use error::{RuntimeError, RuntimeErrorKind};

use core::cell::Cell;

use smallvec::SmallVec;

use crate::api::options::EvalOptions;
use crate::compiler::{Expr, ExprKind};
use crate::values::Value;

/// Walks an [`Expr`] tree and produces a [`Value`].
///
/// One evaluator is created per top-level evaluation; it carries the step
/// budget. Re-entrant use from lazy functions (forcing their arguments via
/// [`Evaluator::eval`]) charges the same budget.
pub struct Evaluator {
    options: EvalOptions,
    steps: Cell<u64>,
}

impl Evaluator {
    pub fn new(options: EvalOptions) -> Self {
        Self {
            options,
            steps: Cell::new(0),
        }
    }

    /// Force one subtree.
    pub fn eval<'a>(&self, expr: &'a Expr<'a>) -> Result<Value, RuntimeError> {
        self.charge(expr)?;
        match &expr.kind {
            ExprKind::Literal(value) => Ok(value.clone()),
            ExprKind::Variable { var, .. } => Ok(var.read()),
            ExprKind::Unary { op, operand } => {
                let value = self.eval(operand)?;
                op.apply(&[value]).map_err(|e| e.or_span(&expr.span))
            }
            ExprKind::Binary { op, lhs, rhs } => {
                // Both operands are always forced; `IF` is the lazy
                // conditional, operators are not.
                let lhs = self.eval(lhs)?;
                let rhs = self.eval(rhs)?;
                op.apply(&[lhs, rhs]).map_err(|e| e.or_span(&expr.span))
            }
            ExprKind::Call { function, args } => function
                .call(self, args)
                .map_err(|e| e.or_span(&expr.span)),
        }
    }

    /// Force every argument, in order. Convenience for eager built-ins
    /// and host functions.
    pub fn eval_all<'a>(
        &self,
        args: &[&'a Expr<'a>],
    ) -> Result<SmallVec<[Value; 4]>, RuntimeError> {
        args.iter().map(|arg| self.eval(arg)).collect()
    }

    /// Count a forced node against the optional step budget.
    fn charge(&self, expr: &Expr<'_>) -> Result<(), RuntimeError> {
        let Some(max_steps) = self.options.max_steps else {
            return Ok(());
        };
        let used = self.steps.get() + 1;
        if used > max_steps {
            return Err(
                RuntimeError::new(RuntimeErrorKind::StepLimitExceeded(max_steps))
                    .or_span(&expr.span),
            );
        }
        self.steps.set(used);
        Ok(())
    }
}
