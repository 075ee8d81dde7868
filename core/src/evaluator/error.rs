//! Runtime (post-compile) errors.

use ecow::EcoString;

use crate::api::error::{Diagnostic, Severity};
use crate::parser::Span;
use crate::values::ValueError;

/// An error raised while evaluating a compiled expression. The span points
/// at the subexpression that failed, when known.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub kind: RuntimeErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RuntimeErrorKind {
    #[error("division by zero")]
    DivisionByZero,
    #[error(transparent)]
    Coercion(ValueError),
    #[error("invalid regular expression: {0}")]
    InvalidRegex(EcoString),
    #[error("evaluation step budget of {0} exhausted")]
    StepLimitExceeded(u64),
}

impl RuntimeError {
    /// An error without a location yet; the evaluator fills the span of
    /// the failing node in as it unwinds.
    pub fn new(kind: RuntimeErrorKind) -> Self {
        Self {
            kind,
            span: Span::empty(),
        }
    }

    /// Attach a span unless one is already set.
    pub fn or_span(mut self, span: &Span) -> Self {
        if self.span.is_empty() {
            self.span = span.clone();
        }
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            related: vec![],
            help: vec![],
            code: Some("R001".into()),
        }
    }
}

impl From<ValueError> for RuntimeError {
    fn from(err: ValueError) -> Self {
        RuntimeError::new(RuntimeErrorKind::Coercion(err))
    }
}

impl core::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.kind.fmt(f)
    }
}
