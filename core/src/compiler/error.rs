//! Compile-time (syntax) errors.

use ecow::EcoString;

use crate::api::error::{Diagnostic, Severity};
use crate::parser::Span;
use crate::symbols::Arity;

/// A syntax error raised while turning the token stream into an
/// evaluation tree. Carries the span of the offending token where one is
/// available.
#[derive(Debug, Clone)]
pub struct CompileError {
    pub kind: CompileErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileErrorKind {
    #[error("mismatched parentheses")]
    MismatchedParens,
    #[error("misplaced separator or missing parameters")]
    MisplacedSeparator,
    #[error("missing operand(s) for operator `{0}`")]
    MissingOperands(EcoString),
    #[error("function `{name}` expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: EcoString,
        expected: Arity,
        found: usize,
    },
    #[error("empty expression")]
    EmptyExpression,
    #[error("expression produces more than one value")]
    TooManyValues,
    #[error("unknown operator `{0}`")]
    UnknownOperator(EcoString),
    #[error("unknown function `{0}`")]
    UnknownFunction(EcoString),
    #[error("unknown identifier `{0}`")]
    UnknownIdentifier(EcoString),
}

impl CompileError {
    pub fn new(kind: CompileErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, help) = match &self.kind {
            CompileErrorKind::MismatchedParens => (
                "S001",
                vec!["every `(` needs a matching `)`".into()],
            ),
            CompileErrorKind::MisplacedSeparator => ("S002", vec![]),
            CompileErrorKind::MissingOperands(_) => ("S003", vec![]),
            CompileErrorKind::ArityMismatch { .. } => ("S004", vec![]),
            CompileErrorKind::EmptyExpression => ("S005", vec![]),
            CompileErrorKind::TooManyValues => (
                "S006",
                vec!["did you forget an operator between two values?".into()],
            ),
            CompileErrorKind::UnknownOperator(_) => ("S007", vec![]),
            CompileErrorKind::UnknownFunction(_) | CompileErrorKind::UnknownIdentifier(_) => (
                "S008",
                vec!["make sure the symbol is registered before use".into()],
            ),
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            related: vec![],
            help,
            code: Some(code.into()),
        }
    }
}
