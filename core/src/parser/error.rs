//! Tokenization errors.

use ecow::EcoString;

use super::Span;
use crate::api::error::{Diagnostic, Severity};

/// An error raised while turning source text into tokens. Carries the
/// character offset of the offending input.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unrecognized symbol `{0}`")]
    UnknownSymbol(EcoString),
    #[error("invalid numeric literal `{0}`")]
    InvalidNumber(EcoString),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let help = match &self.kind {
            ParseErrorKind::UnterminatedString => {
                vec!["string literals are delimited by single quotes".into()]
            }
            ParseErrorKind::UnknownSymbol(_) => {
                vec!["only registered operator symbols are recognized".into()]
            }
            ParseErrorKind::InvalidNumber(_) => vec![],
        };
        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            related: vec![],
            help,
            code: Some("P001".into()),
        }
    }
}
