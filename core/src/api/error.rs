//! Public error types for the Tarn API.
//!
//! This is the stable error surface exposed to library users. Internal
//! error representations (`ParseError`, `CompileError`, `RuntimeError`)
//! are converted to these public types at API boundaries.

use core::fmt;

use crate::parser::Span;

/// Public error type for all Tarn operations.
///
/// `Clone` is deliberate: the expression cache memoizes compilation
/// failures and returns the same error on every subsequent call.
#[derive(Debug, Clone)]
pub enum Error {
    /// Compilation errors (tokenization and syntax).
    ///
    /// Contains one or more diagnostics with source locations.
    Compilation {
        diagnostics: Vec<Diagnostic>,
        source: String,
    },

    /// Runtime errors during evaluation (e.g. division by zero, coercion
    /// failure).
    Runtime {
        diagnostic: Diagnostic,
        source: String,
    },

    /// Resource limits exceeded (evaluation step budget).
    ResourceExceeded(String),
}

impl Error {
    pub(crate) fn compilation(source: &str, diagnostic: Diagnostic) -> Self {
        Error::Compilation {
            diagnostics: vec![diagnostic],
            source: source.to_string(),
        }
    }

    pub(crate) fn runtime(source: &str, diagnostic: Diagnostic) -> Self {
        Error::Runtime {
            diagnostic,
            source: source.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Compilation { diagnostics, .. } => match diagnostics.first() {
                Some(first) => write!(f, "compilation failed: {}", first.message),
                None => write!(f, "compilation failed"),
            },
            Error::Runtime { diagnostic, .. } => {
                write!(f, "runtime error: {}", diagnostic.message)
            }
            Error::ResourceExceeded(msg) => write!(f, "resource limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// A diagnostic message with a source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Help messages suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g. "S001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation or evaluation cannot succeed.
    Error,
    /// Warning - suspicious input that might be wrong.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic.
#[derive(Debug, Clone)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}
