//! Postfix arity validation.
//!
//! Proves, before any tree is built, that the RPN list reduces to exactly
//! one value under stack discipline. One counter is tracked per scope: the
//! outermost scope, plus one per call-begin marker. Literals and variables
//! add one to the current scope; an n-ary operator consumes n and produces
//! one; a function closes its scope and must find the argument count its
//! declared arity accepts.

use smallvec::{SmallVec, smallvec};

use super::error::{CompileError, CompileErrorKind};
use super::shunting::{RpnKind, RpnToken};
use crate::symbols::Scope;

pub fn validate(rpn: &[RpnToken<'_>], scope: &Scope<'_>) -> Result<(), CompileError> {
    let mut scopes: SmallVec<[u32; 8]> = smallvec![0];

    for token in rpn {
        match token.kind {
            RpnKind::Number(_) | RpnKind::Str(_) | RpnKind::Ident(_) => {
                if let Some(count) = scopes.last_mut() {
                    *count += 1;
                }
            }
            RpnKind::CallBegin => scopes.push(0),
            RpnKind::Operator(symbol) => {
                let op = scope.operator(symbol).ok_or_else(|| {
                    CompileError::new(
                        CompileErrorKind::UnknownOperator(symbol.into()),
                        token.span.clone(),
                    )
                })?;
                let Some(count) = scopes.last_mut() else {
                    return Err(CompileError::new(
                        CompileErrorKind::MismatchedParens,
                        token.span.clone(),
                    ));
                };
                if *count < op.arity as u32 {
                    return Err(CompileError::new(
                        CompileErrorKind::MissingOperands(symbol.into()),
                        token.span.clone(),
                    ));
                }
                *count -= op.arity as u32 - 1;
            }
            RpnKind::Function(name) => {
                let function = scope.function(name).ok_or_else(|| {
                    CompileError::new(
                        CompileErrorKind::UnknownFunction(name.into()),
                        token.span.clone(),
                    )
                })?;
                // The scope opened by this call's marker holds its
                // argument count.
                let Some(found) = scopes.pop() else {
                    return Err(CompileError::new(
                        CompileErrorKind::MismatchedParens,
                        token.span.clone(),
                    ));
                };
                if !function.arity.accepts(found as usize) {
                    return Err(CompileError::new(
                        CompileErrorKind::ArityMismatch {
                            name: name.into(),
                            expected: function.arity,
                            found: found as usize,
                        },
                        token.span.clone(),
                    ));
                }
                let Some(count) = scopes.last_mut() else {
                    return Err(CompileError::new(
                        CompileErrorKind::MismatchedParens,
                        token.span.clone(),
                    ));
                };
                *count += 1;
            }
        }
    }

    // Exactly one scope with exactly one residual value.
    if scopes.len() != 1 {
        let span = rpn.last().map(|t| t.span.clone()).unwrap_or_default();
        return Err(CompileError::new(CompileErrorKind::MismatchedParens, span));
    }
    match scopes[0] {
        1 => Ok(()),
        0 => Err(CompileError::new(
            CompileErrorKind::EmptyExpression,
            Default::default(),
        )),
        _ => Err(CompileError::new(
            CompileErrorKind::TooManyValues,
            rpn.last().map(|t| t.span.clone()).unwrap_or_default(),
        )),
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
