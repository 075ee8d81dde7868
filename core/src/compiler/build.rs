//! Tree construction from validated postfix.
//!
//! A single pass over the RPN list with a node stack. Symbols are resolved
//! here, once: variables to their registered handle, operators and
//! functions to their evaluation functions. The validation pass has
//! already proven the stack discipline, so underflow in this pass cannot
//! happen for validated input; the checks remain as errors rather than
//! panics.

use bumpalo::Bump;
use smallvec::SmallVec;

use super::error::{CompileError, CompileErrorKind};
use super::expr::{Expr, ExprKind};
use super::shunting::{RpnKind, RpnToken};
use crate::symbols::Scope;
use crate::values::Value;

enum Slot<'arena> {
    Node(&'arena Expr<'arena>),
    /// Start of a call's argument list.
    Mark,
}

pub fn build<'arena>(
    arena: &'arena Bump,
    rpn: &[RpnToken<'arena>],
    scope: &Scope<'_>,
) -> Result<&'arena Expr<'arena>, CompileError> {
    let mut stack: SmallVec<[Slot<'arena>; 8]> = SmallVec::new();

    for token in rpn {
        match token.kind {
            RpnKind::Number(n) => {
                stack.push(Slot::Node(arena.alloc(Expr {
                    kind: ExprKind::Literal(Value::Number(n)),
                    span: token.span.clone(),
                })));
            }
            RpnKind::Str(s) => {
                stack.push(Slot::Node(arena.alloc(Expr {
                    kind: ExprKind::Literal(Value::Str(s.into())),
                    span: token.span.clone(),
                })));
            }
            RpnKind::Ident(name) => {
                let var = scope.variable(name).ok_or_else(|| {
                    CompileError::new(
                        CompileErrorKind::UnknownIdentifier(name.into()),
                        token.span.clone(),
                    )
                })?;
                stack.push(Slot::Node(arena.alloc(Expr {
                    kind: ExprKind::Variable {
                        name,
                        var: var.clone(),
                    },
                    span: token.span.clone(),
                })));
            }
            RpnKind::CallBegin => stack.push(Slot::Mark),
            RpnKind::Operator(symbol) => {
                let op = scope.operator(symbol).ok_or_else(|| {
                    CompileError::new(
                        CompileErrorKind::UnknownOperator(symbol.into()),
                        token.span.clone(),
                    )
                })?;
                let missing = || {
                    CompileError::new(
                        CompileErrorKind::MissingOperands(symbol.into()),
                        token.span.clone(),
                    )
                };
                let kind = if op.arity == 1 {
                    let operand = pop_node(&mut stack).ok_or_else(missing)?;
                    ExprKind::Unary {
                        op: op.clone(),
                        operand,
                    }
                } else {
                    let rhs = pop_node(&mut stack).ok_or_else(missing)?;
                    let lhs = pop_node(&mut stack).ok_or_else(missing)?;
                    ExprKind::Binary {
                        op: op.clone(),
                        lhs,
                        rhs,
                    }
                };
                let span = match &kind {
                    ExprKind::Unary { operand, .. } => token.span.join(&operand.span),
                    ExprKind::Binary { lhs, rhs, .. } => lhs.span.join(&rhs.span),
                    _ => token.span.clone(),
                };
                stack.push(Slot::Node(arena.alloc(Expr { kind, span })));
            }
            RpnKind::Function(name) => {
                let function = scope.function(name).ok_or_else(|| {
                    CompileError::new(
                        CompileErrorKind::UnknownFunction(name.into()),
                        token.span.clone(),
                    )
                })?;
                // Pop back to the call-begin marker, preserving argument
                // order.
                let mut args: SmallVec<[&'arena Expr<'arena>; 4]> = SmallVec::new();
                loop {
                    match stack.pop() {
                        Some(Slot::Node(node)) => args.push(node),
                        Some(Slot::Mark) => break,
                        None => {
                            return Err(CompileError::new(
                                CompileErrorKind::MismatchedParens,
                                token.span.clone(),
                            ));
                        }
                    }
                }
                args.reverse();
                let span = args
                    .iter()
                    .fold(token.span.clone(), |acc, arg| acc.join(&arg.span));
                let args: &'arena [&'arena Expr<'arena>] = arena.alloc_slice_copy(&args);
                stack.push(Slot::Node(arena.alloc(Expr {
                    kind: ExprKind::Call {
                        function: function.clone(),
                        args,
                    },
                    span,
                })));
            }
        }
    }

    // Validation guarantees exactly one residual node.
    let root = pop_node(&mut stack);
    match (root, stack.is_empty()) {
        (Some(root), true) => Ok(root),
        (None, _) => Err(CompileError::new(
            CompileErrorKind::EmptyExpression,
            Default::default(),
        )),
        (Some(_), false) => Err(CompileError::new(
            CompileErrorKind::TooManyValues,
            rpn.last().map(|t| t.span.clone()).unwrap_or_default(),
        )),
    }
}

fn pop_node<'arena>(stack: &mut SmallVec<[Slot<'arena>; 8]>) -> Option<&'arena Expr<'arena>> {
    match stack.pop() {
        Some(Slot::Node(node)) => Some(node),
        Some(Slot::Mark) => None,
        None => None,
    }
}
