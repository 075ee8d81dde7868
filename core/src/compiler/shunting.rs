//! Infix to postfix conversion (shunting-yard).
//!
//! Two refinements over the textbook algorithm matter downstream:
//!
//! - The `(` of a function call is emitted into the *output* queue as a
//!   [`RpnKind::CallBegin`] marker, so the tree builder (and the arity
//!   validator) can find where that call's argument list starts.
//! - When a `)` discards its `(` and a function name tops the stack, the
//!   function is popped to the output as well, closing the call.

use core::fmt;

use smallvec::SmallVec;

use super::error::{CompileError, CompileErrorKind};
use crate::parser::{Span, Token, TokenKind};
use crate::symbols::{Assoc, Scope};
use crate::values::Value;

/// One element of the postfix (RPN) list.
#[derive(Debug, Clone, PartialEq)]
pub struct RpnToken<'src> {
    pub kind: RpnKind<'src>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RpnKind<'src> {
    Number(f64),
    Str(&'src str),
    /// A variable reference.
    Ident(&'src str),
    Operator(&'src str),
    Function(&'src str),
    /// Marks the start of a function call's argument list.
    CallBegin,
}

impl fmt::Display for RpnToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            RpnKind::Number(n) => write!(f, "{}", Value::Number(*n)),
            RpnKind::Str(s) => write!(f, "'{s}'"),
            RpnKind::Ident(name) | RpnKind::Function(name) => f.write_str(name),
            RpnKind::Operator(sym) => f.write_str(sym),
            RpnKind::CallBegin => f.write_str("("),
        }
    }
}

enum StackItem<'src> {
    Op {
        symbol: &'src str,
        precedence: u8,
        assoc: Assoc,
        span: Span,
    },
    Fn {
        name: &'src str,
        span: Span,
    },
    Paren {
        call: bool,
        span: Span,
    },
}

/// Convert an infix token stream into a postfix list.
pub fn to_rpn<'src>(
    tokens: &[Token<'src>],
    scope: &Scope<'_>,
) -> Result<Vec<RpnToken<'src>>, CompileError> {
    let mut output: Vec<RpnToken<'src>> = Vec::with_capacity(tokens.len());
    let mut stack: SmallVec<[StackItem<'src>; 8]> = SmallVec::new();
    // Set when the previous token was a function name, so the `(` that
    // follows is tagged as a call.
    let mut call_follows = false;

    for (i, token) in tokens.iter().enumerate() {
        let was_call = core::mem::take(&mut call_follows);
        match token.kind {
            TokenKind::Number(n) => output.push(RpnToken {
                kind: RpnKind::Number(n),
                span: token.span.clone(),
            }),
            TokenKind::Str(s) => output.push(RpnToken {
                kind: RpnKind::Str(s),
                span: token.span.clone(),
            }),
            TokenKind::Ident(name) => {
                let next_is_lparen =
                    matches!(tokens.get(i + 1), Some(t) if t.kind == TokenKind::LParen);
                if next_is_lparen {
                    stack.push(StackItem::Fn {
                        name,
                        span: token.span.clone(),
                    });
                    call_follows = true;
                } else {
                    output.push(RpnToken {
                        kind: RpnKind::Ident(name),
                        span: token.span.clone(),
                    });
                }
            }
            TokenKind::LParen => {
                if was_call {
                    // Call-begin marker for the tree builder.
                    output.push(RpnToken {
                        kind: RpnKind::CallBegin,
                        span: token.span.clone(),
                    });
                }
                stack.push(StackItem::Paren {
                    call: was_call,
                    span: token.span.clone(),
                });
            }
            TokenKind::Comma => loop {
                match stack.last() {
                    Some(StackItem::Paren { .. }) => break,
                    Some(StackItem::Op { .. }) => {
                        pop_op_to_output(&mut stack, &mut output);
                    }
                    _ => {
                        return Err(CompileError::new(
                            CompileErrorKind::MisplacedSeparator,
                            token.span.clone(),
                        ));
                    }
                }
            },
            TokenKind::Operator(symbol) => {
                let op = scope.operator(symbol).ok_or_else(|| {
                    CompileError::new(
                        CompileErrorKind::UnknownOperator(symbol.into()),
                        token.span.clone(),
                    )
                })?;
                while let Some(StackItem::Op { precedence, .. }) = stack.last() {
                    let pops = *precedence > op.precedence
                        || (*precedence == op.precedence && op.assoc == Assoc::Left);
                    if !pops {
                        break;
                    }
                    pop_op_to_output(&mut stack, &mut output);
                }
                stack.push(StackItem::Op {
                    symbol,
                    precedence: op.precedence,
                    assoc: op.assoc,
                    span: token.span.clone(),
                });
            }
            TokenKind::RParen => loop {
                match stack.pop() {
                    Some(StackItem::Op {
                        symbol, span: s, ..
                    }) => output.push(RpnToken {
                        kind: RpnKind::Operator(symbol),
                        span: s,
                    }),
                    Some(StackItem::Paren { .. }) => {
                        // A function name directly under the discarded `(`
                        // closes that call.
                        if matches!(stack.last(), Some(StackItem::Fn { .. }))
                            && let Some(StackItem::Fn { name, span: s }) = stack.pop()
                        {
                            output.push(RpnToken {
                                kind: RpnKind::Function(name),
                                span: s,
                            });
                        }
                        break;
                    }
                    _ => {
                        return Err(CompileError::new(
                            CompileErrorKind::MismatchedParens,
                            token.span.clone(),
                        ));
                    }
                }
            },
        }
    }

    // Drain what remains; any leftover parenthesis or function name means
    // the expression never closed it.
    while let Some(item) = stack.pop() {
        match item {
            StackItem::Op { symbol, span, .. } => output.push(RpnToken {
                kind: RpnKind::Operator(symbol),
                span,
            }),
            StackItem::Paren { span, .. } | StackItem::Fn { span, .. } => {
                return Err(CompileError::new(CompileErrorKind::MismatchedParens, span));
            }
        }
    }

    Ok(output)
}

fn pop_op_to_output<'src>(
    stack: &mut SmallVec<[StackItem<'src>; 8]>,
    output: &mut Vec<RpnToken<'src>>,
) {
    if let Some(StackItem::Op { symbol, span, .. }) = stack.pop() {
        output.push(RpnToken {
            kind: RpnKind::Operator(symbol),
            span,
        });
    }
}

#[cfg(test)]
#[path = "shunting_test.rs"]
mod shunting_test;
