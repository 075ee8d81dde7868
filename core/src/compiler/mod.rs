//! Compilation: token stream to lazy evaluation tree.
//!
//! Three passes, in order: [`shunting::to_rpn`] reorders the infix token
//! stream into postfix, [`validate::validate`] proves the postfix list
//! reduces to exactly one value under stack discipline, and
//! [`build::build`] turns it into an arena-allocated [`Expr`] tree with
//! every symbol resolved.

pub mod build;
pub mod error;
pub mod expr;
pub mod shunting;
pub mod validate;

pub use error::{CompileError, CompileErrorKind};
pub use expr::{Expr, ExprKind};
pub use shunting::{RpnKind, RpnToken};

use bumpalo::Bump;

use crate::parser::Token;
use crate::symbols::Scope;

/// Run the full pipeline over an already-tokenized expression. Returns
/// the tree root together with the RPN list it was built from (kept for
/// introspection).
pub fn compile<'arena>(
    arena: &'arena Bump,
    tokens: &[Token<'arena>],
    scope: &Scope<'_>,
) -> Result<(&'arena Expr<'arena>, Vec<RpnToken<'arena>>), CompileError> {
    let rpn = shunting::to_rpn(tokens, scope)?;
    validate::validate(&rpn, scope)?;
    let root = build::build(arena, &rpn, scope)?;
    Ok((root, rpn))
}
