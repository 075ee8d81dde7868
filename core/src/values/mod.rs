//! Runtime values.

pub mod dynamic;

pub use dynamic::{Value, ValueError};
