//! Command implementations.

pub mod check;
pub mod rewrite;
pub mod show;
