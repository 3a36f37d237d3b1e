//! Substitution rules for apifix.
//!
//! This module handles:
//! - Compiling settings into per-receiver call-expression patterns
//! - Applying the ordered rules to file content

pub mod rewriter;

pub use rewriter::{CompiledRule, apply_rules, compile_rules};
