//! Specifier rewriting engine
//!
//! - `rule`: the `RewriteRule` abstraction and the built-in specifier rules
//! - `rewriter`: applies a rule set to text and to candidate files on disk

pub mod rewriter;
pub mod rule;

pub use rewriter::{RewriteOutcome, Rewriter};
pub use rule::{RewriteRule, SpecifierRule};
