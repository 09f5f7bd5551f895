#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammar IR for the Egg parsing expression grammar toolchain.
//!
//! A [`Grammar`] owns an ordered set of [`GrammarRule`]s, each with a
//! [`Matcher`] tree as its body. Trees are immutable and reference counted:
//! passes that rewrite a grammar build new nodes and share the subtrees they
//! leave untouched.
//!
//! Passes traverse the IR through the [`Visitor`] trait.

pub mod grammar;
pub mod matcher;
pub mod utils;
pub mod visitor;

#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod utils_tests;

pub use grammar::{DuplicateRule, Grammar, GrammarRule, GrammarRulePtr};
pub use matcher::{CharRange, Matcher, MatcherKind, MatcherPtr, RuleRef};
pub use visitor::Visitor;
