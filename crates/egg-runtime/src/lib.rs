#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Runtime support for Egg-generated parsers.
//!
//! - [`State`]: streaming input buffer with unbounded backtracking and
//!   explicit forgetting of committed input
//! - [`Match`]: success/failure result of every matcher
//! - primitive recognizers ([`any`], [`matches`], [`matches_str`],
//!   [`in_range`], [`in_ranges`]) and combinators ([`seq`], [`choice!`],
//!   [`opt`], [`many`], [`some`], [`look`], [`not`], [`capture`])
//!
//! Match failure is ordinary data ([`Match::Failed`]); only buffer misuse and
//! I/O problems surface as [`Error`].

mod combinators;
mod decoder;
mod error;
mod location;
mod matchers;
mod result;
mod state;

#[cfg(test)]
mod state_tests;

pub use combinators::{bind, capture, look, many, not, opt, seq, some};
pub use error::{Error, ForgottenState, Result};
pub use location::Location;
pub use matchers::{any, in_range, in_ranges, matches, matches_str};
pub use result::{Match, when};
pub use state::State;
