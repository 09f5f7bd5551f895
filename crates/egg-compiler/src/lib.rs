//! Egg compiler: grammar parser, validation, normalization, printing and
//! Rust code generation.
//!
//! Pipeline:
//! - `parser` - grammar source to [`Grammar`] IR
//! - `validate` - undefined rules, binding problems
//! - `normalize` - IR simplification into a fresh grammar
//! - `printer` - IR back to grammar source
//! - `emit` - IR to a Rust recognizer built on `egg-runtime`
//! - `report` - syntax error rendering
//! - `diagnostics` - validation messages

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod emit;
pub mod normalize;
pub mod parser;
pub mod printer;
pub mod report;
pub mod validate;

#[cfg(test)]
mod normalize_tests;
#[cfg(test)]
mod report_tests;
#[cfg(test)]
pub mod test_utils;

use egg_core::Grammar;

pub use diagnostics::{Diagnostics, Severity};
pub use emit::RustEmitter;
pub use normalize::normalize;
pub use parser::{parse, parse_str};
pub use printer::{Printer, print};
pub use report::SyntaxError;
pub use validate::validate;

/// Result type for passes that produce both output and diagnostics.
///
/// Warnings travel with the output; fatal problems use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Reading the grammar source failed.
    #[error(transparent)]
    Input(#[from] egg_runtime::Error),

    #[error("grammar validation failed with {} errors", .0.error_count())]
    Invalid(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Validate `grammar` and generate a Rust parser for it.
///
/// `name` wraps the rules in `pub mod name` when non-empty.
pub fn compile(grammar: &Grammar, name: &str) -> PassResult<String> {
    let diagnostics = validate(grammar);
    if diagnostics.has_errors() {
        return Err(Error::Invalid(diagnostics));
    }
    let code = RustEmitter::new(grammar).module_name(name).emit();
    log::info!("generated {} rules", grammar.len());
    Ok((code, diagnostics))
}
