//! Parser for the Egg grammar language.
//!
//! Written against `egg-runtime`, the same matcher library generated parsers
//! use, so the source is read as a stream through a [`State`] buffer.
//!
//! ```text
//! # comments run to end of line
//! {% code emitted before the rules %}
//! sum : i64 = prod : l ( '+' prod : r { ps_val = l + r; } )*
//! digit = [0-9]
//! word  = < [a-z]+ > !'-' .? ;
//! {% code emitted after the rules %}
//! ```

mod grammar;
mod lexical;


use std::io::Read;

use egg_core::{DuplicateRule, Grammar};
use egg_runtime::{Match, State};

use crate::diagnostics::{DiagnosticKind, Diagnostics};
use crate::report::SyntaxError;
use crate::PassResult;

/// Parse grammar source from a reader.
///
/// Syntax errors are fatal and reported at the furthest position read.
/// Duplicate rules come back as diagnostics; the first definition is kept.
pub fn parse<R: Read>(reader: R) -> PassResult<Grammar> {
    let mut ps = State::new(reader);
    match grammar::grammar(&mut ps)? {
        Match::Matched(parsed) => Ok(build(parsed)),
        Match::Failed => Err(SyntaxError::at_furthest(&mut ps)?.into()),
    }
}

pub fn parse_str(source: &str) -> PassResult<Grammar> {
    parse(source.as_bytes())
}

fn build(parsed: grammar::ParsedGrammar) -> (Grammar, Diagnostics) {
    let mut grammar = Grammar::new();
    grammar.pre_action = parsed.pre_action;
    grammar.post_action = parsed.post_action;

    let mut diagnostics = Diagnostics::new();
    for rule in parsed.rules {
        if let Err(DuplicateRule(rule)) = grammar.add_rule(rule) {
            diagnostics
                .report(DiagnosticKind::DuplicateRule)
                .message(&rule.name)
                .rule(&rule.name)
                .emit();
        }
    }
    log::debug!("parsed grammar with {} rules", grammar.len());
    (grammar, diagnostics)
}
