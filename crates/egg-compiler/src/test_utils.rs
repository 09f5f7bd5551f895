//! Shared helpers for compiler tests.

use egg_core::{Grammar, MatcherPtr};

use crate::parser::parse_str;

/// Parse `source`, panicking on syntax errors or diagnostics.
pub fn parse_ok(source: &str) -> Grammar {
    let (grammar, diagnostics) = match parse_str(source) {
        Ok(parsed) => parsed,
        Err(e) => panic!("failed to parse test grammar: {e}\n{source}"),
    };
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        diagnostics.render()
    );
    grammar
}

/// Body of the single rule `r = <body>`.
pub fn parse_body(body: &str) -> MatcherPtr {
    let grammar = parse_ok(&format!("r = {body}"));
    grammar.rule("r").expect("rule `r`").body.clone()
}
