use crate::grammar::{Grammar, GrammarRule};
use crate::matcher::Matcher;

fn rule(name: &str) -> GrammarRule {
    GrammarRule::new(name, None, Matcher::any())
}

#[test]
fn preserves_declaration_order() {
    let mut grammar = Grammar::new();
    for name in ["zeta", "alpha", "mid"] {
        grammar.add_rule(rule(name)).unwrap();
    }
    let names: Vec<_> = grammar.names().collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
    assert_eq!(grammar.first_rule().unwrap().name, "zeta");
    assert_eq!(grammar.len(), 3);
}

#[test]
fn lookup_matches_ordered_view() {
    let mut grammar = Grammar::new();
    grammar.add_rule(rule("a")).unwrap();
    grammar.add_rule(rule("b")).unwrap();
    for r in grammar.rules() {
        assert!(std::ptr::eq(grammar.rule(&r.name).unwrap().as_ref(), r.as_ref()));
    }
    assert!(grammar.rule("c").is_none());
}

#[test]
fn duplicate_rule_is_rejected() {
    let mut grammar = Grammar::new();
    grammar
        .add_rule(GrammarRule::new("a", Some("i32".into()), Matcher::any()))
        .unwrap();
    let err = grammar.add_rule(rule("a")).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"rule `a` is already defined");
    assert_eq!(grammar.len(), 1);
    assert_eq!(grammar.rule("a").unwrap().return_type.as_deref(), Some("i32"));
}

#[test]
fn map_rules_builds_fresh_grammar() {
    let mut grammar = Grammar::new();
    grammar.pre_action = "use std::fmt;".into();
    grammar.add_rule(rule("a")).unwrap();
    grammar.add_rule(rule("b")).unwrap();

    let mapped = grammar.map_rules(|r| r.with_body(Matcher::empty()).into());

    assert_eq!(mapped.pre_action, "use std::fmt;");
    assert_eq!(mapped.names().collect::<Vec<_>>(), ["a", "b"]);
    assert_eq!(*mapped.rule("a").unwrap().body, Matcher::Empty);
    assert_eq!(*grammar.rule("a").unwrap().body, Matcher::Any);
}
