use std::rc::Rc;

use egg_core::{CharRange, Matcher};
use indoc::indoc;

use crate::normalize::{normalize, normalize_matcher};
use crate::printer::{print, print_matcher};
use crate::test_utils::{parse_body, parse_ok};

fn norm(body: &str) -> String {
    print_matcher(&normalize_matcher(&parse_body(body)))
}

#[test]
fn flattens_sequences() {
    assert_eq!(norm("a (b (c d)) e"), "a b c d e");
    assert_eq!(norm("a ; b ;"), "a b");
    assert_eq!(norm("(; ;)"), ";");
    assert_eq!(norm("(; a)"), "a");
}

#[test]
fn flattens_choices() {
    assert_eq!(norm("a | (b | c) | d"), "a | b | c | d");
    assert_eq!(norm("((a))"), "a");
}

#[test]
fn drops_unreachable_alternatives() {
    assert_eq!(norm("a | b? | c"), "a | b?");
    assert_eq!(norm("a | ; | c"), "a | ;");
    assert_eq!(norm("a* | b"), "a*");
    assert_eq!(norm("a | (b | c*) | d"), "a | b | c*");
    assert_eq!(norm("a | (; ;) | b"), "a | ;");
}

#[test]
fn collapses_optional() {
    assert_eq!(norm("(a?)?"), "a?");
    assert_eq!(norm("(a*)?"), "a*");
    assert_eq!(norm("(a+)?"), "a*");
    assert_eq!(norm(";?"), ";");
}

#[test]
fn collapses_repetition() {
    assert_eq!(norm("(a*)*"), "a*");
    assert_eq!(norm("(a+)*"), "a*");
    assert_eq!(norm("(a?)*"), "a*");
    assert_eq!(norm("(a*)+"), "a*");
    assert_eq!(norm("(a?)+"), "a*");
    assert_eq!(norm("(a+)+"), "a+");
    assert_eq!(norm("((a?)+)*"), "a*");
}

#[test]
fn collapses_lookahead() {
    assert_eq!(norm("&(&a)"), "&a");
    assert_eq!(norm("!(!a)"), "&a");
    assert_eq!(norm("&(!a)"), "!a");
    assert_eq!(norm("!(&a)"), "!a");
    assert_eq!(norm("!(!(!a))"), "!a");
}

#[test]
fn simplifies_literals() {
    assert_eq!(norm(r#""x""#), "'x'");
    assert_eq!(norm(r#""""#), ";");
    assert_eq!(norm(r#"a "" b"#), "a b");
    assert_eq!(norm("[q]"), "'q'");
    assert_eq!(norm("[a-z]"), "[a-z]");
    assert_eq!(norm("[ab]"), "[ab]");
}

#[test]
fn rewrites_inside_captures_and_literals_nested() {
    assert_eq!(norm(r#"< "x" (a b) >"#), "<'x' a b>");
    assert_eq!(norm(r#"("x")*"#), "'x'*");
}

#[test]
fn keeps_other_matchers() {
    assert_eq!(norm("a : v . { code } \"ab\""), "a : v . { code } \"ab\"");
}

#[test]
fn shares_unchanged_rules() {
    let grammar = parse_ok(indoc! {r#"
        {% pre %}
        a : i32 = b (c | d)
        b = "b"
        c = 'c'
        d = 'd'
        {% post %}
    "#});
    let normalized = normalize(&grammar);

    assert_eq!(normalized.names().collect::<Vec<_>>(), ["a", "b", "c", "d"]);
    assert_eq!(normalized.pre_action, " pre ");
    assert_eq!(normalized.post_action, " post ");
    assert!(Rc::ptr_eq(grammar.rule("a").unwrap(), normalized.rule("a").unwrap()));
    assert!(!Rc::ptr_eq(grammar.rule("b").unwrap(), normalized.rule("b").unwrap()));
    assert_eq!(normalized.rule("a").unwrap().return_type.as_deref(), Some("i32"));
    insta::assert_snapshot!(print(&normalized).trim_end(), @r"
    {% pre %}

    a : i32 = b (c | d)

    b = 'b'

    c = 'c'

    d = 'd'

    {% post %}
    ");
}

#[test]
fn normalizing_twice_changes_nothing() {
    let grammar = parse_ok("a = ((x | (y | ;)) (\"\" [z]))* | b\nb = (x?)+\nx = 'x'\ny = 'y'");
    let once = normalize(&grammar);
    let twice = normalize(&once);
    for (a, b) in once.rules().zip(twice.rules()) {
        assert!(Rc::ptr_eq(a, b), "rule `{}` changed on second pass", a.name);
    }
}

#[test]
fn singleton_class_from_ir() {
    let class = Matcher::class(vec![CharRange::single('-')]);
    assert_eq!(*normalize_matcher(&class), Matcher::Char('-'));
}
