//! Runs a parser generated from `generated/calc.egg` against the runtime.

use egg_runtime::{Match, State};

include!("generated/calc.rs");

fn state(input: &str) -> State<&[u8]> {
    State::new(input.as_bytes())
}

#[test]
fn sums_with_bound_values() {
    let mut ps = state("12+30+4");
    assert_eq!(calc::sum(&mut ps).unwrap(), Match::Matched(46));
    assert_eq!(ps.pos, 7);
}

#[test]
fn repetition_rewinds_a_partial_iteration() {
    let mut ps = state("5+x");
    assert_eq!(calc::sum(&mut ps).unwrap(), Match::Matched(5));
    assert_eq!(ps.pos, 1);

    let mut ps = state("+1");
    assert!(calc::sum(&mut ps).unwrap().is_failed());
    assert_eq!(ps.pos, 0);
}

#[test]
fn capture_feeds_the_action() {
    let mut ps = state("0042 rest");
    assert_eq!(calc::num(&mut ps).unwrap(), Match::Matched(42));
    assert_eq!(ps.pos, 4);
}

#[test]
fn failed_sequence_leaves_cursor() {
    let mut ps = state("xb");
    assert!(calc::ab(&mut ps).unwrap().is_failed());
    assert_eq!(ps.pos, 0);

    let mut ps = state("ax");
    assert!(calc::ab(&mut ps).unwrap().is_failed());
    assert_eq!(ps.pos, 0);

    let mut ps = state("ab");
    assert!(calc::ab(&mut ps).unwrap().is_match());
    assert_eq!(ps.pos, 2);
}

#[test]
fn first_alternative_wins() {
    let mut ps = state("ab");
    assert!(calc::first(&mut ps).unwrap().is_match());
    assert_eq!(ps.pos, 1);
}

#[test]
fn repetition_totality() {
    for input in ["", "yyy"] {
        let mut ps = state(input);
        assert!(calc::many_x(&mut ps).unwrap().is_match());
        assert_eq!(ps.pos, 0);
        assert!(calc::some_x(&mut ps).unwrap().is_failed());
        assert_eq!(ps.pos, 0);
    }

    let mut ps = state("xxy");
    assert!(calc::some_x(&mut ps).unwrap().is_match());
    assert_eq!(ps.pos, 2);
}

#[test]
fn negation_consumes_nothing() {
    let mut ps = state("let x");
    assert!(calc::kw(&mut ps).unwrap().is_match());
    assert_eq!(ps.pos, 3);

    let mut ps = state("letter");
    assert!(calc::kw(&mut ps).unwrap().is_failed());
    assert_eq!(ps.pos, 0);
}
