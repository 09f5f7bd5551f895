use crate::error::{Error, ForgottenState};
use crate::state::State;

fn state(input: &str) -> State<&[u8]> {
    State::new(input.as_bytes())
}

#[test]
fn reads_by_absolute_index() {
    let mut ps = state("héllo");
    assert_eq!(ps.read_at(1).unwrap(), Some('é'));
    assert_eq!(ps.read_at(0).unwrap(), Some('h'));
    assert_eq!(ps.read_at(4).unwrap(), Some('o'));
    assert_eq!(ps.read_at(5).unwrap(), None);
    assert_eq!(ps.read_at(500).unwrap(), None);
}

#[test]
fn peek_reads_at_cursor_without_moving() {
    let mut ps = state("ab");
    ps.pos = 1;
    assert_eq!(ps.peek().unwrap(), Some('b'));
    assert_eq!(ps.pos, 1);
}

#[test]
fn forgetting_boundary_is_inclusive_of_window_start() {
    let input = "abcdefghij";
    for j in 0..=input.len() {
        for i in 0..j {
            let mut ps = state(input);
            ps.forget_before(j).unwrap();
            let err = ps.read_at(i).unwrap_err();
            assert!(
                matches!(err, Error::Forgotten(ForgottenState { requested, available, .. })
                    if requested == i && available == j),
                "read_at({i}) after forget_before({j}): {err:?}"
            );
        }
        let mut ps = state(input);
        ps.forget_before(j).unwrap();
        assert_eq!(ps.read_at(j).unwrap(), input.chars().nth(j));
        assert_eq!(ps.window_start(), j);
    }
}

#[test]
fn forgetting_is_a_noop_at_or_before_window_start() {
    let mut ps = state("a\nb\nc");
    ps.forget_before(2).unwrap();
    ps.forget_before(1).unwrap();
    ps.forget_before(2).unwrap();
    assert_eq!(ps.window_start(), 2);
    assert_eq!(ps.forgotten_newlines(), 1);
}

#[test]
fn forgetting_past_end_clamps_to_end_of_input() {
    let mut ps = state("a\nb");
    ps.forget_before(10).unwrap();
    assert_eq!(ps.window_start(), 3);
    assert_eq!(ps.max_read(), 3);
    assert_eq!(ps.forgotten_newlines(), 1);
    assert_eq!(ps.read_at(3).unwrap(), None);
}

#[test]
fn forgotten_error_carries_newline_count() {
    let mut ps = state("one\ntwo\nthree");
    ps.forget_before(9).unwrap();
    let Err(Error::Forgotten(forgotten)) = ps.slice(3, 2) else {
        panic!("slice before the window must fail");
    };
    assert_eq!(
        forgotten,
        ForgottenState {
            requested: 3,
            available: 9,
            newlines: 2,
        }
    );
    insta::assert_snapshot!(
        forgotten.to_string(),
        @"index 3 was forgotten (oldest available index is 9)"
    );
}

#[test]
fn max_read_is_monotonic_and_bounded() {
    let input = "abc\ndef";
    let available = input.chars().count();
    let mut ps = state(input);
    let mut last = ps.max_read();
    assert_eq!(last, 0);

    let probes: [(usize, usize); 7] = [(2, 0), (0, 0), (1, 2), (5, 1), (3, 0), (0, 40), (100, 0)];
    for (i, n) in probes {
        if n == 0 {
            let _ = ps.read_at(i).unwrap();
        } else {
            let _ = ps.slice(i, n).unwrap();
        }
        let now = ps.max_read();
        assert!(now >= last, "max_read went from {last} to {now}");
        assert!(now <= available);
        last = now;
    }
    assert_eq!(last, available);
}

#[test]
fn max_read_counts_only_pulled_characters() {
    let mut ps = state("abcdef");
    let _ = ps.read_at(1).unwrap();
    assert_eq!(ps.max_read(), 2);
}

#[test]
fn slice_clamps_at_end_of_input() {
    let mut ps = state("abc");
    assert_eq!(ps.slice(1, 10).unwrap(), ['b', 'c']);
    assert!(ps.slice(3, 2).unwrap().is_empty());
    assert!(ps.slice(7, 2).unwrap().is_empty());
    assert_eq!(ps.substring(0, 2).unwrap(), "ab");
}

#[test]
fn slice_after_forgetting_uses_absolute_indices() {
    let mut ps = state("0123456789");
    ps.forget_before(4).unwrap();
    assert_eq!(ps.substring(4, 3).unwrap(), "456");
    assert_eq!(ps.substring(8, 5).unwrap(), "89");
}

#[test]
fn line_numbers_survive_forgetting() {
    let input = "a\nbb\n\nccc\nd";
    let len = input.chars().count();
    let expected: Vec<usize> = (0..=len)
        .map(|p| 1 + input.chars().take(p).filter(|&c| c == '\n').count())
        .collect();

    for p in 0..=len {
        let mut fresh = state(input);
        assert_eq!(fresh.line_at(p).unwrap(), expected[p]);
        for k in 0..=p {
            let mut ps = state(input);
            ps.forget_before(k).unwrap();
            assert_eq!(
                ps.line_at(p).unwrap(),
                expected[p],
                "line of {p} after forget_before({k})"
            );
        }
    }
}

#[test]
fn line_at_before_window_fails() {
    let mut ps = state("a\nb\nc");
    ps.forget_before(3).unwrap();
    assert!(matches!(ps.line_at(1), Err(Error::Forgotten(_))));
}
