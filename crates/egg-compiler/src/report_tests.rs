use egg_runtime::State;
use indoc::indoc;

use crate::parser::parse_str;
use crate::report::SyntaxError;
use crate::Error;

fn syntax_error(source: &str) -> SyntaxError {
    match parse_str(source) {
        Err(Error::Syntax(e)) => e,
        other => panic!("expected a syntax error, got {other:?}"),
    }
}

#[test]
fn unterminated_char_on_first_line() {
    let e = syntax_error("a = 'x\n");
    assert_eq!(e.offset, 7);
    assert_eq!(e.line, 1);
    assert_eq!(e.column, Some(7));
    assert_eq!(e.line_text, "a = 'x");
    insta::assert_snapshot!(e.to_string(), @"parse failure 7 characters into the input");
}

#[test]
fn line_survives_forgotten_rules() {
    let e = syntax_error(indoc! {"
        a = 'x'
        b = 'y'
        c = ( 'z'
    "});
    assert_eq!(e.offset, 26);
    assert_eq!(e.line, 3);
    assert_eq!(e.column, Some(10));
    assert_eq!(e.line_text, "c = ( 'z'");
}

#[test]
fn empty_input() {
    let e = syntax_error("");
    assert_eq!(e.offset, 0);
    assert_eq!(e.line, 1);
    assert_eq!(e.column, Some(1));
    assert_eq!(e.line_text, "");
}

#[test]
fn render_shows_line_and_caret_label() {
    let rendered = syntax_error("a = 'x\n").render();
    assert!(rendered.contains("parse failure 7 characters into the input"));
    assert!(rendered.contains("a = 'x"));
    assert!(rendered.contains("error, column 7"));
    assert!(!rendered.contains('\x1b'));
}

#[test]
fn render_colored_uses_ansi() {
    let rendered = syntax_error("a = ?").render_colored(true);
    assert!(rendered.contains('\x1b'));
}

#[test]
fn forgotten_line_renders_line_number_only() {
    let mut ps = State::new("ab\ncd\n".as_bytes());
    ps.forget_before(6).unwrap();
    let e = SyntaxError::at_furthest(&mut ps).unwrap();
    assert_eq!(e.column, None);
    assert_eq!(e.line, 3);
    insta::assert_snapshot!(e.render().trim_end(), @r"
    error: parse failure 6 characters into the input
     --> line 3
    ");
}

#[test]
fn column_counts_characters_after_a_completed_rule() {
    let e = syntax_error("a = 'ü' é");
    assert_eq!(e.offset, 9);
    assert_eq!(e.line_text, "a = 'ü' é");
    assert_eq!(e.column, Some(9));
    assert!(e.render().contains("error, column 9"));
}
