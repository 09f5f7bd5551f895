use crate::utils::{
    LiteralContext, escape_char, escape_str, identifier_prefix, is_identifier, unescape,
};

#[test]
fn escapes_depend_on_context() {
    assert_eq!(escape_char('"', LiteralContext::Char), "\"");
    assert_eq!(escape_char('"', LiteralContext::Str), "\\\"");
    assert_eq!(escape_char(']', LiteralContext::Class), "\\]");
    assert_eq!(escape_char(']', LiteralContext::Str), "]");
    assert_eq!(escape_char('\\', LiteralContext::Class), "\\\\");
}

#[test]
fn control_characters_use_unicode_escapes() {
    assert_eq!(escape_char('\u{7}', LiteralContext::Char), "\\u{7}");
    assert_eq!(escape_str("a\u{1b}b"), "a\\u{1b}b");
}

#[test]
fn non_ascii_is_kept() {
    assert_eq!(escape_str("héllo→"), "héllo→");
}

#[test]
fn unescape_inverts_simple_escapes() {
    for c in ['\n', '\r', '\t', '\0', '\\', '\'', '"', '[', ']', '-'] {
        let escaped = escape_char(c, LiteralContext::Class);
        let escaped = if escaped.len() == 1 {
            format!("\\{escaped}")
        } else {
            escaped
        };
        let after_backslash = escaped.chars().nth(1).unwrap();
        assert_eq!(unescape(after_backslash), Some(c), "escape of {c:?}");
    }
    assert_eq!(unescape('q'), None);
}

#[test]
fn identifier_prefixes() {
    assert_eq!(identifier_prefix("_x1 y"), "_x1");
    assert_eq!(identifier_prefix(""), "");
    assert_eq!(identifier_prefix("-a"), "");
    assert_eq!(identifier_prefix("abc"), "abc");
}

#[test]
fn identifiers() {
    assert!(is_identifier("rule_1"));
    assert!(is_identifier("_"));
    assert!(!is_identifier("1rule"));
    assert!(!is_identifier("a-b"));
    assert!(!is_identifier(""));
}
