/// Where a literal character is written, which decides what needs escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralContext {
    /// Inside `'...'`.
    Char,
    /// Inside `"..."`.
    Str,
    /// Inside `[...]`.
    Class,
}

/// Escape a character for grammar source.
///
/// # Examples
/// ```
/// use egg_core::utils::{LiteralContext, escape_char};
/// assert_eq!(escape_char('\n', LiteralContext::Str), "\\n");
/// assert_eq!(escape_char('\'', LiteralContext::Char), "\\'");
/// assert_eq!(escape_char('\'', LiteralContext::Str), "'");
/// assert_eq!(escape_char('-', LiteralContext::Class), "\\-");
/// ```
pub fn escape_char(c: char, context: LiteralContext) -> String {
    let mut out = String::new();
    push_escaped(&mut out, c, context);
    out
}

/// Escape a whole string for a `"..."` literal.
pub fn escape_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_escaped(&mut out, c, LiteralContext::Str);
    }
    out
}

fn push_escaped(out: &mut String, c: char, context: LiteralContext) {
    match c {
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        '\\' => out.push_str("\\\\"),
        '\'' if context == LiteralContext::Char => out.push_str("\\'"),
        '"' if context == LiteralContext::Str => out.push_str("\\\""),
        '[' | ']' | '-' if context == LiteralContext::Class => {
            out.push('\\');
            out.push(c);
        }
        c if c.is_control() => {
            out.push_str(&format!("\\u{{{:x}}}", c as u32));
        }
        c => out.push(c),
    }
}

/// Decode the character after a backslash. `u` escapes are handled by the parser.
pub fn unescape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '0' => Some('\0'),
        '\\' | '\'' | '"' | '[' | ']' | '-' => Some(c),
        _ => None,
    }
}

pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

pub fn is_identifier_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && identifier_prefix(s).len() == s.len()
}

/// Longest prefix of `s` that is a valid identifier (possibly empty).
///
/// # Examples
/// ```
/// use egg_core::utils::identifier_prefix;
/// assert_eq!(identifier_prefix("calc.egg"), "calc");
/// assert_eq!(identifier_prefix("json_2-parser"), "json_2");
/// assert_eq!(identifier_prefix("9lives"), "");
/// ```
pub fn identifier_prefix(s: &str) -> &str {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if is_identifier_start(c) => {}
        _ => return "",
    }
    let end = chars
        .find(|&(_, c)| !is_identifier_continue(c))
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}
