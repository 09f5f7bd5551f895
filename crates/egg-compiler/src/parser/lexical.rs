//! Tokens: spacing, identifiers, literals, types and code blocks.
//!
//! Every token function consumes trailing spacing on success and leaves the
//! cursor untouched on failure.

use std::io::Read;

use egg_core::CharRange;
use egg_core::utils::{is_identifier_continue, is_identifier_start, unescape};
use egg_runtime::Match::{Failed, Matched};
use egg_runtime::{
    Match, Result, State, any, capture, choice, many, matches, matches_str, not, opt, seq, some,
    when,
};

/// Whitespace and `#` comments running to end of line.
pub(crate) fn spacing<R: Read>(ps: &mut State<R>) -> Result<()> {
    loop {
        match ps.peek()? {
            Some(c) if c.is_whitespace() => ps.pos += 1,
            Some('#') => {
                while let Some(c) = ps.peek()? {
                    ps.pos += 1;
                    if c == '\n' {
                        break;
                    }
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Exactly `text`.
pub(crate) fn token<R: Read>(ps: &mut State<R>, text: &str) -> Result<Match<()>> {
    let m = matches_str(ps, text)?;
    if m.is_match() {
        spacing(ps)?;
    }
    Ok(m)
}

pub(crate) fn identifier<R: Read>(ps: &mut State<R>) -> Result<Match<String>> {
    let name = capture(ps, |ps| {
        if char_where(ps, is_identifier_start)?.is_failed() {
            return Ok(Failed);
        }
        many(ps, |ps| char_where(ps, is_identifier_continue))
    })?;
    if name.is_match() {
        spacing(ps)?;
    }
    Ok(name)
}

/// `'c'`
pub(crate) fn char_literal<R: Read>(ps: &mut State<R>) -> Result<Match<char>> {
    seq(ps, |ps| {
        if matches(ps, '\'')?.is_failed() {
            return Ok(Failed);
        }
        let Matched(c) = choice!(ps, escape, |ps| char_where(ps, |c| c != '\'' && c != '\\'))?
        else {
            return Ok(Failed);
        };
        if matches(ps, '\'')?.is_failed() {
            return Ok(Failed);
        }
        spacing(ps)?;
        Ok(Matched(c))
    })
}

/// `"text"`
pub(crate) fn str_literal<R: Read>(ps: &mut State<R>) -> Result<Match<String>> {
    seq(ps, |ps| {
        if matches(ps, '"')?.is_failed() {
            return Ok(Failed);
        }
        let chars = many(ps, |ps| {
            choice!(ps, escape, |ps| char_where(ps, |c| c != '"' && c != '\\'))
        })?
        .unwrap_or_default();
        if matches(ps, '"')?.is_failed() {
            return Ok(Failed);
        }
        spacing(ps)?;
        Ok(Matched(chars.into_iter().collect()))
    })
}

/// `[a-z_]`
pub(crate) fn char_class<R: Read>(ps: &mut State<R>) -> Result<Match<Vec<CharRange>>> {
    seq(ps, |ps| {
        if matches(ps, '[')?.is_failed() {
            return Ok(Failed);
        }
        let ranges = many(ps, class_range)?.unwrap_or_default();
        if matches(ps, ']')?.is_failed() {
            return Ok(Failed);
        }
        spacing(ps)?;
        Ok(Matched(ranges))
    })
}

fn class_range<R: Read>(ps: &mut State<R>) -> Result<Match<CharRange>> {
    seq(ps, |ps| {
        let Matched(from) = class_char(ps)? else {
            return Ok(Failed);
        };
        let to = opt(ps, |ps| {
            if matches(ps, '-')?.is_failed() {
                return Ok(Failed);
            }
            class_char(ps)
        })?
        .unwrap_or_default();
        Ok(Matched(CharRange::new(from, to.unwrap_or(from))))
    })
}

fn class_char<R: Read>(ps: &mut State<R>) -> Result<Match<char>> {
    choice!(ps, escape, |ps| char_where(ps, |c| c != ']' && c != '\\'))
}

fn escape<R: Read>(ps: &mut State<R>) -> Result<Match<char>> {
    seq(ps, |ps| {
        if matches(ps, '\\')?.is_failed() {
            return Ok(Failed);
        }
        if matches(ps, 'u')?.is_match() {
            return unicode_escape(ps);
        }
        let Some(decoded) = ps.peek()?.and_then(unescape) else {
            return Ok(Failed);
        };
        ps.pos += 1;
        Ok(Matched(decoded))
    })
}

/// `{1f600}` after `\u`.
fn unicode_escape<R: Read>(ps: &mut State<R>) -> Result<Match<char>> {
    if matches(ps, '{')?.is_failed() {
        return Ok(Failed);
    }
    let hex_digits = |ps: &mut State<R>| some(ps, |ps| char_where(ps, |c| c.is_ascii_hexdigit()));
    let Matched(digits) = capture(ps, hex_digits)? else {
        return Ok(Failed);
    };
    if matches(ps, '}')?.is_failed() {
        return Ok(Failed);
    }
    Ok(u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .into())
}

/// `{ code }` with balanced braces; yields the code between the outer braces.
pub(crate) fn action<R: Read>(ps: &mut State<R>) -> Result<Match<String>> {
    seq(ps, |ps| {
        if not(ps, |ps| matches_str(ps, "{%"))?.is_failed() || matches(ps, '{')?.is_failed() {
            return Ok(Failed);
        }
        let Matched(code) = capture(ps, balanced_braces)? else {
            return Ok(Failed);
        };
        if matches(ps, '}')?.is_failed() {
            return Ok(Failed);
        }
        spacing(ps)?;
        Ok(Matched(code))
    })
}

/// Stops before the `}` that closes the enclosing block.
fn balanced_braces<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    let mut depth = 0usize;
    loop {
        match ps.peek()? {
            None => return Ok(Failed),
            Some('}') if depth == 0 => return Ok(Matched(())),
            Some('}') => depth -= 1,
            Some('{') => depth += 1,
            Some(_) => {}
        }
        ps.pos += 1;
    }
}

/// `{% code %}`, emitted before or after all rules.
pub(crate) fn outer_action<R: Read>(ps: &mut State<R>) -> Result<Match<String>> {
    seq(ps, |ps| {
        if matches_str(ps, "{%")?.is_failed() {
            return Ok(Failed);
        }
        let Matched(code) = capture(ps, |ps| {
            many(ps, |ps| {
                if not(ps, |ps| matches_str(ps, "%}"))?.is_failed() {
                    return Ok(Failed);
                }
                any(ps)
            })
        })?
        else {
            return Ok(Failed);
        };
        if matches_str(ps, "%}")?.is_failed() {
            return Ok(Failed);
        }
        spacing(ps)?;
        Ok(Matched(code))
    })
}

/// A Rust type: paths with generic arguments, references, tuples, arrays.
///
/// Yields the source text with comments dropped and spacing collapsed to
/// single spaces.
pub(crate) fn type_name<R: Read>(ps: &mut State<R>) -> Result<Match<String>> {
    Ok(capture(ps, type_expr)?.map(|text| collapse_spacing(&text)))
}

fn collapse_spacing(text: &str) -> String {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code))
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn type_expr<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    seq(ps, |ps| {
        let _ = many(ps, |ps| token(ps, "&"))?;
        let _ = opt(ps, lifetime)?;
        let _ = opt(ps, mut_keyword)?;
        choice!(ps, tuple_type, array_type, path_type)
    })
}

/// `mut`, not as the prefix of a longer identifier.
fn mut_keyword<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    seq(ps, |ps| {
        if matches_str(ps, "mut")?.is_failed()
            || char_where(ps, is_identifier_continue)?.is_match()
        {
            return Ok(Failed);
        }
        spacing(ps)?;
        Ok(Matched(()))
    })
}

fn lifetime<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    seq(ps, |ps| {
        Ok(when(
            matches(ps, '\'')?.is_match() && identifier(ps)?.is_match(),
        ))
    })
}

fn tuple_type<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    if token(ps, "(")?.is_failed() {
        return Ok(Failed);
    }
    let _ = opt(ps, type_list)?;
    token(ps, ")")
}

fn array_type<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    if token(ps, "[")?.is_failed() || type_expr(ps)?.is_failed() {
        return Ok(Failed);
    }
    let _ = opt(ps, |ps| {
        if token(ps, ";")?.is_failed() {
            return Ok(Failed);
        }
        let digits = some(ps, |ps| char_where(ps, |c| c.is_ascii_digit()))?;
        spacing(ps)?;
        Ok(digits)
    })?;
    token(ps, "]")
}

fn path_type<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    let _ = opt(ps, |ps| token(ps, "::"))?;
    if identifier(ps)?.is_failed() {
        return Ok(Failed);
    }
    let _ = many(ps, |ps| {
        Ok(when(
            token(ps, "::")?.is_match() && identifier(ps)?.is_match(),
        ))
    })?;
    let _ = opt(ps, |ps| {
        Ok(when(
            token(ps, "<")?.is_match() && type_list(ps)?.is_match() && token(ps, ">")?.is_match(),
        ))
    })?;
    Ok(Matched(()))
}

fn type_list<R: Read>(ps: &mut State<R>) -> Result<Match<()>> {
    if type_expr(ps)?.is_failed() {
        return Ok(Failed);
    }
    let _ = many(ps, |ps| {
        Ok(when(
            token(ps, ",")?.is_match() && type_expr(ps)?.is_match(),
        ))
    })?;
    let _ = opt(ps, |ps| token(ps, ","))?;
    Ok(Matched(()))
}

/// One character satisfying `pred`.
fn char_where<R: Read>(ps: &mut State<R>, pred: impl FnOnce(char) -> bool) -> Result<Match<char>> {
    match ps.peek()? {
        Some(c) if pred(c) => {
            ps.pos += 1;
            Ok(Matched(c))
        }
        _ => Ok(Failed),
    }
}
