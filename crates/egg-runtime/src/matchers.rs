//! Primitive recognizers.
//!
//! Each advances the cursor past what it matched and leaves it untouched on
//! failure.

use std::io::Read;

use crate::error::Result;
use crate::result::Match;
use crate::state::State;

/// Any single character; fails only at end of input.
pub fn any<R: Read>(ps: &mut State<R>) -> Result<Match<char>> {
    match ps.peek()? {
        Some(c) => {
            ps.pos += 1;
            Ok(Match::Matched(c))
        }
        None => Ok(Match::Failed),
    }
}

/// Exactly `expected`.
pub fn matches<R: Read>(ps: &mut State<R>, expected: char) -> Result<Match<char>> {
    match ps.peek()? {
        Some(c) if c == expected => {
            ps.pos += 1;
            Ok(Match::Matched(c))
        }
        _ => Ok(Match::Failed),
    }
}

/// The characters of `expected`, in order.
pub fn matches_str<R: Read>(ps: &mut State<R>, expected: &str) -> Result<Match<()>> {
    let len = expected.chars().count();
    let found = ps.slice(ps.pos, len)?;
    if found.len() == len && found.iter().copied().eq(expected.chars()) {
        ps.pos += len;
        Ok(Match::Matched(()))
    } else {
        Ok(Match::Failed)
    }
}

/// One character in `from..=to`.
pub fn in_range<R: Read>(ps: &mut State<R>, from: char, to: char) -> Result<Match<char>> {
    in_ranges(ps, &[(from, to)])
}

/// One character in any of the inclusive `ranges`.
pub fn in_ranges<R: Read>(ps: &mut State<R>, ranges: &[(char, char)]) -> Result<Match<char>> {
    match ps.peek()? {
        Some(c) if ranges.iter().any(|&(from, to)| from <= c && c <= to) => {
            ps.pos += 1;
            Ok(Match::Matched(c))
        }
        _ => Ok(Match::Failed),
    }
}
