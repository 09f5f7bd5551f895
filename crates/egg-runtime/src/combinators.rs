//! Composite matchers.
//!
//! Matchers are closures `FnOnce(&mut State<R>) -> Result<Match<T>>` (or
//! `FnMut` when applied repeatedly). Every combinator restores the cursor when
//! it fails.

use std::io::Read;

use crate::error::Result;
use crate::result::Match;
use crate::state::State;

/// Run `f`, rewinding the cursor if it fails.
pub fn seq<R, T>(
    ps: &mut State<R>,
    f: impl FnOnce(&mut State<R>) -> Result<Match<T>>,
) -> Result<Match<T>>
where
    R: Read,
{
    let start = ps.pos;
    let m = f(ps)?;
    if m.is_failed() {
        ps.pos = start;
    }
    Ok(m)
}

/// Ordered choice: the first alternative that matches wins.
///
/// Each alternative is a matcher closure or function. Expands to an
/// expression of type `Result<Match<T>>`.
///
/// ```
/// use egg_runtime::{State, choice, matches_str};
///
/// let mut ps = State::new("ab".as_bytes());
/// let m = choice!(&mut ps, |ps| matches_str(ps, "a"), |ps| matches_str(ps, "ab")).unwrap();
/// assert!(m.is_match());
/// assert_eq!(ps.pos, 1);
/// ```
#[macro_export]
macro_rules! choice {
    ($ps:expr $(, $alt:expr)+ $(,)?) => {{
        let ps: &mut $crate::State<_> = &mut *$ps;
        (|| -> $crate::Result<_> {
            $(
                if let m @ $crate::Match::Matched(_) = $crate::seq(&mut *ps, $alt)? {
                    return Ok(m);
                }
            )+
            Ok($crate::Match::Failed)
        })()
    }};
}

/// Zero or one `f`. Never fails.
pub fn opt<R, T>(
    ps: &mut State<R>,
    f: impl FnOnce(&mut State<R>) -> Result<Match<T>>,
) -> Result<Match<Option<T>>>
where
    R: Read,
{
    Ok(Match::Matched(seq(ps, f)?.value()))
}

/// Zero or more `f`, greedily. Never fails.
///
/// Stops after an iteration that matches without consuming input.
pub fn many<R, T, F>(ps: &mut State<R>, mut f: F) -> Result<Match<Vec<T>>>
where
    R: Read,
    F: FnMut(&mut State<R>) -> Result<Match<T>>,
{
    let mut values = Vec::new();
    repeat(ps, &mut f, &mut values)?;
    Ok(Match::Matched(values))
}

/// One or more `f`, greedily.
pub fn some<R, T, F>(ps: &mut State<R>, mut f: F) -> Result<Match<Vec<T>>>
where
    R: Read,
    F: FnMut(&mut State<R>) -> Result<Match<T>>,
{
    let start = ps.pos;
    let Match::Matched(first) = seq(ps, &mut f)? else {
        return Ok(Match::Failed);
    };
    let mut values = vec![first];
    if ps.pos != start {
        repeat(ps, &mut f, &mut values)?;
    }
    Ok(Match::Matched(values))
}

fn repeat<R, T, F>(ps: &mut State<R>, f: &mut F, values: &mut Vec<T>) -> Result<()>
where
    R: Read,
    F: FnMut(&mut State<R>) -> Result<Match<T>>,
{
    loop {
        let start = ps.pos;
        match seq(ps, &mut *f)? {
            Match::Matched(v) => {
                values.push(v);
                if ps.pos == start {
                    return Ok(());
                }
            }
            Match::Failed => return Ok(()),
        }
    }
}

/// Positive lookahead: matches iff `f` does, consuming nothing.
pub fn look<R, T>(
    ps: &mut State<R>,
    f: impl FnOnce(&mut State<R>) -> Result<Match<T>>,
) -> Result<Match<()>>
where
    R: Read,
{
    let start = ps.pos;
    let m = f(ps)?;
    ps.pos = start;
    Ok(m.map(|_| ()))
}

/// Negative lookahead: matches iff `f` fails, consuming nothing.
pub fn not<R, T>(
    ps: &mut State<R>,
    f: impl FnOnce(&mut State<R>) -> Result<Match<T>>,
) -> Result<Match<()>>
where
    R: Read,
{
    let start = ps.pos;
    let m = f(ps)?;
    ps.pos = start;
    Ok(if m.is_match() {
        Match::Failed
    } else {
        Match::Matched(())
    })
}

/// Matches like `f` and yields the text it consumed.
pub fn capture<R, T>(
    ps: &mut State<R>,
    f: impl FnOnce(&mut State<R>) -> Result<Match<T>>,
) -> Result<Match<String>>
where
    R: Read,
{
    let start = ps.pos;
    match seq(ps, f)? {
        Match::Matched(_) => Ok(Match::Matched(ps.substring(start, ps.pos - start)?)),
        Match::Failed => Ok(Match::Failed),
    }
}

/// Store a matched value into `slot`; reports whether `m` matched.
///
/// `slot` keeps its previous value on failure.
pub fn bind<T>(m: Match<T>, slot: &mut T) -> bool {
    match m {
        Match::Matched(v) => {
            *slot = v;
            true
        }
        Match::Failed => false,
    }
}
