// Generated by egg. Do not edit.

pub mod calc {
#[allow(unused_imports)]
use super::*;

#[allow(unused_mut, unused_variables, unused_parens)]
pub fn sum<R: std::io::Read>(ps: &mut egg_runtime::State<R>) -> egg_runtime::Result<egg_runtime::Match<i64>> {
    let mut ps_val: i64 = Default::default();
    let mut l: i64 = Default::default();
    let mut r: i64 = Default::default();
    let matched = egg_runtime::seq(ps, |ps| Ok(egg_runtime::when(egg_runtime::bind(self::num(ps)?, &mut l) && { { ps_val = l; } true } && egg_runtime::many(ps, |ps| Ok(egg_runtime::when(egg_runtime::matches(ps, '+')?.is_match() && egg_runtime::bind(self::num(ps)?, &mut r) && { { ps_val += r; } true })))?.is_match())))?.is_match();
    Ok(if matched { egg_runtime::Match::Matched(ps_val) } else { egg_runtime::Match::Failed })
}

#[allow(unused_mut, unused_variables, unused_parens)]
pub fn num<R: std::io::Read>(ps: &mut egg_runtime::State<R>) -> egg_runtime::Result<egg_runtime::Match<i64>> {
    let mut ps_val: i64 = Default::default();
    let mut ps_capture = String::new();
    let matched = egg_runtime::seq(ps, |ps| Ok(egg_runtime::when(egg_runtime::bind(egg_runtime::capture(ps, |ps| Ok(egg_runtime::when(egg_runtime::some(ps, |ps| Ok(egg_runtime::when(egg_runtime::in_ranges(ps, &[('0', '9')])?.is_match())))?.is_match())))?, &mut ps_capture) && { { ps_val = ps_capture.parse().unwrap_or_default(); } true })))?.is_match();
    Ok(if matched { egg_runtime::Match::Matched(ps_val) } else { egg_runtime::Match::Failed })
}

#[allow(unused_mut, unused_variables, unused_parens)]
pub fn ab<R: std::io::Read>(ps: &mut egg_runtime::State<R>) -> egg_runtime::Result<egg_runtime::Match<()>> {
    let mut ps_val: () = Default::default();
    let matched = egg_runtime::seq(ps, |ps| Ok(egg_runtime::when(egg_runtime::matches(ps, 'a')?.is_match() && egg_runtime::matches(ps, 'b')?.is_match())))?.is_match();
    Ok(if matched { egg_runtime::Match::Matched(ps_val) } else { egg_runtime::Match::Failed })
}

#[allow(unused_mut, unused_variables, unused_parens)]
pub fn first<R: std::io::Read>(ps: &mut egg_runtime::State<R>) -> egg_runtime::Result<egg_runtime::Match<()>> {
    let mut ps_val: () = Default::default();
    let matched = (egg_runtime::matches_str(ps, "a")?.is_match() || egg_runtime::matches_str(ps, "ab")?.is_match());
    Ok(if matched { egg_runtime::Match::Matched(ps_val) } else { egg_runtime::Match::Failed })
}

#[allow(unused_mut, unused_variables, unused_parens)]
pub fn many_x<R: std::io::Read>(ps: &mut egg_runtime::State<R>) -> egg_runtime::Result<egg_runtime::Match<()>> {
    let mut ps_val: () = Default::default();
    let matched = egg_runtime::many(ps, |ps| Ok(egg_runtime::when(egg_runtime::matches(ps, 'x')?.is_match())))?.is_match();
    Ok(if matched { egg_runtime::Match::Matched(ps_val) } else { egg_runtime::Match::Failed })
}

#[allow(unused_mut, unused_variables, unused_parens)]
pub fn some_x<R: std::io::Read>(ps: &mut egg_runtime::State<R>) -> egg_runtime::Result<egg_runtime::Match<()>> {
    let mut ps_val: () = Default::default();
    let matched = egg_runtime::some(ps, |ps| Ok(egg_runtime::when(egg_runtime::matches(ps, 'x')?.is_match())))?.is_match();
    Ok(if matched { egg_runtime::Match::Matched(ps_val) } else { egg_runtime::Match::Failed })
}

#[allow(unused_mut, unused_variables, unused_parens)]
pub fn kw<R: std::io::Read>(ps: &mut egg_runtime::State<R>) -> egg_runtime::Result<egg_runtime::Match<()>> {
    let mut ps_val: () = Default::default();
    let matched = egg_runtime::seq(ps, |ps| Ok(egg_runtime::when(egg_runtime::matches_str(ps, "let")?.is_match() && egg_runtime::not(ps, |ps| Ok(egg_runtime::when(egg_runtime::in_ranges(ps, &[('a', 'z')])?.is_match())))?.is_match())))?.is_match();
    Ok(if matched { egg_runtime::Match::Matched(ps_val) } else { egg_runtime::Match::Failed })
}
}
