//! Rules and expressions.

use std::io::Read;

use egg_core::{GrammarRule, Matcher, MatcherPtr};
use egg_runtime::Match::{Failed, Matched};
use egg_runtime::{Match, Result, State, any, choice, look, many, not, opt, seq, some};

use super::lexical::{
    action, char_class, char_literal, identifier, outer_action, spacing, str_literal, token,
    type_name,
};

/// Grammar source split into its parts, before duplicate checking.
pub(crate) struct ParsedGrammar {
    pub pre_action: String,
    pub rules: Vec<GrammarRule>,
    pub post_action: String,
}

/// The whole input: optional pre-action, rules, optional post-action.
///
/// Input before the line where each completed rule ends is forgotten; no
/// later production backtracks across a rule boundary, and keeping the line
/// keeps error columns exact.
pub(crate) fn grammar<R: Read>(ps: &mut State<R>) -> Result<Match<ParsedGrammar>> {
    seq(ps, |ps| {
        spacing(ps)?;
        let pre_action = opt(ps, outer_action)?.unwrap_or_default().unwrap_or_default();
        let Matched(rules) = some(ps, |ps| {
            let parsed = rule(ps)?;
            if parsed.is_match() {
                ps.forget_before(ps.line_start(ps.pos))?;
            }
            Ok(parsed)
        })?
        else {
            return Ok(Failed);
        };
        let post_action = opt(ps, outer_action)?.unwrap_or_default().unwrap_or_default();
        if not(ps, any)?.is_failed() {
            return Ok(Failed);
        }
        Ok(Matched(ParsedGrammar {
            pre_action,
            rules,
            post_action,
        }))
    })
}

/// `name (: Type)? = choice`
fn rule<R: Read>(ps: &mut State<R>) -> Result<Match<GrammarRule>> {
    seq(ps, |ps| {
        let Matched(name) = identifier(ps)? else {
            return Ok(Failed);
        };
        let Matched(return_type) = rule_head_tail(ps)? else {
            return Ok(Failed);
        };
        let Matched(body) = choice_expr(ps)? else {
            return Ok(Failed);
        };
        log::debug!("parsed rule `{name}`");
        Ok(Matched(GrammarRule::new(name, return_type, body)))
    })
}

/// `(: Type)? =` following a rule name.
fn rule_head_tail<R: Read>(ps: &mut State<R>) -> Result<Match<Option<String>>> {
    seq(ps, |ps| {
        let return_type = opt(ps, |ps| {
            if token(ps, ":")?.is_failed() {
                return Ok(Failed);
            }
            type_name(ps)
        })?
        .unwrap_or_default();
        Ok(token(ps, "=")?.map(|()| return_type))
    })
}

fn choice_expr<R: Read>(ps: &mut State<R>) -> Result<Match<MatcherPtr>> {
    seq(ps, |ps| {
        let Matched(first) = sequence(ps)? else {
            return Ok(Failed);
        };
        let rest = many(ps, |ps| {
            if token(ps, "|")?.is_failed() {
                return Ok(Failed);
            }
            sequence(ps)
        })?
        .unwrap_or_default();
        if rest.is_empty() {
            return Ok(Matched(first));
        }
        let mut alternatives = Vec::with_capacity(rest.len() + 1);
        alternatives.push(first);
        alternatives.extend(rest);
        Ok(Matched(Matcher::choice(alternatives)))
    })
}

fn sequence<R: Read>(ps: &mut State<R>) -> Result<Match<MatcherPtr>> {
    Ok(some(ps, expression)?.map(|mut items| {
        if items.len() == 1 {
            items.remove(0)
        } else {
            Matcher::sequence(items)
        }
    }))
}

fn expression<R: Read>(ps: &mut State<R>) -> Result<Match<MatcherPtr>> {
    choice!(
        ps,
        |ps| prefixed(ps, "&", Matcher::lookahead),
        |ps| prefixed(ps, "!", Matcher::negation),
        suffixed,
    )
}

fn prefixed<R: Read>(
    ps: &mut State<R>,
    op: &str,
    wrap: fn(MatcherPtr) -> MatcherPtr,
) -> Result<Match<MatcherPtr>> {
    if token(ps, op)?.is_failed() {
        return Ok(Failed);
    }
    Ok(primary(ps)?.map(wrap))
}

fn suffixed<R: Read>(ps: &mut State<R>) -> Result<Match<MatcherPtr>> {
    let Matched(inner) = primary(ps)? else {
        return Ok(Failed);
    };
    let wrapped = if token(ps, "?")?.is_match() {
        Matcher::optional(inner)
    } else if token(ps, "*")?.is_match() {
        Matcher::zero_or_more(inner)
    } else if token(ps, "+")?.is_match() {
        Matcher::one_or_more(inner)
    } else {
        inner
    };
    Ok(Matched(wrapped))
}

fn primary<R: Read>(ps: &mut State<R>) -> Result<Match<MatcherPtr>> {
    choice!(
        ps,
        |ps| delimited(ps, "(", ")"),
        |ps| Ok(delimited(ps, "<", ">")?.map(Matcher::capture)),
        rule_ref,
        |ps| Ok(char_literal(ps)?.map(Matcher::char)),
        |ps| Ok(str_literal(ps)?.map(Matcher::string)),
        |ps| Ok(char_class(ps)?.map(Matcher::class)),
        |ps| Ok(token(ps, ".")?.map(|()| Matcher::any())),
        |ps| Ok(token(ps, ";")?.map(|()| Matcher::empty())),
        |ps| Ok(action(ps)?.map(Matcher::action)),
    )
}

fn delimited<R: Read>(ps: &mut State<R>, open: &str, close: &str) -> Result<Match<MatcherPtr>> {
    if token(ps, open)?.is_failed() {
        return Ok(Failed);
    }
    let Matched(inner) = choice_expr(ps)? else {
        return Ok(Failed);
    };
    Ok(token(ps, close)?.map(|()| inner))
}

/// `name (: var)?`, unless the name starts the next rule.
fn rule_ref<R: Read>(ps: &mut State<R>) -> Result<Match<MatcherPtr>> {
    seq(ps, |ps| {
        let Matched(name) = identifier(ps)? else {
            return Ok(Failed);
        };
        if look(ps, rule_head_tail)?.is_match() {
            return Ok(Failed);
        }
        let var = opt(ps, |ps| {
            if token(ps, ":")?.is_failed() {
                return Ok(Failed);
            }
            identifier(ps)
        })?
        .unwrap_or_default();
        Ok(Matched(Matcher::rule(name, var)))
    })
}
