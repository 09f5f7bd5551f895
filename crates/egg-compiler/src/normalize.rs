//! IR simplification.
//!
//! Produces a new grammar with the same rules and the same matching
//! behaviour. Subtrees that need no rewriting are shared with the input.

use std::rc::Rc;

use egg_core::{CharRange, Grammar, Matcher, MatcherPtr, Visitor};

pub fn normalize(grammar: &Grammar) -> Grammar {
    let mut normalizer = Normalizer::default();
    grammar.map_rules(|rule| {
        let body = normalizer.rewrite(&rule.body);
        if Rc::ptr_eq(&body, &rule.body) {
            return Rc::clone(rule);
        }
        log::debug!("normalized rule `{}`", rule.name);
        Rc::new(rule.with_body(body))
    })
}

/// Normalize a single matcher tree.
pub fn normalize_matcher(matcher: &MatcherPtr) -> MatcherPtr {
    Normalizer::default().rewrite(matcher)
}

/// Each `visit_*` leaves its replacement in `out`, or `None` when the
/// visited matcher is already normal.
#[derive(Default)]
struct Normalizer {
    out: Option<MatcherPtr>,
}

impl Normalizer {
    fn rewrite(&mut self, matcher: &MatcherPtr) -> MatcherPtr {
        self.out = None;
        matcher.accept(self);
        self.out.take().unwrap_or_else(|| Rc::clone(matcher))
    }

    /// Rewrites `items`, splicing in the children of nested lists `flatten` selects.
    ///
    /// Returns the new list and whether it differs from `items`.
    fn rewrite_list(
        &mut self,
        items: &[MatcherPtr],
        flatten: impl Fn(&Matcher) -> Option<&[MatcherPtr]>,
    ) -> (Vec<MatcherPtr>, bool) {
        let mut out = Vec::with_capacity(items.len());
        let mut changed = false;
        for item in items {
            let rewritten = self.rewrite(item);
            changed |= !Rc::ptr_eq(&rewritten, item);
            match flatten(&rewritten) {
                Some(nested) => {
                    out.extend(nested.iter().cloned());
                    changed = true;
                }
                None => out.push(rewritten),
            }
        }
        (out, changed)
    }
}

impl Visitor for Normalizer {
    fn visit_str(&mut self, s: &str) {
        let mut chars = s.chars();
        self.out = match (chars.next(), chars.next()) {
            (None, _) => Some(Matcher::empty()),
            (Some(c), None) => Some(Matcher::char(c)),
            _ => None,
        };
    }

    fn visit_class(&mut self, ranges: &[CharRange]) {
        if let [range] = ranges
            && range.is_single()
        {
            self.out = Some(Matcher::char(range.from()));
        }
    }

    fn visit_optional(&mut self, inner: &MatcherPtr) {
        let x = self.rewrite(inner);
        self.out = match &*x {
            Matcher::Optional(_) | Matcher::ZeroOrMore(_) | Matcher::Empty => Some(Rc::clone(&x)),
            Matcher::OneOrMore(y) => Some(Matcher::zero_or_more(Rc::clone(y))),
            _ if Rc::ptr_eq(&x, inner) => None,
            _ => Some(Matcher::optional(Rc::clone(&x))),
        };
    }

    fn visit_zero_or_more(&mut self, inner: &MatcherPtr) {
        let x = self.rewrite(inner);
        self.out = match &*x {
            Matcher::ZeroOrMore(_) => Some(Rc::clone(&x)),
            Matcher::OneOrMore(y) | Matcher::Optional(y) => {
                Some(Matcher::zero_or_more(Rc::clone(y)))
            }
            _ if Rc::ptr_eq(&x, inner) => None,
            _ => Some(Matcher::zero_or_more(Rc::clone(&x))),
        };
    }

    fn visit_one_or_more(&mut self, inner: &MatcherPtr) {
        let x = self.rewrite(inner);
        self.out = match &*x {
            Matcher::OneOrMore(_) => Some(Rc::clone(&x)),
            Matcher::ZeroOrMore(y) | Matcher::Optional(y) => {
                Some(Matcher::zero_or_more(Rc::clone(y)))
            }
            _ if Rc::ptr_eq(&x, inner) => None,
            _ => Some(Matcher::one_or_more(Rc::clone(&x))),
        };
    }

    fn visit_sequence(&mut self, items: &[MatcherPtr]) {
        let (mut items, mut changed) = self.rewrite_list(items, |m| match m {
            Matcher::Sequence(nested) => Some(nested.as_slice()),
            _ => None,
        });
        let before = items.len();
        items.retain(|m| !matches!(**m, Matcher::Empty));
        changed |= items.len() != before;

        self.out = match items.len() {
            0 => Some(Matcher::empty()),
            1 => items.pop(),
            _ if changed => Some(Matcher::sequence(items)),
            _ => None,
        };
    }

    fn visit_choice(&mut self, alternatives: &[MatcherPtr]) {
        let (mut alts, mut changed) = self.rewrite_list(alternatives, |m| match m {
            Matcher::Choice(nested) => Some(nested.as_slice()),
            _ => None,
        });
        if let Some(last) = alts.iter().position(|m| m.never_fails()) {
            changed |= last + 1 < alts.len();
            alts.truncate(last + 1);
        }

        self.out = match alts.len() {
            1 => alts.pop(),
            _ if changed => Some(Matcher::choice(alts)),
            _ => None,
        };
    }

    fn visit_lookahead(&mut self, inner: &MatcherPtr) {
        let x = self.rewrite(inner);
        self.out = match &*x {
            Matcher::Lookahead(_) | Matcher::Negation(_) => Some(Rc::clone(&x)),
            _ if Rc::ptr_eq(&x, inner) => None,
            _ => Some(Matcher::lookahead(Rc::clone(&x))),
        };
    }

    fn visit_negation(&mut self, inner: &MatcherPtr) {
        let x = self.rewrite(inner);
        self.out = match &*x {
            Matcher::Negation(y) => Some(Matcher::lookahead(Rc::clone(y))),
            Matcher::Lookahead(y) => Some(Matcher::negation(Rc::clone(y))),
            _ if Rc::ptr_eq(&x, inner) => None,
            _ => Some(Matcher::negation(Rc::clone(&x))),
        };
    }

    fn visit_capture(&mut self, inner: &MatcherPtr) {
        let x = self.rewrite(inner);
        if !Rc::ptr_eq(&x, inner) {
            self.out = Some(Matcher::capture(x));
        }
    }
}
