//! Grammar IR visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your pass and override the `visit_*` methods it
//! cares about. Leaf methods default to no-ops; composite methods default to
//! visiting their children. Call the matching `walk_*` function inside an
//! override to keep descending, or skip it to prune.
//!
//! ```
//! use egg_core::{Matcher, RuleRef, Visitor};
//!
//! #[derive(Default)]
//! struct RefCounter(usize);
//!
//! impl Visitor for RefCounter {
//!     fn visit_rule_ref(&mut self, _rule: &RuleRef) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let body = Matcher::sequence(vec![
//!     Matcher::rule("a", None),
//!     Matcher::optional(Matcher::rule("b", None)),
//! ]);
//! let mut counter = RefCounter::default();
//! body.accept(&mut counter);
//! assert_eq!(counter.0, 2);
//! ```

use crate::grammar::{Grammar, GrammarRule};
use crate::matcher::{CharRange, MatcherPtr, RuleRef};

pub trait Visitor: Sized {
    fn visit_grammar(&mut self, grammar: &Grammar) {
        walk_grammar(self, grammar);
    }

    fn visit_rule(&mut self, rule: &GrammarRule) {
        walk_rule(self, rule);
    }

    fn visit_char(&mut self, _c: char) {}

    fn visit_str(&mut self, _s: &str) {}

    fn visit_class(&mut self, _ranges: &[CharRange]) {}

    fn visit_rule_ref(&mut self, _rule: &RuleRef) {}

    fn visit_any(&mut self) {}

    fn visit_empty(&mut self) {}

    fn visit_action(&mut self, _code: &str) {}

    fn visit_optional(&mut self, inner: &MatcherPtr) {
        walk_matcher(self, inner);
    }

    fn visit_zero_or_more(&mut self, inner: &MatcherPtr) {
        walk_matcher(self, inner);
    }

    fn visit_one_or_more(&mut self, inner: &MatcherPtr) {
        walk_matcher(self, inner);
    }

    fn visit_sequence(&mut self, items: &[MatcherPtr]) {
        walk_list(self, items);
    }

    fn visit_choice(&mut self, alternatives: &[MatcherPtr]) {
        walk_list(self, alternatives);
    }

    fn visit_lookahead(&mut self, inner: &MatcherPtr) {
        walk_matcher(self, inner);
    }

    fn visit_negation(&mut self, inner: &MatcherPtr) {
        walk_matcher(self, inner);
    }

    fn visit_capture(&mut self, inner: &MatcherPtr) {
        walk_matcher(self, inner);
    }
}

pub fn walk_grammar<V: Visitor>(visitor: &mut V, grammar: &Grammar) {
    for rule in grammar.rules() {
        visitor.visit_rule(rule);
    }
}

pub fn walk_rule<V: Visitor>(visitor: &mut V, rule: &GrammarRule) {
    rule.body.accept(visitor);
}

pub fn walk_matcher<V: Visitor>(visitor: &mut V, matcher: &MatcherPtr) {
    matcher.accept(visitor);
}

pub fn walk_list<V: Visitor>(visitor: &mut V, matchers: &[MatcherPtr]) {
    for matcher in matchers {
        matcher.accept(visitor);
    }
}
