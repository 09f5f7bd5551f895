//! Rules and grammars.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::matcher::MatcherPtr;
use crate::visitor::Visitor;

pub type GrammarRulePtr = Rc<GrammarRule>;

/// A named rule with an optional return type.
///
/// Rules without a return type produce no value that other rules can bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    pub name: String,
    pub return_type: Option<String>,
    pub body: MatcherPtr,
}

impl GrammarRule {
    pub fn new(name: impl Into<String>, return_type: Option<String>, body: MatcherPtr) -> Self {
        Self {
            name: name.into(),
            return_type,
            body,
        }
    }

    /// Same name and type, different body.
    pub fn with_body(&self, body: MatcherPtr) -> Self {
        Self {
            name: self.name.clone(),
            return_type: self.return_type.clone(),
            body,
        }
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_rule(self);
    }
}

/// Returned by [`Grammar::add_rule`] when the name is already taken.
///
/// Carries the rejected rule back to the caller.
#[derive(Debug, Clone, thiserror::Error)]
#[error("rule `{}` is already defined", .0.name)]
pub struct DuplicateRule(pub GrammarRulePtr);

/// An ordered collection of rules plus the verbatim code blocks emitted
/// before and after them.
///
/// Declaration order is preserved; lookup by name goes through the same map.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: IndexMap<String, GrammarRulePtr>,
    pub pre_action: String,
    pub post_action: String,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. The first rule with a given name wins.
    pub fn add_rule(&mut self, rule: impl Into<GrammarRulePtr>) -> Result<(), DuplicateRule> {
        let rule = rule.into();
        if self.rules.contains_key(&rule.name) {
            return Err(DuplicateRule(rule));
        }
        self.rules.insert(rule.name.clone(), rule);
        Ok(())
    }

    pub fn rule(&self, name: &str) -> Option<&GrammarRulePtr> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &GrammarRulePtr> {
        self.rules.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn first_rule(&self) -> Option<&GrammarRulePtr> {
        self.rules.first().map(|(_, rule)| rule)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Builds a new grammar by transforming each rule in order.
    ///
    /// Names are re-keyed from the returned rules; `f` must not rename.
    pub fn map_rules(&self, mut f: impl FnMut(&GrammarRulePtr) -> GrammarRulePtr) -> Grammar {
        let rules = self
            .rules
            .values()
            .map(|rule| {
                let mapped = f(rule);
                debug_assert_eq!(mapped.name, rule.name);
                (mapped.name.clone(), mapped)
            })
            .collect();
        Grammar {
            rules,
            pre_action: self.pre_action.clone(),
            post_action: self.post_action.clone(),
        }
    }

    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        visitor.visit_grammar(self);
    }
}
