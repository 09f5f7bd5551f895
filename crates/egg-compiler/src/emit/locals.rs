//! Locals a generated rule function declares.

use egg_core::{Grammar, GrammarRule, MatcherPtr, RuleRef, Visitor};
use indexmap::IndexMap;

pub(super) struct RuleLocals {
    /// Bound variables with the return type of the rule they bind, in first-use order.
    pub bindings: IndexMap<String, String>,
    pub has_capture: bool,
}

impl RuleLocals {
    pub fn collect(grammar: &Grammar, rule: &GrammarRule) -> Self {
        let mut collector = Collector {
            grammar,
            locals: RuleLocals {
                bindings: IndexMap::new(),
                has_capture: false,
            },
        };
        rule.body.accept(&mut collector);
        collector.locals
    }
}

struct Collector<'g> {
    grammar: &'g Grammar,
    locals: RuleLocals,
}

impl Visitor for Collector<'_> {
    fn visit_rule_ref(&mut self, rule: &RuleRef) {
        let Some(var) = &rule.var else {
            return;
        };
        let ty = self
            .grammar
            .rule(&rule.name)
            .and_then(|target| target.return_type.clone())
            .unwrap_or_else(|| "()".to_string());
        self.locals.bindings.entry(var.clone()).or_insert(ty);
    }

    fn visit_capture(&mut self, inner: &MatcherPtr) {
        self.locals.has_capture = true;
        inner.accept(self);
    }
}
