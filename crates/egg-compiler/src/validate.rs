//! Grammar validation.
//!
//! The IR accepts any tree; this pass reports what the code generator cannot
//! handle (undefined rules, unusable bindings) plus matchers that can never
//! succeed.

use egg_core::utils::{LiteralContext, escape_char};
use egg_core::visitor::walk_rule;
use egg_core::{CharRange, Grammar, GrammarRule, RuleRef, Visitor};
use indexmap::IndexMap;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Locals that generated rule functions declare for themselves.
pub const RESERVED_BINDINGS: &[&str] = &[
    "ps",
    "ps_val",
    "ps_capture",
    "self",
    "Self",
    "super",
    "crate",
    "_",
];

pub fn validate(grammar: &Grammar) -> Diagnostics {
    let mut validator = Validator {
        grammar,
        rule: String::new(),
        bindings: IndexMap::new(),
        diagnostics: Diagnostics::new(),
    };
    grammar.accept(&mut validator);
    validator.diagnostics
}

struct Validator<'g> {
    grammar: &'g Grammar,
    rule: String,
    /// Variables bound in the current rule, with the type of their first binding.
    bindings: IndexMap<String, Option<String>>,
    diagnostics: Diagnostics,
}

impl Validator<'_> {
    fn report(&mut self, kind: DiagnosticKind, detail: &str) {
        self.diagnostics
            .report(kind)
            .message(detail)
            .rule(&self.rule)
            .emit();
    }
}

impl Visitor for Validator<'_> {
    fn visit_rule(&mut self, rule: &GrammarRule) {
        self.rule.clone_from(&rule.name);
        self.bindings.clear();
        walk_rule(self, rule);
    }

    fn visit_rule_ref(&mut self, rule: &RuleRef) {
        let Some(target) = self.grammar.rule(&rule.name) else {
            self.report(DiagnosticKind::UndefinedRule, &rule.name);
            return;
        };
        let Some(var) = &rule.var else {
            return;
        };
        if RESERVED_BINDINGS.contains(&var.as_str()) {
            self.report(DiagnosticKind::ReservedBinding, var);
            return;
        }

        let ty = target.return_type.clone();
        if ty.is_none() {
            self.report(DiagnosticKind::UntypedBinding, var);
        }
        match self.bindings.get(var) {
            Some(first) if *first != ty => self.report(DiagnosticKind::ConflictingBinding, var),
            Some(_) => {}
            None => {
                self.bindings.insert(var.clone(), ty);
            }
        }
    }

    fn visit_class(&mut self, ranges: &[CharRange]) {
        if ranges.is_empty() {
            let rule = self.rule.clone();
            self.diagnostics
                .report(DiagnosticKind::EmptyCharClass)
                .rule(rule)
                .emit();
        }
        for range in ranges.iter().filter(|r| r.is_inverted()) {
            let detail = format!(
                "[{}-{}]",
                escape_char(range.from(), LiteralContext::Class),
                escape_char(range.to(), LiteralContext::Class)
            );
            self.report(DiagnosticKind::InvertedRange, &detail);
        }
    }
}
