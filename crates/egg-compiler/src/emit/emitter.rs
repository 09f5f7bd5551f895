//! Rule functions and matcher expressions.

use std::fmt::Write;

use egg_core::{CharRange, Grammar, GrammarRule, Matcher, MatcherPtr, RuleRef, Visitor};

use super::idents::rust_ident;
use super::locals::RuleLocals;

const RT: &str = "egg_runtime";

/// Generates a Rust recognizer for a grammar.
///
/// The grammar is expected to be valid; undefined rules produce calls to
/// functions that do not exist.
pub struct RustEmitter<'g> {
    grammar: &'g Grammar,
    module_name: String,
}

impl<'g> RustEmitter<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            module_name: String::new(),
        }
    }

    /// Wrap the rules in `pub mod <name>`. Empty means no module.
    pub fn module_name(mut self, name: &str) -> Self {
        self.module_name = name.to_string();
        self
    }

    pub fn emit(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "// Generated by egg. Do not edit.")?;
        if !self.grammar.pre_action.is_empty() {
            writeln!(w, "{}", self.grammar.pre_action)?;
        }

        let module = !self.module_name.is_empty();
        if module {
            writeln!(w)?;
            writeln!(w, "pub mod {} {{", rust_ident(&self.module_name))?;
            writeln!(w, "#[allow(unused_imports)]")?;
            writeln!(w, "use super::*;")?;
        }
        for rule in self.grammar.rules() {
            writeln!(w)?;
            self.format_rule(rule, w)?;
        }
        if module {
            writeln!(w, "}}")?;
        }

        if !self.grammar.post_action.is_empty() {
            writeln!(w)?;
            writeln!(w, "{}", self.grammar.post_action)?;
        }
        Ok(())
    }

    fn format_rule(&self, rule: &GrammarRule, w: &mut impl Write) -> std::fmt::Result {
        let ty = rule.return_type.as_deref().unwrap_or("()");
        let locals = RuleLocals::collect(self.grammar, rule);

        writeln!(w, "#[allow(unused_mut, unused_variables, unused_parens)]")?;
        writeln!(
            w,
            "pub fn {}<R: std::io::Read>(ps: &mut {RT}::State<R>) -> {RT}::Result<{RT}::Match<{ty}>> {{",
            rust_ident(&rule.name)
        )?;
        writeln!(w, "    let mut ps_val: {ty} = Default::default();")?;
        for (var, var_ty) in &locals.bindings {
            writeln!(w, "    let mut {}: {var_ty} = Default::default();", rust_ident(var))?;
        }
        if locals.has_capture {
            writeln!(w, "    let mut ps_capture = String::new();")?;
        }
        writeln!(w, "    let matched = {};", expression(&rule.body))?;
        writeln!(
            w,
            "    Ok(if matched {{ {RT}::Match::Matched(ps_val) }} else {{ {RT}::Match::Failed }})"
        )?;
        writeln!(w, "}}")
    }
}

/// A boolean Rust expression that runs `matcher` against `ps`.
pub(super) fn expression(matcher: &Matcher) -> String {
    let mut emitter = ExprEmitter::default();
    matcher.accept(&mut emitter);
    emitter.out
}

#[derive(Default)]
struct ExprEmitter {
    out: String,
}

impl ExprEmitter {
    /// Body of a combinator closure; sequences are inlined since the
    /// combinator already rewinds.
    fn body(&mut self, matcher: &Matcher) {
        match matcher {
            Matcher::Sequence(items) if !items.is_empty() => self.join(items, " && "),
            _ => matcher.accept(self),
        }
    }

    fn join(&mut self, items: &[MatcherPtr], separator: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(separator);
            }
            item.accept(self);
        }
    }

    /// `<combinator>(ps, |ps| Ok(when(<body>)))?` followed by `suffix`.
    fn combinator(&mut self, name: &str, inner: &Matcher, suffix: &str) {
        self.out.push_str(&format!("{RT}::{name}(ps, |ps| Ok({RT}::when("));
        self.body(inner);
        self.out.push_str(&format!(")))?{suffix}"));
    }
}

impl Visitor for ExprEmitter {
    fn visit_char(&mut self, c: char) {
        self.out.push_str(&format!("{RT}::matches(ps, {c:?})?.is_match()"));
    }

    fn visit_str(&mut self, s: &str) {
        self.out.push_str(&format!("{RT}::matches_str(ps, {s:?})?.is_match()"));
    }

    fn visit_class(&mut self, ranges: &[CharRange]) {
        let ranges = ranges
            .iter()
            .map(|r| format!("({:?}, {:?})", r.from(), r.to()))
            .collect::<Vec<_>>()
            .join(", ");
        self.out.push_str(&format!("{RT}::in_ranges(ps, &[{ranges}])?.is_match()"));
    }

    fn visit_rule_ref(&mut self, rule: &RuleRef) {
        let call = format!("self::{}(ps)?", rust_ident(&rule.name));
        match &rule.var {
            Some(var) => self
                .out
                .push_str(&format!("{RT}::bind({call}, &mut {})", rust_ident(var))),
            None => self.out.push_str(&format!("{call}.is_match()")),
        }
    }

    fn visit_any(&mut self) {
        self.out.push_str(&format!("{RT}::any(ps)?.is_match()"));
    }

    fn visit_empty(&mut self) {
        self.out.push_str("true");
    }

    fn visit_action(&mut self, code: &str) {
        self.out.push_str(&format!("{{ {{{code}}} true }}"));
    }

    fn visit_optional(&mut self, inner: &MatcherPtr) {
        self.combinator("opt", inner, ".is_match()");
    }

    fn visit_zero_or_more(&mut self, inner: &MatcherPtr) {
        self.combinator("many", inner, ".is_match()");
    }

    fn visit_one_or_more(&mut self, inner: &MatcherPtr) {
        self.combinator("some", inner, ".is_match()");
    }

    fn visit_sequence(&mut self, items: &[MatcherPtr]) {
        if items.is_empty() {
            self.out.push_str("true");
        } else {
            self.out.push_str(&format!("{RT}::seq(ps, |ps| Ok({RT}::when("));
            self.join(items, " && ");
            self.out.push_str(")))?.is_match()");
        }
    }

    fn visit_choice(&mut self, alternatives: &[MatcherPtr]) {
        if alternatives.is_empty() {
            self.out.push_str("false");
            return;
        }
        self.out.push('(');
        self.join(alternatives, " || ");
        self.out.push(')');
    }

    fn visit_lookahead(&mut self, inner: &MatcherPtr) {
        self.combinator("look", inner, ".is_match()");
    }

    fn visit_negation(&mut self, inner: &MatcherPtr) {
        self.combinator("not", inner, ".is_match()");
    }

    fn visit_capture(&mut self, inner: &MatcherPtr) {
        self.out.push_str(&format!("{RT}::bind("));
        self.combinator("capture", inner, "");
        self.out.push_str(", &mut ps_capture)");
    }
}
