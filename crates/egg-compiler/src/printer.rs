//! Grammar IR back to grammar source.
//!
//! Output parses back to the same IR: nested sequences and choices keep
//! their parentheses, and every literal uses the parser's escape set.

use std::fmt::Write;

use egg_core::utils::{LiteralContext, escape_char, escape_str};
use egg_core::{CharRange, Grammar, GrammarRule, Matcher, MatcherPtr, RuleRef, Visitor};

pub struct Printer<'g> {
    grammar: &'g Grammar,
}

impl<'g> Printer<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self { grammar }
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    /// Pre-action, rules and post-action, separated by blank lines.
    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut first = true;
        let mut separate = |w: &mut dyn Write| -> std::fmt::Result {
            if !std::mem::take(&mut first) {
                writeln!(w)?;
            }
            Ok(())
        };

        if !self.grammar.pre_action.is_empty() {
            separate(w)?;
            writeln!(w, "{{%{}%}}", self.grammar.pre_action)?;
        }
        for rule in self.grammar.rules() {
            separate(w)?;
            format_rule(rule, w)?;
        }
        if !self.grammar.post_action.is_empty() {
            separate(w)?;
            writeln!(w, "{{%{}%}}", self.grammar.post_action)?;
        }
        Ok(())
    }
}

pub fn print(grammar: &Grammar) -> String {
    Printer::new(grammar).dump()
}

/// A single matcher as it would appear on the right of `=`.
pub fn print_matcher(matcher: &Matcher) -> String {
    let mut printer = ExprPrinter::default();
    printer.child(matcher, Precedence::Choice);
    printer.out
}

fn format_rule(rule: &GrammarRule, w: &mut impl Write) -> std::fmt::Result {
    write!(w, "{}", rule.name)?;
    if let Some(ty) = &rule.return_type {
        write!(w, " : {ty}")?;
    }
    write!(w, " = ")?;

    match &*rule.body {
        Matcher::Choice(alts) if alts.len() > 1 => {
            for (i, alt) in alts.iter().enumerate() {
                if i > 0 {
                    write!(w, "\n\t| ")?;
                }
                let mut printer = ExprPrinter::default();
                printer.child(alt, Precedence::Sequence);
                w.write_str(&printer.out)?;
            }
            writeln!(w)
        }
        _ => writeln!(w, "{}", print_matcher(&rule.body)),
    }
}

/// Binding strength, loosest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Choice,
    Sequence,
    Prefix,
    Primary,
}

fn precedence(matcher: &Matcher) -> Precedence {
    match matcher {
        Matcher::Choice(alts) if alts.is_empty() => Precedence::Prefix,
        Matcher::Choice(_) => Precedence::Choice,
        Matcher::Sequence(items) if items.is_empty() => Precedence::Primary,
        Matcher::Sequence(_) => Precedence::Sequence,
        Matcher::Lookahead(_) | Matcher::Negation(_) => Precedence::Prefix,
        // Suffixed expressions are primaries to their sequence, but their
        // operand must itself be a primary.
        Matcher::Optional(_) | Matcher::ZeroOrMore(_) | Matcher::OneOrMore(_) => {
            Precedence::Prefix
        }
        _ => Precedence::Primary,
    }
}

#[derive(Default)]
struct ExprPrinter {
    out: String,
}

impl ExprPrinter {
    /// Prints `matcher`, parenthesized if it binds looser than `min`.
    fn child(&mut self, matcher: &Matcher, min: Precedence) {
        if precedence(matcher) < min {
            self.out.push('(');
            matcher.accept(self);
            self.out.push(')');
        } else {
            matcher.accept(self);
        }
    }

    fn join(&mut self, items: &[MatcherPtr], separator: &str, min: Precedence) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.out.push_str(separator);
            }
            self.child(item, min);
        }
    }

    fn prefixed(&mut self, op: &str, inner: &Matcher) {
        self.out.push_str(op);
        self.child(inner, Precedence::Primary);
    }

    fn suffixed(&mut self, inner: &Matcher, op: char) {
        self.child(inner, Precedence::Primary);
        self.out.push(op);
    }
}

impl Visitor for ExprPrinter {
    fn visit_char(&mut self, c: char) {
        self.out.push('\'');
        self.out.push_str(&escape_char(c, LiteralContext::Char));
        self.out.push('\'');
    }

    fn visit_str(&mut self, s: &str) {
        self.out.push('"');
        self.out.push_str(&escape_str(s));
        self.out.push('"');
    }

    fn visit_class(&mut self, ranges: &[CharRange]) {
        self.out.push('[');
        for range in ranges {
            self.out.push_str(&escape_char(range.from(), LiteralContext::Class));
            if !range.is_single() {
                self.out.push('-');
                self.out.push_str(&escape_char(range.to(), LiteralContext::Class));
            }
        }
        self.out.push(']');
    }

    fn visit_rule_ref(&mut self, rule: &RuleRef) {
        self.out.push_str(&rule.name);
        if let Some(var) = &rule.var {
            self.out.push_str(" : ");
            self.out.push_str(var);
        }
    }

    fn visit_any(&mut self) {
        self.out.push('.');
    }

    fn visit_empty(&mut self) {
        self.out.push(';');
    }

    fn visit_action(&mut self, code: &str) {
        self.out.push('{');
        self.out.push_str(code);
        self.out.push('}');
    }

    fn visit_optional(&mut self, inner: &MatcherPtr) {
        self.suffixed(inner, '?');
    }

    fn visit_zero_or_more(&mut self, inner: &MatcherPtr) {
        self.suffixed(inner, '*');
    }

    fn visit_one_or_more(&mut self, inner: &MatcherPtr) {
        self.suffixed(inner, '+');
    }

    fn visit_sequence(&mut self, items: &[MatcherPtr]) {
        if items.is_empty() {
            self.out.push(';');
        } else {
            self.join(items, " ", Precedence::Prefix);
        }
    }

    fn visit_choice(&mut self, alternatives: &[MatcherPtr]) {
        if alternatives.is_empty() {
            self.out.push_str("!;");
        } else {
            self.join(alternatives, " | ", Precedence::Sequence);
        }
    }

    fn visit_lookahead(&mut self, inner: &MatcherPtr) {
        self.prefixed("&", inner);
    }

    fn visit_negation(&mut self, inner: &MatcherPtr) {
        self.prefixed("!", inner);
    }

    fn visit_capture(&mut self, inner: &MatcherPtr) {
        self.out.push('<');
        self.child(inner, Precedence::Choice);
        self.out.push('>');
    }
}
