//! Matcher expressions.

use std::fmt;
use std::rc::Rc;

use crate::visitor::Visitor;

/// Shared handle to an immutable matcher node.
pub type MatcherPtr = Rc<Matcher>;

/// Inclusive character range. `from == to` is a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharRange {
    from: char,
    to: char,
}

impl CharRange {
    pub fn new(from: char, to: char) -> Self {
        Self { from, to }
    }

    pub fn single(c: char) -> Self {
        Self { from: c, to: c }
    }

    pub fn from(&self) -> char {
        self.from
    }

    pub fn to(&self) -> char {
        self.to
    }

    pub fn is_single(&self) -> bool {
        self.from == self.to
    }

    /// Ranges written high-to-low match nothing.
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }

    pub fn contains(&self, c: char) -> bool {
        self.from <= c && c <= self.to
    }
}

/// Reference to another rule, optionally binding its result to a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleRef {
    pub name: String,
    pub var: Option<String>,
}

/// A parsing expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Exactly one character.
    Char(char),
    /// A literal string, matched in order.
    Str(String),
    /// One character from any of the listed ranges.
    Class(Vec<CharRange>),
    Rule(RuleRef),
    /// Any single character; fails only at end of input.
    Any,
    /// Always succeeds without consuming input.
    Empty,
    /// Semantic action source, emitted verbatim into generated code.
    Action(String),
    Optional(MatcherPtr),
    ZeroOrMore(MatcherPtr),
    OneOrMore(MatcherPtr),
    Sequence(Vec<MatcherPtr>),
    /// Ordered choice: the first alternative that succeeds wins.
    Choice(Vec<MatcherPtr>),
    Lookahead(MatcherPtr),
    Negation(MatcherPtr),
    /// Yields the text consumed by the inner matcher.
    Capture(MatcherPtr),
}

/// Variant tag of a [`Matcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    Char,
    Str,
    Class,
    Rule,
    Any,
    Empty,
    Action,
    Optional,
    ZeroOrMore,
    OneOrMore,
    Sequence,
    Choice,
    Lookahead,
    Negation,
    Capture,
}

impl MatcherKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Str => "str",
            Self::Class => "range",
            Self::Rule => "rule",
            Self::Any => "any",
            Self::Empty => "empty",
            Self::Action => "action",
            Self::Optional => "opt",
            Self::ZeroOrMore => "many",
            Self::OneOrMore => "some",
            Self::Sequence => "seq",
            Self::Choice => "alt",
            Self::Lookahead => "look",
            Self::Negation => "not",
            Self::Capture => "capt",
        }
    }
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Matcher {
    pub fn char(c: char) -> MatcherPtr {
        Rc::new(Self::Char(c))
    }

    pub fn string(s: impl Into<String>) -> MatcherPtr {
        Rc::new(Self::Str(s.into()))
    }

    pub fn class(ranges: Vec<CharRange>) -> MatcherPtr {
        Rc::new(Self::Class(ranges))
    }

    pub fn rule(name: impl Into<String>, var: Option<String>) -> MatcherPtr {
        Rc::new(Self::Rule(RuleRef {
            name: name.into(),
            var,
        }))
    }

    pub fn any() -> MatcherPtr {
        Rc::new(Self::Any)
    }

    pub fn empty() -> MatcherPtr {
        Rc::new(Self::Empty)
    }

    pub fn action(code: impl Into<String>) -> MatcherPtr {
        Rc::new(Self::Action(code.into()))
    }

    pub fn optional(inner: MatcherPtr) -> MatcherPtr {
        Rc::new(Self::Optional(inner))
    }

    pub fn zero_or_more(inner: MatcherPtr) -> MatcherPtr {
        Rc::new(Self::ZeroOrMore(inner))
    }

    pub fn one_or_more(inner: MatcherPtr) -> MatcherPtr {
        Rc::new(Self::OneOrMore(inner))
    }

    pub fn sequence(items: Vec<MatcherPtr>) -> MatcherPtr {
        Rc::new(Self::Sequence(items))
    }

    pub fn choice(alternatives: Vec<MatcherPtr>) -> MatcherPtr {
        Rc::new(Self::Choice(alternatives))
    }

    pub fn lookahead(inner: MatcherPtr) -> MatcherPtr {
        Rc::new(Self::Lookahead(inner))
    }

    pub fn negation(inner: MatcherPtr) -> MatcherPtr {
        Rc::new(Self::Negation(inner))
    }

    pub fn capture(inner: MatcherPtr) -> MatcherPtr {
        Rc::new(Self::Capture(inner))
    }

    pub fn kind(&self) -> MatcherKind {
        match self {
            Self::Char(_) => MatcherKind::Char,
            Self::Str(_) => MatcherKind::Str,
            Self::Class(_) => MatcherKind::Class,
            Self::Rule(_) => MatcherKind::Rule,
            Self::Any => MatcherKind::Any,
            Self::Empty => MatcherKind::Empty,
            Self::Action(_) => MatcherKind::Action,
            Self::Optional(_) => MatcherKind::Optional,
            Self::ZeroOrMore(_) => MatcherKind::ZeroOrMore,
            Self::OneOrMore(_) => MatcherKind::OneOrMore,
            Self::Sequence(_) => MatcherKind::Sequence,
            Self::Choice(_) => MatcherKind::Choice,
            Self::Lookahead(_) => MatcherKind::Lookahead,
            Self::Negation(_) => MatcherKind::Negation,
            Self::Capture(_) => MatcherKind::Capture,
        }
    }

    /// The wrapped matcher of a unary variant.
    pub fn inner(&self) -> Option<&MatcherPtr> {
        match self {
            Self::Optional(m)
            | Self::ZeroOrMore(m)
            | Self::OneOrMore(m)
            | Self::Lookahead(m)
            | Self::Negation(m)
            | Self::Capture(m) => Some(m),
            _ => None,
        }
    }

    /// Sub-matchers in order; empty for leaves.
    pub fn children(&self) -> &[MatcherPtr] {
        match self {
            Self::Sequence(items) | Self::Choice(items) => items,
            _ => self.inner().map(std::slice::from_ref).unwrap_or(&[]),
        }
    }

    /// Whether this matcher succeeds on every input.
    pub fn never_fails(&self) -> bool {
        match self {
            Self::Empty | Self::Action(_) | Self::Optional(_) | Self::ZeroOrMore(_) => true,
            Self::Sequence(items) => items.iter().all(|m| m.never_fails()),
            Self::Choice(alts) => alts.iter().any(|m| m.never_fails()),
            Self::OneOrMore(m) | Self::Capture(m) | Self::Lookahead(m) => m.never_fails(),
            _ => false,
        }
    }

    /// Dispatches to the visitor method for this variant.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) {
        match self {
            Self::Char(c) => visitor.visit_char(*c),
            Self::Str(s) => visitor.visit_str(s),
            Self::Class(ranges) => visitor.visit_class(ranges),
            Self::Rule(rule) => visitor.visit_rule_ref(rule),
            Self::Any => visitor.visit_any(),
            Self::Empty => visitor.visit_empty(),
            Self::Action(code) => visitor.visit_action(code),
            Self::Optional(m) => visitor.visit_optional(m),
            Self::ZeroOrMore(m) => visitor.visit_zero_or_more(m),
            Self::OneOrMore(m) => visitor.visit_one_or_more(m),
            Self::Sequence(items) => visitor.visit_sequence(items),
            Self::Choice(alts) => visitor.visit_choice(alts),
            Self::Lookahead(m) => visitor.visit_lookahead(m),
            Self::Negation(m) => visitor.visit_negation(m),
            Self::Capture(m) => visitor.visit_capture(m),
        }
    }
}
