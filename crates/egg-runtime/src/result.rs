/// Outcome of a matcher: the matched value, or failure.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Match<T> {
    Matched(T),
    Failed,
}

impl<T> Match<T> {
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn value(self) -> Option<T> {
        match self {
            Self::Matched(v) => Some(v),
            Self::Failed => None,
        }
    }

    pub fn as_ref(&self) -> Match<&T> {
        match self {
            Self::Matched(v) => Match::Matched(v),
            Self::Failed => Match::Failed,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Match<U> {
        match self {
            Self::Matched(v) => Match::Matched(f(v)),
            Self::Failed => Match::Failed,
        }
    }

    /// The matched value, or `T::default()` on failure.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.value().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Match<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Matched(v),
            None => Self::Failed,
        }
    }
}

impl<T> From<Match<T>> for Option<T> {
    fn from(m: Match<T>) -> Self {
        m.value()
    }
}

impl From<bool> for Match<()> {
    fn from(matched: bool) -> Self {
        when(matched)
    }
}

/// `Matched(())` if `matched`, else `Failed`.
pub fn when(matched: bool) -> Match<()> {
    if matched { Match::Matched(()) } else { Match::Failed }
}
