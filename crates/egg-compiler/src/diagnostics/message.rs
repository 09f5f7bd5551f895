/// Diagnostic kinds, errors first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Grammar structure
    DuplicateRule,
    UndefinedRule,

    // Bindings that generated code cannot express
    ReservedBinding,
    ConflictingBinding,

    // Legal but suspicious
    UntypedBinding,
    EmptyCharClass,
    InvertedRange,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UntypedBinding | Self::EmptyCharClass | Self::InvertedRange => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::DuplicateRule => "duplicate rule",
            Self::UndefinedRule => "undefined rule",
            Self::ReservedBinding => "binding name is reserved by generated code",
            Self::ConflictingBinding => "variable bound to rules of different types",
            Self::UntypedBinding => "bound rule has no return type",
            Self::EmptyCharClass => "empty character class never matches",
            Self::InvertedRange => "inverted character range never matches",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateRule => "`{}` is already defined".to_string(),
            Self::UndefinedRule => "`{}` is not defined".to_string(),
            Self::ReservedBinding => "`{}` is reserved by generated code".to_string(),
            Self::ConflictingBinding => "`{}` is bound to rules of different types".to_string(),
            Self::UntypedBinding => "`{}` is bound to a rule with no return type".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    /// Rule the diagnostic was raised in, if any.
    pub rule: Option<String>,
    pub message: String,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            rule: None,
            message: kind.fallback_message().to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity(), self.message)?;
        if let Some(rule) = &self.rule {
            write!(f, " (in rule `{rule}`)")?;
        }
        Ok(())
    }
}
