//! Validation diagnostics.
//!
//! Grammar IR carries no source spans, so diagnostics are attached to the
//! rule they were found in rather than to a text range.

mod colors;
mod message;

#[cfg(test)]
mod tests;

pub use colors::Colors;
pub use message::{DiagnosticKind, DiagnosticMessage, Severity};

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic of the given kind.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    pub fn render(&self) -> String {
        self.render_colored(false)
    }

    /// One line per diagnostic.
    pub fn render_colored(&self, colored: bool) -> String {
        let colors = Colors::new(colored);
        let mut out = String::new();
        for diag in &self.messages {
            let color = match diag.severity() {
                Severity::Error => colors.red,
                Severity::Warning => colors.yellow,
            };
            out.push_str(&format!("{color}{}{}: {}", diag.severity(), colors.reset, diag.message));
            if let Some(rule) = &diag.rule {
                out.push_str(&format!(" {}(in rule `{rule}`){}", colors.dim, colors.reset));
            }
            out.push('\n');
        }
        out
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    /// The rule the problem was found in.
    pub fn rule(mut self, name: impl Into<String>) -> Self {
        self.message.rule = Some(name.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}
