//! Syntax error reporting.

use std::io::Read;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use egg_runtime::State;

/// Where grammar parsing gave up: the furthest character the parser read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse failure {offset} characters into the input")]
pub struct SyntaxError {
    /// Characters read before the failure.
    pub offset: usize,
    pub line: usize,
    /// `None` when the failing line was already forgotten.
    pub column: Option<usize>,
    /// Text of the failing line, as far as it was still buffered.
    pub line_text: String,
}

impl SyntaxError {
    /// Build the report from the parser's furthest read.
    ///
    /// When that position was already forgotten the line falls back to the
    /// forgotten newline count and the text is left empty.
    pub fn at_furthest<R: Read>(ps: &mut State<R>) -> egg_runtime::Result<Self> {
        let offset = ps.max_read();
        match ps.locate(offset.saturating_sub(1)) {
            Ok(location) => Ok(Self {
                offset,
                line: location.line,
                column: Some(location.column),
                line_text: location.text,
            }),
            Err(egg_runtime::Error::Forgotten(forgotten)) => Ok(Self {
                offset,
                line: forgotten.newlines + 1,
                column: None,
                line_text: String::new(),
            }),
            Err(e) => Err(e),
        }
    }

    pub fn render(&self) -> String {
        self.render_colored(false)
    }

    /// The failing line with a caret under the failing column.
    pub fn render_colored(&self, colored: bool) -> String {
        let title = self.to_string();
        let Some(column) = self.column else {
            return format!("error: {title}\n --> line {}\n", self.line);
        };

        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let label = format!("error, column {column}");
        let span = char_span(&self.line_text, column - 1);
        let snippet = Snippet::source(&self.line_text)
            .line_start(self.line)
            .annotation(AnnotationKind::Primary.span(span).label(&label));
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&title).element(snippet)];
        renderer.render(&report).to_string()
    }
}

/// Byte range of the `index`th character, empty past the end of `text`.
fn char_span(text: &str, index: usize) -> std::ops::Range<usize> {
    let mut chars = text.char_indices().skip(index);
    match chars.next() {
        Some((start, c)) => start..start + c.len_utf8(),
        None => text.len()..text.len(),
    }
}
