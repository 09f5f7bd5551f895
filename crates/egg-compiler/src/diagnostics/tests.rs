use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyCharClass).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    insta::assert_snapshot!(
        diagnostics.render().trim_end(),
        @"warning: empty character class never matches"
    );
}

#[test]
fn report_with_custom_message_and_rule() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UndefinedRule)
        .message("expr")
        .rule("term")
        .emit();

    assert_eq!(diagnostics.error_count(), 1);
    assert_eq!(diagnostics.warning_count(), 0);
    let message = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(message.to_string(), @"error: `expr` is not defined (in rule `term`)");
}

#[test]
fn inverted_range_detail_uses_fallback_template() {
    assert_eq!(
        DiagnosticKind::InvertedRange.message(Some("z-a")),
        "inverted character range never matches: z-a"
    );
}

#[test]
fn render_colored_wraps_severity() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::DuplicateRule).message("a").emit();
    let plain = diagnostics.render();
    let colored = diagnostics.render_colored(true);
    assert_eq!(plain, "error: `a` is already defined\n");
    assert!(colored.starts_with("\x1b[31merror\x1b[0m"));
}

#[test]
fn extend_merges() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::UntypedBinding).emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::ReservedBinding).emit();
    a.extend(b);
    assert_eq!(a.len(), 2);
    assert!(a.has_errors());
}

#[test]
fn colors_toggle() {
    assert!(Colors::new(true).is_enabled());
    assert!(!Colors::default().is_enabled());
}
