//! User-facing bigint diagnostics.
//!
//! The diagnostics module demarshalls [libbigint diagnostics][libbigint::diagnostics] into a form
//! pleasant for standard error.

use libbigint::diagnostics::{AssociatedDiagnostic, Diagnostic, DiagnosticKind};

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

pub fn sanitize_source_for_diagnostics(source: &str) -> String {
    let source = source.to_owned();
    source + " " // a missing operand is reported just past the end of the line
}

/// Where a diagnosed line came from.
pub struct SourceLine<'a> {
    /// File the line was read from, if any.
    pub origin: Option<&'a str>,
    /// 1-based line number shown next to the source.
    pub line_number: usize,
    /// The line, sanitized with [sanitize_source_for_diagnostics].
    pub source: &'a str,
}

pub fn emit_bigint_diagnostics(
    line: &SourceLine,
    diagnostics: &[Diagnostic],
    color: bool,
) -> String {
    if diagnostics.is_empty() {
        return String::new();
    }

    let last_i = diagnostics.len() - 1;
    let mut emitted_diagnostics = String::new();

    for (i, diagnostic) in diagnostics.iter().enumerate() {
        let main_annotation_type = convert_diagnostic_kind(&diagnostic.kind);
        let mut annotations = Vec::with_capacity(diagnostic.associated_diagnostics.len() + 1);
        // The first annotation always points to the text that generated this diagnostic.
        let label = diagnostic.msg.clone().unwrap_or_default();
        annotations.push(SourceAnnotation {
            label: &label,
            annotation_type: main_annotation_type,
            range: diagnostic.span.into(),
        });
        for associated_diagnostic in diagnostic.associated_diagnostics.iter() {
            annotations.push(SourceAnnotation {
                label: &associated_diagnostic.msg,
                annotation_type: convert_diagnostic_kind(&associated_diagnostic.kind),
                range: associated_diagnostic.span.into(),
            });
        }
        let footer = diagnostic
            .unspanned_associated_diagnostics
            .iter()
            .map(convert_associated_diagnostic)
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&diagnostic.title),
                id: diagnostic.code,
                annotation_type: main_annotation_type,
            }),
            footer,
            slices: vec![Slice {
                source: line.source,
                line_start: line.line_number,
                origin: line.origin,
                fold: false,
                annotations,
            }],
            opt: FormatOptions {
                color,
                ..Default::default()
            },
        };
        let suffix = if i != last_i { "\n" } else { "" };
        emitted_diagnostics.push_str(&format!("{}\n{}", DisplayList::from(snippet), suffix));
    }
    emitted_diagnostics
}

/// Converts a bigint AssociatedDiagnostic to a footer Annotation.
fn convert_associated_diagnostic(diagnostic: &AssociatedDiagnostic) -> Annotation {
    Annotation {
        label: Some(&diagnostic.msg),
        id: None,
        annotation_type: convert_diagnostic_kind(&diagnostic.kind),
    }
}

fn convert_diagnostic_kind(diagnostic_kind: &DiagnosticKind) -> AnnotationType {
    match diagnostic_kind {
        DiagnosticKind::Error => AnnotationType::Error,
        DiagnosticKind::Warning => AnnotationType::Warning,
        DiagnosticKind::Note => AnnotationType::Note,
        DiagnosticKind::Help => AnnotationType::Help,
    }
}
