//! Structured reports for malformed input, independent of how a front end renders them.

use std::collections::HashMap;

/// Character span of a substring in a line of text.
///
/// For example, in "ADD 12", "12" has the span (4, 6).
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct Span {
    /// Inclusive lower bound index of the span
    pub lo: usize,
    /// Exclusive upper bound index of the span
    pub hi: usize,
}

impl From<(usize, usize)> for Span {
    fn from((lo, hi): (usize, usize)) -> Self {
        Self { lo, hi }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            lo: range.start,
            hi: range.end,
        }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.lo, span.hi)
    }
}

/// The kind of a diagnostic.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum DiagnosticKind {
    /// The input was rejected.
    Error,
    /// The input was accepted, but probably not as intended.
    Warning,
    /// A generic annotation, mostly useful to expand on a primary diagnostic.
    Note,
    /// Instructions on how the input can be fixed.
    Help,
}

/// A secondary diagnostic attached to a primary [Diagnostic].
#[derive(Clone, Debug)]
pub struct AssociatedDiagnostic {
    pub kind: DiagnosticKind,
    pub span: Span,
    pub msg: String,
}

/// A diagnostic for a line of input.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<&'static str>,
    pub span: Span,
    pub title: String,
    pub msg: Option<String>,
    pub associated_diagnostics: Vec<AssociatedDiagnostic>,
    pub unspanned_associated_diagnostics: Vec<AssociatedDiagnostic>,
}

impl Diagnostic {
    /// Creates an error diagnostic at a span.
    pub(crate) fn span_err<S, M, N>(span: S, title: M, code: &'static str, err: N) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
        N: Into<Option<String>>,
    {
        Diagnostic {
            kind: DiagnosticKind::Error,
            code: Some(code),
            span: span.into(),
            title: title.into(),
            msg: err.into(),
            associated_diagnostics: Vec::with_capacity(2),
            unspanned_associated_diagnostics: Vec::with_capacity(2),
        }
    }

    /// Adds a note to the diagnostic.
    pub(crate) fn with_note<M>(mut self, note: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Note,
                span: self.span,
                msg: note.into(),
            });
        self
    }

    /// Adds a help message to the diagnostic.
    pub(crate) fn with_help<M>(mut self, help: M) -> Diagnostic
    where
        M: Into<String>,
    {
        self.unspanned_associated_diagnostics
            .push(AssociatedDiagnostic {
                kind: DiagnosticKind::Help,
                span: self.span,
                msg: help.into(),
            });
        self
    }

    /// Adds a help message at a span, possibly different from the primary one.
    pub(crate) fn with_spanned_help<S, M>(mut self, span: S, help: M) -> Diagnostic
    where
        S: Into<Span>,
        M: Into<String>,
    {
        self.associated_diagnostics.push(AssociatedDiagnostic {
            kind: DiagnosticKind::Help,
            span: span.into(),
            msg: help.into(),
        });
        self
    }

    /// All diagnostic codes, mapped to their long-form explanations.
    pub fn all_codes_with_explanations() -> HashMap<&'static str, &'static str> {
        crate::command::errors::CommandErrors::codes_with_explanations()
            .into_iter()
            .collect()
    }
}

/// A kind of diagnostic with a stable code.
pub(crate) trait DiagnosticRecord {
    const CODE: &'static str;
    const EXPLANATION: &'static str;
}

/// A family of [DiagnosticRecord]s.
pub(crate) trait DiagnosticRegistry {
    fn codes_with_explanations() -> Vec<(&'static str, &'static str)>;
}
