//! jetlint_diagnostics: diagnostic kinds and error reporting
//! infrastructure.
//!
//! Every problem jetlint detects in an input program becomes a
//! `Diagnostic`: a stable kind plus one or more named, labeled byte
//! spans into the source. The engine never throws for bad input; it
//! appends here and keeps going. Rendering (gnu-like, vim, emacs) is a
//! pure function of these records and lives in the CLI.

mod diag_code_list;
mod kinds;

pub use diag_code_list::{parse_diag_code_list, DiagCodeSet, ParsedDiagCodeList};
pub use kinds::{DiagKind, Severity};

use jetlint_core::text::TextSpan;
use std::fmt;

/// A named span attached to a diagnostic. Label names are part of each
/// kind's schema (`static_keyword`, `equal`, `body_start`, ...); tests
/// match on names, not positions alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagLabel {
    pub name: &'static str,
    pub span: TextSpan,
}

/// A realized diagnostic: a kind plus labeled spans. Two diagnostics
/// compare equal iff their kinds and labeled spans are equal; insertion
/// order in the collection is the rendering order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagKind,
    pub labels: Vec<DiagLabel>,
    /// Index into `labels` of the primary span.
    pub primary: u8,
}

impl Diagnostic {
    /// Create a diagnostic with a single (primary) labeled span.
    pub fn new(kind: DiagKind, label: &'static str, span: TextSpan) -> Self {
        Self {
            kind,
            labels: vec![DiagLabel { name: label, span }],
            primary: 0,
        }
    }

    /// Attach an additional labeled span.
    pub fn with_label(mut self, name: &'static str, span: TextSpan) -> Self {
        self.labels.push(DiagLabel { name, span });
        self
    }

    /// The primary span of this diagnostic.
    pub fn primary_span(&self) -> TextSpan {
        self.labels[self.primary as usize].span
    }

    /// Look up a labeled span by name.
    pub fn label(&self, name: &str) -> Option<TextSpan> {
        self.labels
            .iter()
            .find(|label| label.name == name)
            .map(|label| label.span)
    }

    pub fn is_error(&self) -> bool {
        self.kind.severity() == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} [{}]",
            self.kind.severity(),
            self.kind.message(),
            self.kind.code()
        )
    }
}

/// An append-only collection of diagnostics with stable insertion order.
///
/// The parser snapshots the length before a speculative parse and
/// truncates back on rewind, so tentative diagnostics vanish in O(1).
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn report(&mut self, kind: DiagKind, label: &'static str, span: TextSpan) {
        self.add(Diagnostic::new(kind, label, span));
    }

    /// Snapshot the current length for later `rewind`.
    pub fn watermark(&self) -> usize {
        self.diagnostics.len()
    }

    /// Discard every diagnostic added since `watermark`.
    pub fn rewind(&mut self, watermark: usize) {
        debug_assert!(watermark <= self.diagnostics.len());
        self.diagnostics.truncate(watermark);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// The set of kinds present, useful for set-equality test
    /// assertions where emission order is unspecified.
    pub fn kinds(&self) -> Vec<DiagKind> {
        self.diagnostics.iter().map(|d| d.kind).collect()
    }
}
