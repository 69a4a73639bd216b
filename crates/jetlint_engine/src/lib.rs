//! jetlint_engine: the core entry point.
//!
//! `parse_and_analyze` runs the whole pipeline over one source buffer:
//! scanner -> parser -> variable analyzer, single-threaded and
//! synchronous. The caller gets the diagnostic list plus a locator for
//! offset-to-line/column translation; rendering is the caller's
//! business.
//!
//! Per-call state (the interner, the analyzer's scope stack) is
//! created here and torn down with the result. The source buffer is
//! borrowed for the lifetime of the result; drivers typically hand in
//! a `LintArena`-allocated buffer and drop the arena afterwards.

use jetlint_analyzer::{AnalyzerOptions, GlobalDeclaredVariableSet, VariableAnalyzer};
use jetlint_core::intern::StringInterner;
use jetlint_core::text::Locator;
use jetlint_diagnostics::DiagnosticCollection;
use jetlint_parser::{Parser, TraceVisitor};

pub use jetlint_analyzer::GlobalGroup;
pub use jetlint_diagnostics::{DiagKind, Diagnostic, Severity};
pub use jetlint_parser::ParserOptions;

/// Everything one lint pass produced.
pub struct LintResult<'src> {
    pub diagnostics: DiagnosticCollection,
    pub locator: Locator<'src>,
}

impl LintResult<'_> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Parse and analyze one document. Never fails: problems in the input
/// come back as diagnostics.
pub fn parse_and_analyze<'src>(
    source: &'src str,
    parser_options: ParserOptions,
    analyzer_options: AnalyzerOptions,
    globals: &GlobalDeclaredVariableSet,
) -> LintResult<'src> {
    let interner = StringInterner::new();
    let mut analyzer = VariableAnalyzer::new(globals, analyzer_options, interner.clone());
    let mut parser = Parser::new(source, parser_options, interner.clone());

    if parser_options.print_parser_visits {
        let mut tracer = TraceVisitor::new(&mut analyzer, interner);
        parser.parse_and_visit_module(&mut tracer);
    } else {
        parser.parse_and_visit_module(&mut analyzer);
    }

    let mut diagnostics = parser.take_diagnostics();
    diagnostics.extend(analyzer.finish());

    LintResult {
        diagnostics,
        locator: Locator::new(source),
    }
}
