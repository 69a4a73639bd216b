//! jetlint_parser: the recursive-descent parser.
//!
//! The parser never materializes a syntax tree. It consumes tokens from
//! the scanner and drives a `ParseVisitor` with declarations, uses, and
//! scope boundaries; the variable analyzer consumes that stream. On bad
//! input it reports a diagnostic and recovers, always keeping the
//! visitor's scope events balanced.

pub mod parser;
pub mod precedence;
mod trace;

pub use parser::{Parser, ParserOptions};
pub use trace::TraceVisitor;
