//! jetlint_syntax: token kinds, visitor events, and shared enums.
//!
//! The parser never materializes a syntax tree; it drives the
//! `ParseVisitor` trait defined here with a fixed event vocabulary, and
//! the variable analyzer consumes that stream.

pub mod syntax_kind;
pub mod types;
pub mod visitor;

pub use syntax_kind::{ContextualKeyword, SyntaxKind};
pub use types::{DeclFlags, DeclKind, Identifier, ScopeKind, TokenFlags, UseKind};
pub use visitor::{ParseVisitor, RecordingVisitor};
