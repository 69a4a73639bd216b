//! jetlint_core: Core utilities for the jetlint diagnostic engine.
//!
//! Provides the per-parse arena, string interning, source text spans and
//! the byte-offset-to-line/column locator used throughout the pipeline.

pub mod arena;
pub mod collections;
pub mod intern;
pub mod text;

// Re-export commonly used types
pub use arena::LintArena;
pub use intern::{InternedString, StringInterner};
pub use text::{Locator, TextRange, TextSpan};
