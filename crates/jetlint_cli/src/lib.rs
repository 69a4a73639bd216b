//! jetlint_cli: the command-line driver.
//!
//! Option parsing is done by hand: several flags apply positionally to
//! the file argument that follows them (some sticky, some one-shot),
//! and a few long flags accept unambiguous prefixes. That per-argument
//! statefulness is the contract the tests pin down.

pub mod options;
pub mod output;

pub use options::{
    get_language, parse_options, FileToLint, InputFileLanguage, Options, OutputFormat,
};
