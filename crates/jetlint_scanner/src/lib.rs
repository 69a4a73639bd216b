//! jetlint_scanner: the lexer.
//!
//! Produces one token at a time over a UTF-8 source buffer, with byte
//! offsets throughout. The parser drives context-sensitive decisions by
//! calling the rescan entry points (`rescan_slash_token` for regexp
//! slots, `rescan_template_token` after interpolations,
//! `rescan_greater_than_token` inside expressions).

pub mod char_codes;
pub mod scanner;
pub mod token;

pub use scanner::{Scanner, ScannerState};
pub use token::Token;
