//! Token information produced by the scanner.

use jetlint_core::intern::InternedString;
use jetlint_core::text::TextSpan;
use jetlint_syntax::syntax_kind::{ContextualKeyword, SyntaxKind};
use jetlint_syntax::types::TokenFlags;

/// Information about a scanned token. Positions are byte offsets into
/// the source buffer.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    /// The kind of token.
    pub kind: SyntaxKind,
    /// Start offset in the source text.
    pub begin: u32,
    /// End offset in the source text (exclusive).
    pub end: u32,
    /// Token flags (preceding line break, numeric subkind, escapes, ...).
    pub flags: TokenFlags,
    /// The decoded, interned name for identifiers, private identifiers,
    /// and keywords.
    pub ident: Option<InternedString>,
    /// Set when an unescaped identifier's text matches a contextual
    /// keyword; the parser decides what it means.
    pub contextual: Option<ContextualKeyword>,
}

impl Token {
    pub fn new(kind: SyntaxKind, begin: u32, end: u32) -> Self {
        Self {
            kind,
            begin,
            end,
            flags: TokenFlags::NONE,
            ident: None,
            contextual: None,
        }
    }

    /// The byte span of this token.
    #[inline]
    pub fn span(&self) -> TextSpan {
        TextSpan::new(self.begin, self.end)
    }

    /// Whether there was a line break before this token.
    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    /// Whether this token matches the given contextual keyword hint.
    #[inline]
    pub fn is_contextual(&self, keyword: ContextualKeyword) -> bool {
        self.contextual == Some(keyword)
    }
}
