//! Flag types and the shared enums of the visitor vocabulary.

use jetlint_core::intern::InternedString;
use jetlint_core::text::TextSpan;

bitflags::bitflags! {
    /// Per-token flags set by the scanner.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const NONE                 = 0;
        /// A line terminator appeared in the trivia before this token.
        /// Every ASI decision in the parser reads this bit.
        const PRECEDING_LINE_BREAK = 1 << 0;
        /// The literal ran into a newline or end of file.
        const UNTERMINATED         = 1 << 1;
        /// The identifier contained `\uXXXX` or `\u{...}` escapes.
        const HAS_ESCAPES          = 1 << 2;
        /// Numeric literal subkinds.
        const HEX_SPECIFIER        = 1 << 3;
        const OCTAL_SPECIFIER      = 1 << 4;
        const BINARY_SPECIFIER     = 1 << 5;
        const LEGACY_OCTAL         = 1 << 6;
        const SCIENTIFIC           = 1 << 7;
        const CONTAINS_SEPARATOR   = 1 << 8;
        const BIG_INT              = 1 << 9;
        const DECIMAL_POINT        = 1 << 10;
    }
}

bitflags::bitflags! {
    /// Flags attached to a variable declaration event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DeclFlags: u8 {
        const NONE    = 0;
        /// Declared with the TypeScript `declare` modifier.
        const DECLARE = 1 << 0;
        /// Declared with `export`.
        const EXPORT  = 1 << 1;
        /// Inside an ambient context (`declare namespace` body, `.d.ts`).
        const AMBIENT = 1 << 2;
    }
}

/// What kind of binding a `visit_variable_declaration` event introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclKind {
    Var,
    Let,
    Const,
    Function,
    Class,
    Parameter,
    CatchParameter,
    Import,
    Interface,
    TypeAlias,
    Enum,
    Namespace,
    GenericParameter,
    IndexSignatureParameter,
    ArrowParameter,
    FunctionTypeParameter,
}

impl DeclKind {
    /// Hoisted to the nearest function/module/namespace scope.
    pub fn is_function_scoped(self) -> bool {
        matches!(self, DeclKind::Var | DeclKind::Function)
    }

    /// Subject to the temporal dead zone.
    pub fn is_block_scoped_lexical(self) -> bool {
        matches!(self, DeclKind::Let | DeclKind::Const | DeclKind::Class | DeclKind::Enum)
    }

    /// Visible in the value namespace.
    pub fn declares_value(self) -> bool {
        !matches!(
            self,
            DeclKind::Interface
                | DeclKind::TypeAlias
                | DeclKind::GenericParameter
                | DeclKind::FunctionTypeParameter
        )
    }

    /// Visible in the type namespace.
    pub fn declares_type(self) -> bool {
        matches!(
            self,
            DeclKind::Class
                | DeclKind::Enum
                | DeclKind::Namespace
                | DeclKind::Import
                | DeclKind::Interface
                | DeclKind::TypeAlias
                | DeclKind::GenericParameter
                | DeclKind::FunctionTypeParameter
        )
    }
}

/// How a name was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseKind {
    /// Read in an expression.
    Use,
    /// Referenced in a type position.
    TypeUse,
    /// Left of `.` in a qualified type name.
    NamespaceUse,
    /// Left-hand side of an assignment.
    Assignment,
    /// Operand of `delete`.
    DeleteUse,
}

/// The kind of a scope on the analyzer's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Block,
    Function,
    FunctionParameter,
    Class,
    ClassBody,
    Interface,
    Namespace,
    Module,
    Type,
    IndexSignature,
    With,
}

impl ScopeKind {
    /// Whether `var`/`function` hoisting stops at this scope.
    pub fn is_hoist_target(self) -> bool {
        matches!(
            self,
            ScopeKind::Function
                | ScopeKind::FunctionParameter
                | ScopeKind::Module
                | ScopeKind::Namespace
        )
    }
}

/// The payload of every declaration/use event: an interned name plus the
/// byte span of the identifier in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: InternedString,
    pub span: TextSpan,
}

impl Identifier {
    pub fn new(name: InternedString, span: TextSpan) -> Self {
        Self { name, span }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaces_per_decl_kind() {
        assert!(DeclKind::Var.declares_value());
        assert!(!DeclKind::Var.declares_type());
        assert!(DeclKind::Interface.declares_type());
        assert!(!DeclKind::Interface.declares_value());
        // Classes, enums, namespaces, imports live in both namespaces.
        for kind in [DeclKind::Class, DeclKind::Enum, DeclKind::Namespace, DeclKind::Import] {
            assert!(kind.declares_value(), "{kind:?}");
            assert!(kind.declares_type(), "{kind:?}");
        }
    }

    #[test]
    fn test_hoisting_kinds() {
        assert!(DeclKind::Var.is_function_scoped());
        assert!(DeclKind::Function.is_function_scoped());
        assert!(!DeclKind::Let.is_function_scoped());
        assert!(DeclKind::Const.is_block_scoped_lexical());
    }
}
