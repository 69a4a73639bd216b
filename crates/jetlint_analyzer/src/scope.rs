//! Scope records for the analyzer's stack.

use jetlint_core::collections::MultiMap;
use jetlint_core::intern::InternedString;
use jetlint_core::text::TextSpan;
use jetlint_syntax::types::{DeclFlags, DeclKind, ScopeKind, UseKind};

/// One declaration recorded in a scope.
#[derive(Debug, Clone, Copy)]
pub struct Declared {
    pub kind: DeclKind,
    pub flags: DeclFlags,
    pub span: TextSpan,
}

/// A use waiting to be resolved. Uses resolve at scope exit; ones that
/// do not resolve locally propagate to the enclosing scope.
#[derive(Debug, Clone, Copy)]
pub struct PendingUse {
    pub name: InternedString,
    pub kind: UseKind,
    pub span: TextSpan,
    /// Still in the scope where the use appeared. TDZ only applies to
    /// same-scope uses; anything that propagated outward is exempt.
    pub same_scope: bool,
}

/// A scope on the analyzer's stack, with separate value and type
/// namespaces.
#[derive(Debug)]
pub struct Scope {
    pub kind: ScopeKind,
    pub value_declarations: MultiMap<InternedString, Declared>,
    pub type_declarations: MultiMap<InternedString, Declared>,
    pub pending_uses: Vec<PendingUse>,
}

impl Scope {
    pub fn new(kind: ScopeKind) -> Self {
        Self {
            kind,
            value_declarations: MultiMap::new(),
            type_declarations: MultiMap::new(),
            pending_uses: Vec::new(),
        }
    }

    /// Record a declaration in the namespaces its kind populates.
    pub fn declare(&mut self, name: InternedString, declared: Declared) {
        if declared.kind.declares_value() {
            self.value_declarations.insert(name, declared);
        }
        if declared.kind.declares_type() {
            self.type_declarations.insert(name, declared);
        }
    }

    /// The first matching declaration for a use, honoring the use's
    /// namespace.
    pub fn lookup(&self, use_: &PendingUse) -> Option<&Declared> {
        let map = match use_.kind {
            UseKind::TypeUse => &self.type_declarations,
            UseKind::Use
            | UseKind::NamespaceUse
            | UseKind::Assignment
            | UseKind::DeleteUse => &self.value_declarations,
        };
        map.get(&use_.name).and_then(|decls| decls.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetlint_core::intern::StringInterner;

    fn declared(kind: DeclKind) -> Declared {
        Declared {
            kind,
            flags: DeclFlags::NONE,
            span: TextSpan::new(0, 1),
        }
    }

    #[test]
    fn test_interface_is_invisible_to_value_uses() {
        let interner = StringInterner::new();
        let name = interner.intern("I");
        let mut scope = Scope::new(ScopeKind::Module);
        scope.declare(name, declared(DeclKind::Interface));

        let value_use = PendingUse {
            name,
            kind: UseKind::Use,
            span: TextSpan::new(5, 6),
            same_scope: true,
        };
        let type_use = PendingUse {
            kind: UseKind::TypeUse,
            ..value_use
        };
        assert!(scope.lookup(&value_use).is_none());
        assert!(scope.lookup(&type_use).is_some());
    }

    #[test]
    fn test_class_is_visible_to_both_namespaces() {
        let interner = StringInterner::new();
        let name = interner.intern("C");
        let mut scope = Scope::new(ScopeKind::Module);
        scope.declare(name, declared(DeclKind::Class));

        for kind in [UseKind::Use, UseKind::TypeUse, UseKind::NamespaceUse] {
            let use_ = PendingUse {
                name,
                kind,
                span: TextSpan::new(5, 6),
                same_scope: true,
            };
            assert!(scope.lookup(&use_).is_some(), "{kind:?}");
        }
    }
}
