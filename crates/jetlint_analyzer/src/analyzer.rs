//! The variable analyzer implementation.
//!
//! A stateful `ParseVisitor` that builds a scope stack as the parser
//! streams events. Declarations land in their scope immediately
//! (hoisted kinds walk outward to the nearest function-like scope);
//! uses stay pending until the scope exits, so forward references
//! inside a scope resolve without lookahead. Whatever a scope cannot
//! resolve propagates to its parent; what survives the module scope is
//! checked against the configured globals.

use crate::globals::GlobalDeclaredVariableSet;
use crate::scope::{Declared, PendingUse, Scope};
use jetlint_core::intern::StringInterner;
use jetlint_diagnostics::{DiagKind, Diagnostic, DiagnosticCollection};
use jetlint_syntax::types::{DeclFlags, DeclKind, Identifier, ScopeKind, UseKind};
use jetlint_syntax::visitor::ParseVisitor;

/// Options selected by the driver.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerOptions {
    /// Let `declare`-flagged declarations satisfy uses that appear
    /// textually earlier. On by default in TypeScript.
    pub allow_declare_across_scopes: bool,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            allow_declare_across_scopes: true,
        }
    }
}

/// The variable analyzer; feed it the parser's event stream, then call
/// `finish`.
pub struct VariableAnalyzer<'g> {
    scopes: Vec<Scope>,
    globals: &'g GlobalDeclaredVariableSet,
    options: AnalyzerOptions,
    interner: StringInterner,
    diags: DiagnosticCollection,
}

impl<'g> VariableAnalyzer<'g> {
    pub fn new(
        globals: &'g GlobalDeclaredVariableSet,
        options: AnalyzerOptions,
        interner: StringInterner,
    ) -> Self {
        Self {
            scopes: vec![Scope::new(ScopeKind::Module)],
            globals,
            options,
            interner,
            diags: DiagnosticCollection::new(),
        }
    }

    /// Take the diagnostics. Call after `visit_end_of_module`.
    pub fn finish(self) -> DiagnosticCollection {
        assert!(
            self.scopes.is_empty(),
            "scope stack not empty at end of module; malformed event stream"
        );
        self.diags
    }

    fn current_scope(&mut self) -> &mut Scope {
        self.scopes.last_mut().expect("scope stack underflow")
    }

    fn push_scope(&mut self, kind: ScopeKind) {
        self.scopes.push(Scope::new(kind));
    }

    fn record_use(&mut self, name: Identifier, kind: UseKind) {
        self.current_scope().pending_uses.push(PendingUse {
            name: name.name,
            kind,
            span: name.span,
            same_scope: true,
        });
    }

    // ========================================================================
    // Declaring
    // ========================================================================

    fn declare_variable(&mut self, name: Identifier, kind: DeclKind, flags: DeclFlags) {
        let declared = Declared {
            kind,
            flags,
            span: name.span,
        };
        // `var` and `function` hoist to the nearest function-like
        // scope; everything else stays put.
        let target = if kind.is_function_scoped() {
            self.scopes
                .iter()
                .rposition(|scope| scope.kind.is_hoist_target())
                .unwrap_or(0)
        } else {
            self.scopes.len() - 1
        };

        self.check_redeclaration(target, name, &declared);
        self.scopes[target].declare(name.name, declared);
    }

    fn check_redeclaration(&mut self, scope_index: usize, name: Identifier, new: &Declared) {
        let scope = &self.scopes[scope_index];
        // Check only the primary namespace, so kinds that live in both
        // namespaces do not report twice.
        let map = if new.kind.declares_value() {
            &scope.value_declarations
        } else {
            &scope.type_declarations
        };
        let Some(existing) = map.get(&name.name).and_then(|decls| decls.first()) else {
            return;
        };
        if is_redeclaration_allowed(existing, new) {
            return;
        }
        self.diags.add(
            Diagnostic::new(DiagKind::RedeclarationOfVariable, "redeclaration", new.span)
                .with_label("original_declaration", existing.span),
        );
    }

    // ========================================================================
    // Resolving
    // ========================================================================

    /// Pop the current scope: resolve its pending uses against its
    /// declarations, propagate the rest to the parent.
    fn pop_and_resolve(&mut self) {
        let scope = self.scopes.pop().expect("scope stack underflow");
        let mut unresolved = Vec::new();
        for mut use_ in scope.pending_uses.iter().copied() {
            match scope.lookup(&use_) {
                Some(declared) => {
                    let declared = *declared;
                    self.check_resolved_use(&use_, &declared);
                }
                None => {
                    use_.same_scope = false;
                    unresolved.push(use_);
                }
            }
        }
        match self.scopes.last_mut() {
            Some(parent) => parent.pending_uses.extend(unresolved),
            None => {
                for use_ in unresolved {
                    self.check_global_use(&use_);
                }
            }
        }
    }

    /// Diagnostics for a use that resolved against a declaration in the
    /// scope being closed.
    fn check_resolved_use(&mut self, use_: &PendingUse, declared: &Declared) {
        let is_declare = declared.flags.contains(DeclFlags::DECLARE)
            && self.options.allow_declare_across_scopes;
        let textually_before = use_.span.begin < declared.span.begin;
        // TDZ: only lexical declarations, only same-scope uses, never
        // ambient declarations.
        let in_dead_zone = declared.kind.is_block_scoped_lexical()
            && use_.same_scope
            && textually_before
            && !is_declare;

        match use_.kind {
            UseKind::Assignment => {
                if declared.kind == DeclKind::Const {
                    let kind = if in_dead_zone {
                        DiagKind::AssignmentToConstVariableBeforeItsDeclaration
                    } else {
                        DiagKind::AssignmentToConstVariable
                    };
                    self.diags.add(
                        Diagnostic::new(kind, "assignment", use_.span)
                            .with_label("declaration", declared.span),
                    );
                } else if in_dead_zone {
                    self.diags.add(
                        Diagnostic::new(
                            DiagKind::VariableUsedBeforeDeclaration,
                            "use",
                            use_.span,
                        )
                        .with_label("declaration", declared.span),
                    );
                }
            }
            UseKind::Use | UseKind::TypeUse | UseKind::NamespaceUse => {
                if in_dead_zone {
                    self.diags.add(
                        Diagnostic::new(
                            DiagKind::VariableUsedBeforeDeclaration,
                            "use",
                            use_.span,
                        )
                        .with_label("declaration", declared.span),
                    );
                }
            }
            UseKind::DeleteUse => {}
        }
    }

    /// A use that survived the module scope: consult the globals.
    fn check_global_use(&mut self, use_: &PendingUse) {
        let name = self.interner.resolve(use_.name);
        if self.globals.contains(name) {
            return;
        }
        match use_.kind {
            UseKind::Assignment => {
                self.diags.report(
                    DiagKind::AssignmentToUndeclaredVariable,
                    "assignment",
                    use_.span,
                );
            }
            UseKind::Use | UseKind::TypeUse | UseKind::NamespaceUse => {
                self.diags
                    .report(DiagKind::UseOfUndeclaredVariable, "use", use_.span);
            }
            // `delete maybeGlobal` is fine.
            UseKind::DeleteUse => {}
        }
    }
}

/// The fixed same-scope redeclaration policy, keyed on the pair of
/// declaration kinds.
fn is_redeclaration_allowed(existing: &Declared, new: &Declared) -> bool {
    use DeclKind::*;
    // Ambient declarations merge with anything of a merging-friendly
    // shape; TypeScript's checker sorts out the rest.
    if existing.flags.contains(DeclFlags::DECLARE) || new.flags.contains(DeclFlags::DECLARE) {
        return true;
    }
    matches!(
        (existing.kind, new.kind),
        (Var, Var)
            | (Function, Function)
            | (Var, Function)
            | (Function, Var)
            | (Parameter, Parameter)
            | (ArrowParameter, ArrowParameter)
            | (Parameter, Var)
            | (Var, Parameter)
            | (CatchParameter, Var)
            | (Var, CatchParameter)
            | (Interface, Interface)
            | (Interface, Class)
            | (Class, Interface)
            | (Namespace, Namespace)
            | (Namespace, Class)
            | (Class, Namespace)
            | (Namespace, Function)
            | (Function, Namespace)
            | (Namespace, Enum)
            | (Enum, Namespace)
            | (Enum, Enum)
    )
}

impl ParseVisitor for VariableAnalyzer<'_> {
    fn visit_variable_declaration(&mut self, name: Identifier, kind: DeclKind, flags: DeclFlags) {
        self.declare_variable(name, kind, flags);
    }

    fn visit_variable_use(&mut self, name: Identifier) {
        self.record_use(name, UseKind::Use);
    }

    fn visit_variable_type_use(&mut self, name: Identifier) {
        self.record_use(name, UseKind::TypeUse);
    }

    fn visit_variable_namespace_use(&mut self, name: Identifier) {
        self.record_use(name, UseKind::NamespaceUse);
    }

    fn visit_variable_assignment(&mut self, name: Identifier) {
        self.record_use(name, UseKind::Assignment);
    }

    fn visit_variable_delete_use(&mut self, name: Identifier) {
        self.record_use(name, UseKind::DeleteUse);
    }

    fn visit_enter_block_scope(&mut self) {
        self.push_scope(ScopeKind::Block);
    }

    fn visit_exit_block_scope(&mut self) {
        self.pop_and_resolve();
    }

    fn visit_enter_with_scope(&mut self) {
        self.push_scope(ScopeKind::With);
    }

    fn visit_exit_with_scope(&mut self) {
        self.pop_and_resolve();
    }

    fn visit_enter_function_scope(&mut self) {
        self.push_scope(ScopeKind::FunctionParameter);
    }

    fn visit_enter_function_scope_body(&mut self) {
        self.push_scope(ScopeKind::Function);
    }

    fn visit_exit_function_scope(&mut self) {
        // The body scope is present only when the function had a body.
        if self.current_scope().kind == ScopeKind::Function {
            self.pop_and_resolve();
        }
        debug_assert_eq!(self.current_scope().kind, ScopeKind::FunctionParameter);
        self.pop_and_resolve();
    }

    fn visit_enter_interface_scope(&mut self) {
        self.push_scope(ScopeKind::Interface);
    }

    fn visit_exit_interface_scope(&mut self) {
        self.pop_and_resolve();
    }

    fn visit_enter_class_scope(&mut self) {
        self.push_scope(ScopeKind::Class);
    }

    fn visit_enter_class_scope_body(&mut self, class_name: Option<Identifier>) {
        self.push_scope(ScopeKind::ClassBody);
        // The class name is visible inside its own body.
        if let Some(name) = class_name {
            let declared = Declared {
                kind: DeclKind::Class,
                flags: DeclFlags::NONE,
                span: name.span,
            };
            self.current_scope().declare(name.name, declared);
        }
    }

    fn visit_exit_class_scope(&mut self) {
        if self.current_scope().kind == ScopeKind::ClassBody {
            self.pop_and_resolve();
        }
        debug_assert_eq!(self.current_scope().kind, ScopeKind::Class);
        self.pop_and_resolve();
    }

    fn visit_enter_namespace_scope(&mut self) {
        self.push_scope(ScopeKind::Namespace);
    }

    fn visit_exit_namespace_scope(&mut self) {
        self.pop_and_resolve();
    }

    fn visit_enter_index_signature_scope(&mut self) {
        self.push_scope(ScopeKind::IndexSignature);
    }

    fn visit_exit_index_signature_scope(&mut self) {
        self.pop_and_resolve();
    }

    fn visit_enter_type_scope(&mut self) {
        self.push_scope(ScopeKind::Type);
    }

    fn visit_exit_type_scope(&mut self) {
        self.pop_and_resolve();
    }

    fn visit_property_declaration(&mut self, _name: Option<Identifier>) {
        // Properties are not variables; nothing to resolve.
    }

    fn visit_end_of_module(&mut self) {
        debug_assert_eq!(self.scopes.len(), 1, "unbalanced scope events");
        self.pop_and_resolve();
    }
}
