//! The parse visitor: the event stream contract between the parser and
//! everything downstream.
//!
//! The parser calls exactly one `visit_exit_*` for every
//! `visit_enter_*`, with nested scopes strictly between them, on every
//! path including error recovery. Consumers may rely on that balance.

use crate::types::{DeclFlags, DeclKind, Identifier};
use jetlint_core::intern::StringInterner;

/// Receives the parser's event stream. All methods default to no-ops so
/// consumers implement only what they need.
pub trait ParseVisitor {
    fn visit_variable_declaration(
        &mut self,
        name: Identifier,
        kind: DeclKind,
        flags: DeclFlags,
    ) {
        let _ = (name, kind, flags);
    }

    fn visit_variable_use(&mut self, name: Identifier) {
        let _ = name;
    }

    fn visit_variable_type_use(&mut self, name: Identifier) {
        let _ = name;
    }

    fn visit_variable_namespace_use(&mut self, name: Identifier) {
        let _ = name;
    }

    fn visit_variable_assignment(&mut self, name: Identifier) {
        let _ = name;
    }

    fn visit_variable_delete_use(&mut self, name: Identifier) {
        let _ = name;
    }

    fn visit_enter_block_scope(&mut self) {}
    fn visit_exit_block_scope(&mut self) {}

    fn visit_enter_with_scope(&mut self) {}
    fn visit_exit_with_scope(&mut self) {}

    /// Entered before the parameter list; parameter declarations belong
    /// to this scope.
    fn visit_enter_function_scope(&mut self) {}
    /// Entered between the parameter list and the body; body bindings
    /// see the parameters through this nested scope.
    fn visit_enter_function_scope_body(&mut self) {}
    fn visit_exit_function_scope(&mut self) {}

    fn visit_enter_interface_scope(&mut self) {}
    fn visit_exit_interface_scope(&mut self) {}

    fn visit_enter_class_scope(&mut self) {}
    fn visit_enter_class_scope_body(&mut self, class_name: Option<Identifier>) {
        let _ = class_name;
    }
    fn visit_exit_class_scope(&mut self) {}

    fn visit_enter_namespace_scope(&mut self) {}
    fn visit_exit_namespace_scope(&mut self) {}

    fn visit_enter_index_signature_scope(&mut self) {}
    fn visit_exit_index_signature_scope(&mut self) {}

    fn visit_enter_type_scope(&mut self) {}
    fn visit_exit_type_scope(&mut self) {}

    /// A property, method, call signature, or index-signature member.
    /// `name` is `None` for computed, string, and numeric keys and for
    /// call signatures.
    fn visit_property_declaration(&mut self, name: Option<Identifier>) {
        let _ = name;
    }

    fn visit_end_of_module(&mut self) {}
}

/// A visitor that records every event. Backs `--debug-parser-visits`
/// and the visit-sequence assertions in tests.
pub struct RecordingVisitor {
    interner: StringInterner,
    /// Event names, in order.
    pub visits: Vec<&'static str>,
    /// Resolved names of every use event (all use kinds), in order.
    pub variable_uses: Vec<String>,
    /// Name, kind, and flags of every declaration, in order.
    pub variable_declarations: Vec<(String, DeclKind, DeclFlags)>,
    /// Property names (`None` for unnamed members), in order.
    pub property_declarations: Vec<Option<String>>,
}

impl RecordingVisitor {
    pub fn new(interner: StringInterner) -> Self {
        Self {
            interner,
            visits: Vec::new(),
            variable_uses: Vec::new(),
            variable_declarations: Vec::new(),
            property_declarations: Vec::new(),
        }
    }

    fn resolve(&self, name: Identifier) -> String {
        self.interner.resolve(name.name).to_string()
    }

    /// Names of declared variables, in declaration order.
    pub fn declaration_names(&self) -> Vec<&str> {
        self.variable_declarations
            .iter()
            .map(|(name, _, _)| name.as_str())
            .collect()
    }
}

impl ParseVisitor for RecordingVisitor {
    fn visit_variable_declaration(
        &mut self,
        name: Identifier,
        kind: DeclKind,
        flags: DeclFlags,
    ) {
        self.visits.push("visit_variable_declaration");
        let name = self.resolve(name);
        self.variable_declarations.push((name, kind, flags));
    }

    fn visit_variable_use(&mut self, name: Identifier) {
        self.visits.push("visit_variable_use");
        let name = self.resolve(name);
        self.variable_uses.push(name);
    }

    fn visit_variable_type_use(&mut self, name: Identifier) {
        self.visits.push("visit_variable_type_use");
        let name = self.resolve(name);
        self.variable_uses.push(name);
    }

    fn visit_variable_namespace_use(&mut self, name: Identifier) {
        self.visits.push("visit_variable_namespace_use");
        let name = self.resolve(name);
        self.variable_uses.push(name);
    }

    fn visit_variable_assignment(&mut self, name: Identifier) {
        self.visits.push("visit_variable_assignment");
        let name = self.resolve(name);
        self.variable_uses.push(name);
    }

    fn visit_variable_delete_use(&mut self, name: Identifier) {
        self.visits.push("visit_variable_delete_use");
        let name = self.resolve(name);
        self.variable_uses.push(name);
    }

    fn visit_enter_block_scope(&mut self) {
        self.visits.push("visit_enter_block_scope");
    }

    fn visit_exit_block_scope(&mut self) {
        self.visits.push("visit_exit_block_scope");
    }

    fn visit_enter_with_scope(&mut self) {
        self.visits.push("visit_enter_with_scope");
    }

    fn visit_exit_with_scope(&mut self) {
        self.visits.push("visit_exit_with_scope");
    }

    fn visit_enter_function_scope(&mut self) {
        self.visits.push("visit_enter_function_scope");
    }

    fn visit_enter_function_scope_body(&mut self) {
        self.visits.push("visit_enter_function_scope_body");
    }

    fn visit_exit_function_scope(&mut self) {
        self.visits.push("visit_exit_function_scope");
    }

    fn visit_enter_interface_scope(&mut self) {
        self.visits.push("visit_enter_interface_scope");
    }

    fn visit_exit_interface_scope(&mut self) {
        self.visits.push("visit_exit_interface_scope");
    }

    fn visit_enter_class_scope(&mut self) {
        self.visits.push("visit_enter_class_scope");
    }

    fn visit_enter_class_scope_body(&mut self, _class_name: Option<Identifier>) {
        self.visits.push("visit_enter_class_scope_body");
    }

    fn visit_exit_class_scope(&mut self) {
        self.visits.push("visit_exit_class_scope");
    }

    fn visit_enter_namespace_scope(&mut self) {
        self.visits.push("visit_enter_namespace_scope");
    }

    fn visit_exit_namespace_scope(&mut self) {
        self.visits.push("visit_exit_namespace_scope");
    }

    fn visit_enter_index_signature_scope(&mut self) {
        self.visits.push("visit_enter_index_signature_scope");
    }

    fn visit_exit_index_signature_scope(&mut self) {
        self.visits.push("visit_exit_index_signature_scope");
    }

    fn visit_enter_type_scope(&mut self) {
        self.visits.push("visit_enter_type_scope");
    }

    fn visit_exit_type_scope(&mut self) {
        self.visits.push("visit_exit_type_scope");
    }

    fn visit_property_declaration(&mut self, name: Option<Identifier>) {
        self.visits.push("visit_property_declaration");
        let name = name.map(|n| self.resolve(n));
        self.property_declarations.push(name);
    }

    fn visit_end_of_module(&mut self) {
        self.visits.push("visit_end_of_module");
    }
}

/// Forwards every event to two visitors in order. Used to feed the
/// analyzer while also tracing visits for `--debug-parser-visits`.
pub struct TeeVisitor<'a, A, B> {
    pub first: &'a mut A,
    pub second: &'a mut B,
}

impl<'a, A, B> TeeVisitor<'a, A, B> {
    pub fn new(first: &'a mut A, second: &'a mut B) -> Self {
        Self { first, second }
    }
}

impl<A: ParseVisitor, B: ParseVisitor> ParseVisitor for TeeVisitor<'_, A, B> {
    fn visit_variable_declaration(
        &mut self,
        name: Identifier,
        kind: DeclKind,
        flags: DeclFlags,
    ) {
        self.first.visit_variable_declaration(name, kind, flags);
        self.second.visit_variable_declaration(name, kind, flags);
    }

    fn visit_variable_use(&mut self, name: Identifier) {
        self.first.visit_variable_use(name);
        self.second.visit_variable_use(name);
    }

    fn visit_variable_type_use(&mut self, name: Identifier) {
        self.first.visit_variable_type_use(name);
        self.second.visit_variable_type_use(name);
    }

    fn visit_variable_namespace_use(&mut self, name: Identifier) {
        self.first.visit_variable_namespace_use(name);
        self.second.visit_variable_namespace_use(name);
    }

    fn visit_variable_assignment(&mut self, name: Identifier) {
        self.first.visit_variable_assignment(name);
        self.second.visit_variable_assignment(name);
    }

    fn visit_variable_delete_use(&mut self, name: Identifier) {
        self.first.visit_variable_delete_use(name);
        self.second.visit_variable_delete_use(name);
    }

    fn visit_enter_block_scope(&mut self) {
        self.first.visit_enter_block_scope();
        self.second.visit_enter_block_scope();
    }

    fn visit_exit_block_scope(&mut self) {
        self.first.visit_exit_block_scope();
        self.second.visit_exit_block_scope();
    }

    fn visit_enter_with_scope(&mut self) {
        self.first.visit_enter_with_scope();
        self.second.visit_enter_with_scope();
    }

    fn visit_exit_with_scope(&mut self) {
        self.first.visit_exit_with_scope();
        self.second.visit_exit_with_scope();
    }

    fn visit_enter_function_scope(&mut self) {
        self.first.visit_enter_function_scope();
        self.second.visit_enter_function_scope();
    }

    fn visit_enter_function_scope_body(&mut self) {
        self.first.visit_enter_function_scope_body();
        self.second.visit_enter_function_scope_body();
    }

    fn visit_exit_function_scope(&mut self) {
        self.first.visit_exit_function_scope();
        self.second.visit_exit_function_scope();
    }

    fn visit_enter_interface_scope(&mut self) {
        self.first.visit_enter_interface_scope();
        self.second.visit_enter_interface_scope();
    }

    fn visit_exit_interface_scope(&mut self) {
        self.first.visit_exit_interface_scope();
        self.second.visit_exit_interface_scope();
    }

    fn visit_enter_class_scope(&mut self) {
        self.first.visit_enter_class_scope();
        self.second.visit_enter_class_scope();
    }

    fn visit_enter_class_scope_body(&mut self, class_name: Option<Identifier>) {
        self.first.visit_enter_class_scope_body(class_name);
        self.second.visit_enter_class_scope_body(class_name);
    }

    fn visit_exit_class_scope(&mut self) {
        self.first.visit_exit_class_scope();
        self.second.visit_exit_class_scope();
    }

    fn visit_enter_namespace_scope(&mut self) {
        self.first.visit_enter_namespace_scope();
        self.second.visit_enter_namespace_scope();
    }

    fn visit_exit_namespace_scope(&mut self) {
        self.first.visit_exit_namespace_scope();
        self.second.visit_exit_namespace_scope();
    }

    fn visit_enter_index_signature_scope(&mut self) {
        self.first.visit_enter_index_signature_scope();
        self.second.visit_enter_index_signature_scope();
    }

    fn visit_exit_index_signature_scope(&mut self) {
        self.first.visit_exit_index_signature_scope();
        self.second.visit_exit_index_signature_scope();
    }

    fn visit_enter_type_scope(&mut self) {
        self.first.visit_enter_type_scope();
        self.second.visit_enter_type_scope();
    }

    fn visit_exit_type_scope(&mut self) {
        self.first.visit_exit_type_scope();
        self.second.visit_exit_type_scope();
    }

    fn visit_property_declaration(&mut self, name: Option<Identifier>) {
        self.first.visit_property_declaration(name);
        self.second.visit_property_declaration(name);
    }

    fn visit_end_of_module(&mut self) {
        self.first.visit_end_of_module();
        self.second.visit_end_of_module();
    }
}

/// A visitor that ignores every event.
pub struct NullVisitor;

impl ParseVisitor for NullVisitor {}
