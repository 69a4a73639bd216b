//! Visit tracing for `--debug-parser-visits`.

use jetlint_core::intern::StringInterner;
use jetlint_syntax::types::{DeclFlags, DeclKind, Identifier};
use jetlint_syntax::visitor::ParseVisitor;

/// Prints every event to stderr, then forwards it to the wrapped
/// visitor.
pub struct TraceVisitor<'a, V> {
    inner: &'a mut V,
    interner: StringInterner,
}

impl<'a, V> TraceVisitor<'a, V> {
    pub fn new(inner: &'a mut V, interner: StringInterner) -> Self {
        Self { inner, interner }
    }

    fn name_of(&self, id: Identifier) -> &str {
        self.interner.resolve(id.name)
    }
}

impl<V: ParseVisitor> ParseVisitor for TraceVisitor<'_, V> {
    fn visit_variable_declaration(&mut self, name: Identifier, kind: DeclKind, flags: DeclFlags) {
        eprintln!(
            "visit_variable_declaration {} ({kind:?}, {flags:?})",
            self.name_of(name)
        );
        self.inner.visit_variable_declaration(name, kind, flags);
    }

    fn visit_variable_use(&mut self, name: Identifier) {
        eprintln!("visit_variable_use {}", self.name_of(name));
        self.inner.visit_variable_use(name);
    }

    fn visit_variable_type_use(&mut self, name: Identifier) {
        eprintln!("visit_variable_type_use {}", self.name_of(name));
        self.inner.visit_variable_type_use(name);
    }

    fn visit_variable_namespace_use(&mut self, name: Identifier) {
        eprintln!("visit_variable_namespace_use {}", self.name_of(name));
        self.inner.visit_variable_namespace_use(name);
    }

    fn visit_variable_assignment(&mut self, name: Identifier) {
        eprintln!("visit_variable_assignment {}", self.name_of(name));
        self.inner.visit_variable_assignment(name);
    }

    fn visit_variable_delete_use(&mut self, name: Identifier) {
        eprintln!("visit_variable_delete_use {}", self.name_of(name));
        self.inner.visit_variable_delete_use(name);
    }

    fn visit_enter_block_scope(&mut self) {
        eprintln!("visit_enter_block_scope");
        self.inner.visit_enter_block_scope();
    }

    fn visit_exit_block_scope(&mut self) {
        eprintln!("visit_exit_block_scope");
        self.inner.visit_exit_block_scope();
    }

    fn visit_enter_with_scope(&mut self) {
        eprintln!("visit_enter_with_scope");
        self.inner.visit_enter_with_scope();
    }

    fn visit_exit_with_scope(&mut self) {
        eprintln!("visit_exit_with_scope");
        self.inner.visit_exit_with_scope();
    }

    fn visit_enter_function_scope(&mut self) {
        eprintln!("visit_enter_function_scope");
        self.inner.visit_enter_function_scope();
    }

    fn visit_enter_function_scope_body(&mut self) {
        eprintln!("visit_enter_function_scope_body");
        self.inner.visit_enter_function_scope_body();
    }

    fn visit_exit_function_scope(&mut self) {
        eprintln!("visit_exit_function_scope");
        self.inner.visit_exit_function_scope();
    }

    fn visit_enter_interface_scope(&mut self) {
        eprintln!("visit_enter_interface_scope");
        self.inner.visit_enter_interface_scope();
    }

    fn visit_exit_interface_scope(&mut self) {
        eprintln!("visit_exit_interface_scope");
        self.inner.visit_exit_interface_scope();
    }

    fn visit_enter_class_scope(&mut self) {
        eprintln!("visit_enter_class_scope");
        self.inner.visit_enter_class_scope();
    }

    fn visit_enter_class_scope_body(&mut self, class_name: Option<Identifier>) {
        match class_name {
            Some(name) => eprintln!("visit_enter_class_scope_body {}", self.name_of(name)),
            None => eprintln!("visit_enter_class_scope_body"),
        }
        self.inner.visit_enter_class_scope_body(class_name);
    }

    fn visit_exit_class_scope(&mut self) {
        eprintln!("visit_exit_class_scope");
        self.inner.visit_exit_class_scope();
    }

    fn visit_enter_namespace_scope(&mut self) {
        eprintln!("visit_enter_namespace_scope");
        self.inner.visit_enter_namespace_scope();
    }

    fn visit_exit_namespace_scope(&mut self) {
        eprintln!("visit_exit_namespace_scope");
        self.inner.visit_exit_namespace_scope();
    }

    fn visit_enter_index_signature_scope(&mut self) {
        eprintln!("visit_enter_index_signature_scope");
        self.inner.visit_enter_index_signature_scope();
    }

    fn visit_exit_index_signature_scope(&mut self) {
        eprintln!("visit_exit_index_signature_scope");
        self.inner.visit_exit_index_signature_scope();
    }

    fn visit_enter_type_scope(&mut self) {
        eprintln!("visit_enter_type_scope");
        self.inner.visit_enter_type_scope();
    }

    fn visit_exit_type_scope(&mut self) {
        eprintln!("visit_exit_type_scope");
        self.inner.visit_exit_type_scope();
    }

    fn visit_property_declaration(&mut self, name: Option<Identifier>) {
        match name {
            Some(name) => eprintln!("visit_property_declaration {}", self.name_of(name)),
            None => eprintln!("visit_property_declaration"),
        }
        self.inner.visit_property_declaration(name);
    }

    fn visit_end_of_module(&mut self) {
        eprintln!("visit_end_of_module");
        self.inner.visit_end_of_module();
    }
}
