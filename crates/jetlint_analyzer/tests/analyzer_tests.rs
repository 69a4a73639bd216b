//! Variable analyzer integration tests.
//!
//! Each helper runs the full parse -> analyze pipeline over a source
//! string and returns the combined diagnostics, parser first.

use jetlint_analyzer::{AnalyzerOptions, GlobalDeclaredVariableSet, VariableAnalyzer};
use jetlint_core::intern::StringInterner;
use jetlint_diagnostics::{DiagKind, DiagnosticCollection};
use jetlint_parser::{Parser, ParserOptions};

fn analyze_with(source: &str, parser_options: ParserOptions) -> DiagnosticCollection {
    let interner = StringInterner::new();
    let globals = GlobalDeclaredVariableSet::default_globals();
    let mut analyzer = VariableAnalyzer::new(
        &globals,
        AnalyzerOptions::default(),
        interner.clone(),
    );
    let mut parser = Parser::new(source, parser_options, interner);
    parser.parse_and_visit_module(&mut analyzer);
    let mut diags = parser.take_diagnostics();
    diags.extend(analyzer.finish());
    diags
}

fn analyze_js(source: &str) -> DiagnosticCollection {
    analyze_with(source, ParserOptions::default())
}

fn analyze_ts(source: &str) -> DiagnosticCollection {
    analyze_with(
        source,
        ParserOptions {
            typescript: true,
            ..ParserOptions::default()
        },
    )
}

#[track_caller]
fn assert_no_diags(source: &str, diags: &DiagnosticCollection) {
    assert!(
        diags.is_empty(),
        "expected no diagnostics for {source:?}, got {:?}",
        diags.kinds()
    );
}

// ============================================================================
// Basic resolution
// ============================================================================

#[test]
fn test_declared_variable_use() {
    let diags = analyze_js("let x = 1; x;");
    assert_no_diags("let x = 1; x;", &diags);
}

#[test]
fn test_use_of_undeclared_variable() {
    let diags = analyze_js("someVariable;");
    assert_eq!(diags.kinds(), vec![DiagKind::UseOfUndeclaredVariable]);
    assert_eq!(diags.diagnostics()[0].primary_span().to_range(), 0..12);
}

#[test]
fn test_assignment_to_undeclared_variable() {
    let diags = analyze_js("someVariable = 1;");
    assert_eq!(diags.kinds(), vec![DiagKind::AssignmentToUndeclaredVariable]);
}

#[test]
fn test_global_variables_resolve() {
    let diags = analyze_js("Math.max(1, 2); console.log(JSON.stringify(x => x));");
    assert_no_diags("globals", &diags);
}

#[test]
fn test_delete_of_undeclared_is_silent() {
    let diags = analyze_js("delete someGlobalMaybe;");
    assert_no_diags("delete", &diags);
}

#[test]
fn test_exactly_one_diagnostic_per_unresolved_use() {
    let diags = analyze_js("mystery; mystery;");
    assert_eq!(
        diags.kinds(),
        vec![
            DiagKind::UseOfUndeclaredVariable,
            DiagKind::UseOfUndeclaredVariable
        ]
    );
}

// ============================================================================
// Scoping
// ============================================================================

#[test]
fn test_block_scoped_variable_not_visible_outside() {
    let diags = analyze_js("{ let hidden = 1; } hidden;");
    assert_eq!(diags.kinds(), vec![DiagKind::UseOfUndeclaredVariable]);
}

#[test]
fn test_var_escapes_block() {
    let diags = analyze_js("{ var escaped = 1; } escaped;");
    assert_no_diags("var escapes block", &diags);
}

#[test]
fn test_parameter_visible_in_body() {
    let diags = analyze_js("function f(param) { return param; }");
    assert_no_diags("parameter", &diags);
}

#[test]
fn test_parameter_not_visible_outside() {
    let diags = analyze_js("function f(param) {} param;");
    assert_eq!(diags.kinds(), vec![DiagKind::UseOfUndeclaredVariable]);
}

#[test]
fn test_closure_captures_outer_variable() {
    let diags = analyze_js("let captured = 1; function f() { return captured; }");
    assert_no_diags("closure", &diags);
}

#[test]
fn test_catch_parameter() {
    let diags = analyze_js("try {} catch (e) { e; } ");
    assert_no_diags("catch", &diags);
}

#[test]
fn test_class_name_visible_in_body() {
    let diags = analyze_js("class C { method() { return C; } }");
    assert_no_diags("class body", &diags);
}

#[test]
fn test_named_function_expression_name_in_scope() {
    let diags = analyze_js("let f = function g() { return g; };");
    assert_no_diags("named function expression", &diags);
}

// ============================================================================
// Hoisting and the temporal dead zone
// ============================================================================

#[test]
fn test_function_use_before_declaration() {
    let diags = analyze_js("f(); function f() {}");
    assert_no_diags("function hoisting", &diags);
}

#[test]
fn test_var_use_before_declaration() {
    let diags = analyze_js("x; var x = 1;");
    assert_no_diags("var hoisting", &diags);
}

#[test]
fn test_let_use_before_declaration_reports() {
    let diags = analyze_js("x; let x = 1;");
    assert_eq!(diags.kinds(), vec![DiagKind::VariableUsedBeforeDeclaration]);
    let diag = &diags.diagnostics()[0];
    assert_eq!(diag.label("use").unwrap().to_range(), 0..1);
    assert_eq!(diag.label("declaration").unwrap().to_range(), 7..8);
}

#[test]
fn test_class_use_before_declaration_reports() {
    let diags = analyze_js("new C(); class C {}");
    assert_eq!(diags.kinds(), vec![DiagKind::VariableUsedBeforeDeclaration]);
}

#[test]
fn test_tdz_use_inside_nested_function_is_exempt() {
    let diags = analyze_js("function f() { return x; } let x = 1;");
    assert_no_diags("nested function TDZ", &diags);
}

#[test]
fn test_tdz_use_inside_arrow_is_exempt() {
    let diags = analyze_js("let f = () => x; let x = 1;");
    assert_no_diags("arrow TDZ", &diags);
}

// ============================================================================
// Const assignment
// ============================================================================

#[test]
fn test_assignment_to_const() {
    let diags = analyze_js("const c = 1; c = 2;");
    assert_eq!(diags.kinds(), vec![DiagKind::AssignmentToConstVariable]);
    let diag = &diags.diagnostics()[0];
    assert_eq!(diag.label("assignment").unwrap().to_range(), 13..14);
    assert_eq!(diag.label("declaration").unwrap().to_range(), 6..7);
}

#[test]
fn test_compound_assignment_to_const() {
    let diags = analyze_js("const c = 1; c += 2;");
    assert_eq!(diags.kinds(), vec![DiagKind::AssignmentToConstVariable]);
}

#[test]
fn test_assignment_to_const_before_declaration() {
    let diags = analyze_js("c = 1; const c = 2;");
    assert_eq!(
        diags.kinds(),
        vec![DiagKind::AssignmentToConstVariableBeforeItsDeclaration]
    );
}

#[test]
fn test_assignment_to_const_in_nested_function() {
    let diags = analyze_js("const c = 1; function f() { c = 2; }");
    assert_eq!(diags.kinds(), vec![DiagKind::AssignmentToConstVariable]);
}

#[test]
fn test_const_read_is_fine() {
    let diags = analyze_js("const c = 1; c;");
    assert_no_diags("const read", &diags);
}

// ============================================================================
// Redeclaration
// ============================================================================

#[test]
fn test_redeclaration_of_let() {
    let diags = analyze_js("let twice; let twice;");
    assert_eq!(diags.kinds(), vec![DiagKind::RedeclarationOfVariable]);
    let diag = &diags.diagnostics()[0];
    assert_eq!(diag.label("redeclaration").unwrap().to_range(), 15..20);
    assert_eq!(diag.label("original_declaration").unwrap().to_range(), 4..9);
}

#[test]
fn test_var_var_is_allowed() {
    let diags = analyze_js("var twice; var twice;");
    assert_no_diags("var var", &diags);
}

#[test]
fn test_function_function_is_allowed() {
    let diags = analyze_js("function f() {} function f() {}");
    assert_no_diags("function function", &diags);
}

#[test]
fn test_var_and_function_is_allowed() {
    let diags = analyze_js("var f; function f() {}");
    assert_no_diags("var function", &diags);
}

#[test]
fn test_let_then_var_reports() {
    let diags = analyze_js("let x; var x;");
    assert_eq!(diags.kinds(), vec![DiagKind::RedeclarationOfVariable]);
}

#[test]
fn test_class_redeclaration_reports() {
    let diags = analyze_js("class C {} class C {}");
    assert_eq!(diags.kinds(), vec![DiagKind::RedeclarationOfVariable]);
}

#[test]
fn test_shadowing_in_inner_scope_is_allowed() {
    let diags = analyze_js("let x; { let x; }");
    assert_no_diags("shadowing", &diags);
}

#[test]
fn test_parameter_redeclared_as_var_is_allowed() {
    let diags = analyze_js("function f(a) { var a; }");
    assert_no_diags("param var", &diags);
}

#[test]
fn test_interface_merging_is_allowed() {
    let diags = analyze_ts("interface I { a; } interface I { b; }");
    assert_no_diags("interface merging", &diags);
}

#[test]
fn test_interface_class_merging_is_allowed() {
    let diags = analyze_ts("class C {} interface C { a; }");
    assert_no_diags("class interface merging", &diags);
}

#[test]
fn test_namespace_merges_with_function() {
    let diags = analyze_ts("function f() {} namespace f { }");
    assert_no_diags("namespace function merging", &diags);
}

// ============================================================================
// Type and value namespaces
// ============================================================================

#[test]
fn test_interface_resolves_type_uses_only() {
    let diags = analyze_ts("interface I {} let x: I;");
    assert_no_diags("interface type use", &diags);

    let diags = analyze_ts("interface I {} I;");
    assert_eq!(diags.kinds(), vec![DiagKind::UseOfUndeclaredVariable]);
}

#[test]
fn test_value_only_declaration_is_invisible_to_types() {
    let diags = analyze_ts("let v = 1; let x: v;");
    assert_eq!(diags.kinds(), vec![DiagKind::UseOfUndeclaredVariable]);
}

#[test]
fn test_class_resolves_both_namespaces() {
    let diags = analyze_ts("class C {} let a: C = new C();");
    assert_no_diags("class both namespaces", &diags);
}

#[test]
fn test_generic_parameter_resolves_in_signature() {
    let diags = analyze_ts("interface Getter<T> { get(): T; }");
    assert_no_diags("generic parameter", &diags);
}

#[test]
fn test_index_signature_parameter_scope() {
    let diags = analyze_ts("interface I { [key: string]: number; }");
    assert_no_diags("index signature", &diags);
}

#[test]
fn test_type_alias_forward_reference() {
    // Type aliases resolve lazily; a use before the alias in a nested
    // construct is fine.
    let diags = analyze_ts("interface I { f(): Later; } type Later = number;");
    assert_no_diags("type forward reference", &diags);
}

// ============================================================================
// `declare` forward references
// ============================================================================

#[test]
fn test_declare_class_usable_before_declaration() {
    let diags = analyze_ts("C; declare class C {}");
    assert_no_diags("C; declare class C {}", &diags);
}

#[test]
fn test_declare_const_usable_before_declaration() {
    let diags = analyze_ts("a; declare const a;");
    assert_no_diags("a; declare const a;", &diags);
}

#[test]
fn test_declare_class_heritage_may_use_later_class() {
    let diags = analyze_ts("declare class Derived extends Base {}  class Base {}");
    assert_no_diags("declare heritage", &diags);
}

#[test]
fn test_declare_namespace_body_may_use_later_class() {
    let diags = analyze_ts(
        "declare namespace ns {\n  class Derived extends Base {}\n}\nclass Base {}",
    );
    assert_no_diags("declare namespace heritage", &diags);
}

// ============================================================================
// End-to-end invariants
// ============================================================================

#[test]
fn test_use_never_reports_twice() {
    // A resolved use produces no diagnostic; an unresolved one
    // produces exactly one.
    let diags = analyze_js("let a; a; b;");
    assert_eq!(diags.kinds(), vec![DiagKind::UseOfUndeclaredVariable]);
}

#[test]
fn test_analyzer_diagnostics_follow_parser_diagnostics() {
    // One parse error and one analysis warning; the parser's comes
    // first in the collection.
    let diags = analyze_js("let x = 1 someUndeclared;");
    assert_eq!(
        diags.kinds(),
        vec![
            DiagKind::MissingSemicolonAfterStatement,
            DiagKind::UseOfUndeclaredVariable,
        ]
    );
}

#[test]
fn test_recovered_parse_still_balances_scopes() {
    // Even with a parse error inside, the analyzer sees balanced
    // events and does not panic.
    let diags = analyze_js("function f( { let x; x; ");
    assert!(!diags.is_empty());
}
