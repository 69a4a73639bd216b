//! End-to-end pipeline tests: source text in, diagnostics out.

use jetlint_analyzer::{AnalyzerOptions, GlobalDeclaredVariableSet};
use jetlint_engine::{parse_and_analyze, DiagKind, LintResult, ParserOptions};

fn lint(source: &str, parser_options: ParserOptions) -> LintResult<'_> {
    let globals = GlobalDeclaredVariableSet::default_globals();
    parse_and_analyze(
        source,
        parser_options,
        AnalyzerOptions::default(),
        &globals,
    )
}

fn lint_ts(source: &str) -> LintResult<'_> {
    lint(
        source,
        ParserOptions {
            typescript: true,
            ..ParserOptions::default()
        },
    )
}

fn lint_js(source: &str) -> LintResult<'_> {
    lint(source, ParserOptions::default())
}

#[test]
fn test_empty_interface_has_no_diagnostics() {
    let result = lint_ts("interface I {}");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.kinds());
}

#[test]
fn test_interface_in_javascript_mode() {
    let result = lint_js("interface I {}");
    assert_eq!(
        result.diagnostics.kinds(),
        vec![DiagKind::TypeScriptInterfacesNotAllowedInJavaScript]
    );
    let diag = &result.diagnostics.diagnostics()[0];
    assert_eq!(diag.primary_span().to_range(), 0..9);
}

#[test]
fn test_static_method_in_interface() {
    let result = lint_ts("interface I { static m(); }");
    assert_eq!(
        result.diagnostics.kinds(),
        vec![DiagKind::InterfacePropertiesCannotBeStatic]
    );
    let diag = &result.diagnostics.diagnostics()[0];
    assert_eq!(diag.label("static_keyword").unwrap().to_range(), 14..20);
}

#[test]
fn test_async_static_generator_method() {
    let result = lint_ts("interface I { async static *m(); }");
    let mut kinds = result.diagnostics.kinds();
    kinds.sort_by_key(|kind| kind.code());
    let mut expected = vec![
        DiagKind::InterfaceMethodsCannotBeAsync,
        DiagKind::InterfacePropertiesCannotBeStatic,
        DiagKind::InterfaceMethodsCannotBeGenerators,
    ];
    expected.sort_by_key(|kind| kind.code());
    assert_eq!(kinds, expected);
}

#[test]
fn test_forward_reference_with_declare() {
    let result = lint_ts("C; declare class C {}");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.kinds());
}

#[test]
fn test_newline_after_interface_keyword() {
    let result = lint_ts("interface\nI {}");
    assert_eq!(
        result.diagnostics.kinds(),
        vec![DiagKind::NewlineNotAllowedAfterInterfaceKeyword]
    );
    let diag = &result.diagnostics.diagnostics()[0];
    assert_eq!(diag.label("interface_keyword").unwrap().to_range(), 0..9);
}

#[test]
fn test_unterminated_interface() {
    let result = lint_ts("interface I { ");
    assert_eq!(result.diagnostics.kinds(), vec![DiagKind::UnclosedInterfaceBlock]);
    let diag = &result.diagnostics.diagnostics()[0];
    // Labeled at the `{`.
    assert_eq!(diag.primary_span().to_range(), 12..13);
}

#[test]
fn test_asi_inside_interface_body() {
    let result = lint_ts("interface I {\n f()\n g() }");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.kinds());
}

#[test]
fn test_locator_translates_diagnostic_offsets() {
    let result = lint_js("let a;\nmystery;\n");
    assert_eq!(result.diagnostics.kinds(), vec![DiagKind::UseOfUndeclaredVariable]);
    let span = result.diagnostics.diagnostics()[0].primary_span();
    let at = result.locator.locate(span.begin);
    assert_eq!((at.line, at.column), (1, 0));
}

#[test]
fn test_lexer_parser_analyzer_diagnostics_combine() {
    let result = lint_js("let s = 'unclosed\nmystery;");
    assert_eq!(
        result.diagnostics.kinds(),
        vec![
            DiagKind::UnclosedStringLiteral,
            DiagKind::UseOfUndeclaredVariable,
        ]
    );
}

#[test]
fn test_error_severity_partition() {
    let result = lint_js("mystery;");
    assert!(!result.has_errors(), "undeclared use is a warning");
    let result = lint_js("const c = 1; c = 2;");
    assert!(result.has_errors());
}

#[test]
fn test_larger_program_round_trip() {
    let source = r#"
class Animal {
    constructor(name) {
        this.name = name;
    }
    speak() {
        console.log(this.name);
    }
}

function makeAnimals(names) {
    let animals = [];
    for (let name of names) {
        animals.push(new Animal(name));
    }
    return animals;
}

makeAnimals(['cat', 'dog']).forEach(animal => animal.speak());
"#;
    let result = lint_js(source);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.kinds());
}

#[test]
fn test_typescript_program_round_trip() {
    let source = r#"
interface Shape {
    readonly name: string;
    area(): number;
}

type ShapeFactory = (size: number) => Shape;

namespace geometry {
    export const tau: number = 6.28;
}

declare class Circle implements Shape {
    name: string;
    area(): number;
}

function describe(shape: Shape): string {
    return shape.name;
}
"#;
    let result = lint_ts(source);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.kinds());
}

#[test]
fn test_determinism_across_runs() {
    let source = "interface I { f() g(); }\nlet x = (a, b) => a + mystery;";
    let first = lint_ts(source);
    let second = lint_ts(source);
    assert_eq!(first.diagnostics.diagnostics(), second.diagnostics.diagnostics());
}
