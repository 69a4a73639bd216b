//! Parser throughput benchmark.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jetlint_core::intern::StringInterner;
use jetlint_parser::{Parser, ParserOptions};
use jetlint_syntax::visitor::NullVisitor;

fn sample_source() -> String {
    let mut source = String::new();
    for i in 0..200 {
        source.push_str(&format!(
            "interface Shape{i}<T> {{\n  area(): T;\n  name: string;\n  [key: string]: T;\n}}\n\
             function draw{i}(shape) {{\n  let total = 0;\n  for (let i = 0; i < 10; i++) {{\n    total += shape.area();\n  }}\n  return total;\n}}\n"
        ));
    }
    source
}

fn parse_benchmark(c: &mut Criterion) {
    let source = sample_source();
    let options = ParserOptions {
        typescript: true,
        ..ParserOptions::default()
    };
    c.bench_function("parse_typescript_module", |b| {
        b.iter(|| {
            let interner = StringInterner::new();
            let mut parser = Parser::new(black_box(&source), options, interner);
            let mut visitor = NullVisitor;
            parser.parse_and_visit_module(&mut visitor);
            black_box(parser.take_diagnostics().len())
        })
    });
}

criterion_group!(benches, parse_benchmark);
criterion_main!(benches);
