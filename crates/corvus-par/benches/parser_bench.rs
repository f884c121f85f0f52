//! Parser benchmarks.
//!
//! Run with `cargo bench --package corvus-par`.

use bumpalo::Bump;
use corvus_lex::lex;
use corvus_par::parse;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn parse_source(source: &str) {
    let tokens = lex(source, "<bench>").expect("lex should succeed");
    let bump = Bump::new();
    let ast = parse(&tokens, "<bench>", &bump).expect("parse should succeed");
    black_box(ast.root.len());
}

fn bench_parser_declaration(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_declaration");

    let source = "x = 42;";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("variable_declaration", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

fn bench_parser_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_functions");

    let source = r#"
        func main() -> Int {
            x = 42;
            y = x + 1;
            return y;
        }

        func fib(n: Int) -> Int {
            if (n <= 1) {
                return n;
            }
            return fib(n - 1) + fib(n - 2);
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("functions", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_control_flow");

    let source = r#"
        func process(n: Int) -> Int {
            if (n < 0) {
                return -1;
            } else if (n == 0) {
                return 0;
            } else {
                return match (n) {
                    1: 1,
                    2: 2,
                    else: {
                        mutable sum = 0;
                        loop (i = 0; i < n; i = i + 1) {
                            sum = sum + i;
                        }
                        sum;
                    },
                };
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("control_flow", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_loops(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_loops");

    let source = r#"
        func sum_all(items: *Int, count: Int) -> Int {
            mutable total = 0;
            loop (item in items) {
                total = total + item;
            }
            outer: loop (i = 0; i < count; i++) {
                loop (j = 0; j < count; j++) {
                    if (i == j) { continue; }
                    if (total > 1000) { break :outer total; }
                }
            }
            return total;
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("loops", |b| b.iter(|| parse_source(black_box(source))));

    group.finish();
}

fn bench_parser_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_complex");

    let source = r#"
        func clamp(value: Int, low: Int, high: Int) -> Int {
            if (value < low) { return low; }
            if (value > high) { return high; }
            return value;
        }

        func build_buffer(size: Int) -> *Int;

        export func main() -> Int {
            Int[] data = #{1, 2, 3, 4, 5};
            mutable total = 0;
            loop (entry in data) {
                total = total + clamp(entry, 0, 10);
            }
            defer log_result(total);
            return total;
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("complex_source", |b| {
        b.iter(|| parse_source(black_box(source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parser_declaration,
    bench_parser_functions,
    bench_parser_control_flow,
    bench_parser_loops,
    bench_parser_complex
);
criterion_main!(benches);
