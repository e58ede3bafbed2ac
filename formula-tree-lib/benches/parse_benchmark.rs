use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use formula_tree::interpreter::arithmetic;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let expressions = [
        "x ^ 2".to_string(),
        "x ^ 3 + 2 * x ^ 2 - 4 * x + 3".to_string(),
        "sqrt ( 2 + x ^ 2 )".to_string(),
        "ln ( ( 1 + x ) ^ 3 )".to_string(),
        "( x ^ 2 + z ) ^ ( y * z ) + ( a + b + c ^ x ) - ( 8 * x ^ 2 )".to_string(),
        "clamp ( a * b ) ( c - d ) ( sqrt e ) / 2".to_string(),
    ];
    for expression in expressions {
        let token_count = expression.split_whitespace().count();
        group.throughput(Throughput::Elements(token_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| arithmetic::parse(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
