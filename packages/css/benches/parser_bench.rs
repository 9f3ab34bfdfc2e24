use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motif_css::{parse, serialize_layers, tokenize};

fn parse_single_layer(c: &mut Criterion) {
    let source = "opacity 200ms ease-in 0s";

    c.bench_function("parse_single_layer", |b| {
        b.iter(|| parse(black_box(source)))
    });
}

fn parse_multi_layer(c: &mut Criterion) {
    let source = "opacity 200ms ease-in, transform 300ms cubic-bezier(0.4, 0, 0.2, 1) 50ms, \
                  width 2s steps(6, jump-end), height 150ms linear 0s";

    c.bench_function("parse_multi_layer", |b| {
        b.iter(|| parse(black_box(source)))
    });
}

fn round_trip(c: &mut Criterion) {
    let source = "opacity 200ms ease-in, transform 300ms cubic-bezier(0.4, 0, 0.2, 1) 50ms";
    let layers = parse(source).unwrap();

    c.bench_function("round_trip", |b| {
        b.iter(|| parse(black_box(&serialize_layers(black_box(&layers)))))
    });
}

fn tokenize_only(c: &mut Criterion) {
    let source = "opacity 200ms ease-in, transform 300ms cubic-bezier(0.4, 0, 0.2, 1) 50ms";

    c.bench_function("tokenize_only", |b| {
        b.iter(|| tokenize(black_box(source)))
    });
}

criterion_group!(
    benches,
    parse_single_layer,
    parse_multi_layer,
    round_trip,
    tokenize_only
);
criterion_main!(benches);
