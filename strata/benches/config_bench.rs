use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::path::Path;
use strata::config::{ini, ConfigMerger, ConfigTree, ConfigValidator};
use strata::path::normalize;

const COMMON: &str = "\
NODE_ENV = development

[http]
port = 8080
bodyLimit = 100kb

[rateLimit]
minutes = 15
requests = 100

[session]
secret = 0123456789abcdef0123456789abcdef

[paths]
static = public
views = views
viewsLayouts = views/layouts
viewsPartials = views/partials
emails = emails
defaultLayout = main

[valkey]
url = redis://localhost:6379
";

const OVERRIDE: &str = "\
NODE_ENV = staging

[http]
port = 9090

[valkey]
url = redis://cache.internal:6380 ; staging cache
";

fn parsed(source: &str) -> ConfigTree {
    ini::parse(source).unwrap()
}

// Deeply nested section headers, `depth` levels
fn nested_source(depth: usize) -> String {
    let mut source = String::new();
    for level in 1..=depth {
        let header: Vec<String> = (0..level).map(|i| format!("s{i}")).collect();
        source.push_str(&format!("[{}]\nkey{level} = value\n", header.join(".")));
    }
    source
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("common", |b| {
        b.iter(|| ini::parse(black_box(COMMON)));
    });

    // Benchmark nesting depth
    for depth in [4, 16, 64] {
        let source = nested_source(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &source, |b, source| {
            b.iter(|| ini::parse(black_box(source)));
        });
    }

    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let common = parsed(COMMON);
    let specific = parsed(OVERRIDE);

    group.bench_function("common_with_override", |b| {
        b.iter(|| ConfigMerger::merge([black_box(common.clone()), black_box(specific.clone())]));
    });

    for depth in [4, 16, 64] {
        let deep = parsed(&nested_source(depth));
        group.bench_with_input(BenchmarkId::new("nested", depth), &deep, |b, deep| {
            b.iter(|| ConfigMerger::merge([black_box(deep.clone()), black_box(deep.clone())]));
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");

    let valid = ConfigMerger::merge([parsed(COMMON), parsed(OVERRIDE)]);
    group.bench_function("valid", |b| {
        b.iter(|| ConfigValidator::validate(black_box(&valid)));
    });

    // Every section missing
    let empty = ConfigTree::new();
    group.bench_function("all_violations", |b| {
        b.iter(|| ConfigValidator::validate(black_box(&empty)));
    });

    group.finish();
}

fn bench_resolve_components(c: &mut Criterion) {
    c.bench_function("resolve_components", |b| {
        b.iter(|| normalize::resolve_components(black_box(Path::new("/srv/app/./views/../public"))));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_merge,
    bench_validate,
    bench_resolve_components
);
criterion_main!(benches);
