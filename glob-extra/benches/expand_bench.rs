use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glob_extra::{expand_braces, is_mask, ExpandOptions, GlobOptions, ParsedPattern, PathExpander};
use std::fs;

fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");

    group.bench_function("is_mask_literal", |b| {
        b.iter(|| is_mask(black_box("some/deep/path/to/file.js")));
    });

    group.bench_function("is_mask_globstar", |b| {
        b.iter(|| is_mask(black_box("src/**/*.{js,ts}")));
    });

    group.bench_function("expand_braces_nested", |b| {
        b.iter(|| expand_braces(black_box("{a,b{c,d}}/{1..20}/*.{js,ts,css}")));
    });

    group.bench_function("parse_pattern", |b| {
        b.iter(|| ParsedPattern::parse(black_box("!src/**/[a-z]*.+(js|ts)")));
    });

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");

    let temp = tempfile::tempdir().unwrap();
    for dir in 0..10 {
        for file in 0..50 {
            let path = temp.path().join(format!("d{dir}/f{file}.js"));
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
    }

    let expand = ExpandOptions::new().with_root(temp.path());
    let glob = GlobOptions::new().with_cwd(temp.path());

    for concurrency in [1, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("directories", concurrency),
            &concurrency,
            |b, &concurrency| {
                let expander = PathExpander::default().with_concurrency(concurrency);
                b.iter(|| expander.expand(black_box("d*"), &expand, &glob).unwrap());
            },
        );
    }

    group.bench_function("globstar_mask", |b| {
        let expander = PathExpander::default();
        b.iter(|| expander.expand(black_box("**/*.js"), &expand, &glob).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_patterns, bench_expand);
criterion_main!(benches);
