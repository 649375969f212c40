//! Criterion benchmarks for the hot lookup paths
//!
//! Benchmarks the operations a loadout page hits once per displayed
//! record: locator resolution, progression rank lookup, and catalog
//! parsing at startup.

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use loadstone::bosses;
use loadstone::config::Sources;
use loadstone::models::FileAlias;
use loadstone::mods::Mod;
use loadstone::parser::parse_catalog;
use loadstone::progression::ProgressionIndex;
use loadstone::registry::OverrideRegistry;
use loadstone::resolver::ImageResolver;

/// Generate catalog content with `count` boss lines.
fn make_catalog(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                r#"{{"type": "boss", "name": "Bench Boss {}", "mod": "calamity", "order": {}}}"#,
                i, i
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolver_with_aliases() -> ImageResolver {
    let mut registry = OverrideRegistry::new();
    registry.register_alias(FileAlias {
        name: "Fiery Greatsword".to_string(),
        file: "Volcano_(old)".to_string(),
        r#mod: Mod::Vanilla,
    });
    ImageResolver::new(Sources::default(), registry)
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = resolver_with_aliases();

    let mut group = c.benchmark_group("resolve");
    group.bench_function("plain", |b| {
        b.iter(|| resolver.resolve(black_box("Terra Blade"), Mod::Vanilla))
    });
    group.bench_function("aliased", |b| {
        b.iter(|| resolver.resolve(black_box("Fiery Greatsword"), Mod::Vanilla))
    });
    group.bench_function("chain", |b| {
        b.iter(|| resolver.fallback_chain(black_box("Storm Weaver"), Mod::Calamity))
    });
    group.finish();
}

fn bench_rank_of(c: &mut Criterion) {
    let index = ProgressionIndex::build(bosses::all());

    let mut group = c.benchmark_group("rank_of");
    group.bench_function("exact", |b| b.iter(|| index.rank_of(black_box("Moon Lord"))));
    group.bench_function("substring", |b| {
        b.iter(|| index.rank_of(black_box("eater of worlds")))
    });
    group.bench_function("unknown", |b| {
        b.iter(|| index.rank_of(black_box("nothing like a boss")))
    });
    group.finish();
}

fn bench_parse_catalog(c: &mut Criterion) {
    let small = make_catalog(10);
    let large = make_catalog(500);

    let mut group = c.benchmark_group("parse_catalog");
    group.throughput(Throughput::Bytes(small.len() as u64));
    group.bench_function("10_lines", |b| {
        b.iter(|| parse_catalog(Cursor::new(black_box(&small))))
    });
    group.throughput(Throughput::Bytes(large.len() as u64));
    group.bench_function("500_lines", |b| {
        b.iter(|| parse_catalog(Cursor::new(black_box(&large))))
    });
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_rank_of, bench_parse_catalog);
criterion_main!(benches);
