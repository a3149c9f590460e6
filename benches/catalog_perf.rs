//! Criterion benchmarks for catalog loading and view derivation.
//!
//! Targets:
//! - Parse embedded catalog: < 1ms
//! - Selection change over the embedded catalog: < 50us
//! - Card rendering: < 20us

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use skill_catalog::catalog::{CatalogDocument, CatalogProvider, CatalogStore, EmbeddedProvider};
use skill_catalog::catalog::provider::EMBEDDED_CATALOG;
use skill_catalog::render::{Painter, card, stars};

fn embedded_store() -> CatalogStore {
    let document = EmbeddedProvider::new().fetch().unwrap();
    CatalogStore::from_document(document)
}

fn load_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");
    group.throughput(Throughput::Bytes(EMBEDDED_CATALOG.len() as u64));

    group.bench_function("parse_embedded", |b| {
        b.iter(|| CatalogDocument::from_json(black_box(EMBEDDED_CATALOG)).unwrap());
    });

    group.bench_function("build_store", |b| {
        let document = CatalogDocument::from_json(EMBEDDED_CATALOG).unwrap();
        b.iter(|| CatalogStore::from_document(black_box(document.clone())));
    });

    group.finish();
}

fn selection_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let mut store = embedded_store();
    let categories: Vec<String> = store
        .category_counts()
        .iter()
        .map(|c| c.category.clone())
        .collect();
    group.throughput(Throughput::Elements(store.records().len() as u64));

    group.bench_function("select_all", |b| {
        let empty: Vec<String> = Vec::new();
        b.iter(|| store.set_selection(black_box(empty.clone())).len());
    });

    group.bench_function("select_one", |b| {
        let one = vec![categories[0].clone()];
        b.iter(|| store.set_selection(black_box(one.clone())).len());
    });

    group.bench_function("select_half", |b| {
        let half: Vec<String> = categories.iter().step_by(2).cloned().collect();
        b.iter(|| store.set_selection(black_box(half.clone())).len());
    });

    group.finish();
}

fn render_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let store = embedded_store();
    let skill = &store.records()[0];

    group.bench_function("stars", |b| {
        b.iter(|| stars(black_box(3.5)));
    });

    group.bench_function("card_plain", |b| {
        b.iter(|| card(black_box(skill), 80, Painter::plain()));
    });

    group.bench_function("card_color", |b| {
        b.iter(|| card(black_box(skill), 80, Painter::new(true)));
    });

    group.finish();
}

criterion_group!(benches, load_benchmarks, selection_benchmarks, render_benchmarks);
criterion_main!(benches);
