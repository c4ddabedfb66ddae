// Copyright 2025 the Konj Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use konj_catalog::{Catalog, SearchIndex};

const QUERIES: &[&str] = &[
    "button",
    "butt",
    "dilog",
    "modal styled",
    "animated cards",
    "swiping hook",
    "zzzz",
];

fn bench_index_build(c: &mut Criterion) {
    let Ok(catalog) = Catalog::bundled() else {
        return;
    };
    c.bench_function("catalog/index_build", |b| {
        b.iter(|| black_box(SearchIndex::new(black_box(&catalog))));
    });
}

fn bench_search(c: &mut Criterion) {
    let Ok(catalog) = Catalog::bundled() else {
        return;
    };
    let index = SearchIndex::new(&catalog);
    let mut group = c.benchmark_group("catalog/search");
    group.throughput(Throughput::Elements(QUERIES.len() as u64));
    group.bench_function("mixed_queries", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for q in QUERIES {
                let r = index.search(black_box(q));
                hits += r.components.len() + r.hooks.len();
            }
            black_box(hits)
        });
    });
    group.bench_function("typo_only", |b| {
        b.iter(|| black_box(index.search(black_box("stakcing crads"))));
    });
    group.finish();
}

criterion_group!(benches, bench_index_build, bench_search);
criterion_main!(benches);
