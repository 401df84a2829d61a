// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lazy_index::{Aabb2D, LazyIndex};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree};

type Tagged = GeomWithData<Rectangle<[f64; 2]>, u32>;

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Aabb2D> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Aabb2D::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

fn to_rstar_rect(r: &Aabb2D, id: u32) -> Tagged {
    GeomWithData::new(
        Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]),
        id,
    )
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_build_query");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = Aabb2D::from_xywh(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("lazy_index_n{}", n), |b| {
            b.iter(|| {
                let mut idx = LazyIndex::new();
                for (i, r) in (0_u32..).zip(rects.iter().copied()) {
                    idx.insert(i, r).unwrap();
                }
                black_box(idx.query_rect(query).count());
            })
        });

        group.bench_function(format!("rstar_incremental_n{}", n), |b| {
            b.iter(|| {
                let mut tree = RTree::new();
                for (i, r) in (0_u32..).zip(rects.iter()) {
                    tree.insert(to_rstar_rect(r, i));
                }
                let env = AABB::from_corners([query.min_x, query.min_y], [query.max_x, query.max_y]);
                black_box(tree.locate_in_envelope_intersecting(&env).count());
            })
        });
    }
    group.finish();
}

// Move every item once, as a renderer would for per-frame agent positions.
fn bench_move_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_compare_move_all");
    let rects = gen_grid_rects(64, 10.0);
    group.throughput(Throughput::Elements(rects.len() as u64));

    group.bench_function("lazy_index", |b| {
        b.iter_batched(
            || {
                let mut idx = LazyIndex::new();
                for (i, r) in (0_u32..).zip(rects.iter().copied()) {
                    idx.insert(i, r).unwrap();
                }
                idx
            },
            |mut idx| {
                for (i, r) in (0_u32..).zip(rects.iter()) {
                    idx.move_item(i, r.translate(1.5, -1.5)).unwrap();
                }
                black_box(idx.len());
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("rstar", |b| {
        b.iter_batched(
            || {
                let tagged: Vec<_> = (0_u32..)
                    .zip(rects.iter())
                    .map(|(i, r)| to_rstar_rect(r, i))
                    .collect();
                RTree::bulk_load(tagged)
            },
            |mut tree| {
                for (i, r) in (0_u32..).zip(rects.iter()) {
                    let _ = tree.remove(&to_rstar_rect(r, i));
                    tree.insert(to_rstar_rect(&r.translate(1.5, -1.5), i));
                }
                black_box(tree.size());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_build_query, bench_move_all);
criterion_main!(benches);
