// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lazy_index::{Aabb2D, LazyIndex};

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

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, max_w: f64, max_h: f64, rect_w: f64, rect_h: f64) -> Vec<Aabb2D> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (max_w - rect_w).max(1.0);
        let y0 = rng.next_f64() * (max_h - rect_h).max(1.0);
        out.push(Aabb2D::from_xywh(x0, y0, rect_w, rect_h));
    }
    out
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Aabb2D> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Aabb2D::from_xywh(cx + dx, cy + dy, 12.0, 12.0));
        }
    }
    out
}

fn build(rects: &[Aabb2D]) -> LazyIndex<u32> {
    let mut idx = LazyIndex::new();
    for (i, r) in (0_u32..).zip(rects.iter().copied()) {
        idx.insert(i, r).unwrap();
    }
    idx
}

fn bench_build_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_query");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_n{}", n), |b| {
            b.iter(|| {
                let idx = build(&rects);
                let hits: usize = idx
                    .query_rect(Aabb2D::from_xywh(100.0, 100.0, 400.0, 400.0))
                    .count();
                black_box(hits);
            })
        });
    }
    let rects = gen_random_rects(4096, 2000.0, 2000.0, 12.0, 12.0);
    group.bench_function("random_4096", |b| {
        b.iter(|| {
            let idx = build(&rects);
            let hits: usize = idx
                .query_rect(Aabb2D::from_xywh(800.0, 800.0, 400.0, 400.0))
                .count();
            black_box(hits);
        })
    });
    let rects = gen_clustered_rects(16, 256, 128.0);
    group.bench_function("clustered_4096", |b| {
        b.iter(|| {
            let idx = build(&rects);
            let hits: usize = idx
                .query_rect(Aabb2D::from_xywh(800.0, 800.0, 400.0, 400.0))
                .count();
            black_box(hits);
        })
    });
    group.finish();
}

// One frame of agent updates: every item moves by a small delta.
fn bench_move_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_heavy");
    let rects = gen_random_rects(4096, 2000.0, 2000.0, 4.0, 4.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    group.bench_function("move_all_once", |b| {
        b.iter_batched(
            || build(&rects),
            |mut idx| {
                for (j, r) in (0_u32..).zip(rects.iter()) {
                    let dx = f64::from(j % 5) - 2.0;
                    let dy = f64::from((j * 7) % 5) - 2.0;
                    idx.move_item(j, r.translate(dx, dy)).unwrap();
                }
                black_box(idx.len());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_query_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_heavy");
    let idx = build(&gen_grid_rects(128, 8.0));
    group.bench_function("many_viewports", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 64) as f64 * 8.0;
                let y = (q / 64) as f64 * 8.0;
                total += idx
                    .query(Aabb2D::from_xywh(x, y, 64.0, 64.0), true, |_| {}, None)
                    .matches;
            }
            black_box(total);
        })
    });
    group.bench_function("point_picks", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for q in 0..256 {
                let x = (q % 64) as f64 * 8.0 + 3.0;
                let y = (q / 64) as f64 * 8.0 + 3.0;
                total += idx.query_point(x, y).count();
            }
            black_box(total);
        })
    });
    group.finish();
}

// A single map-spanning item widens every window; compare with and without it.
fn bench_outlier(c: &mut Criterion) {
    let mut group = c.benchmark_group("outlier");
    let rects = gen_random_rects(4096, 2000.0, 2000.0, 6.0, 6.0);
    let uniform = build(&rects);
    let mut skewed = build(&rects);
    skewed.insert(u32::MAX, Aabb2D::from_xywh(0.0, 1000.0, 2000.0, 3.0)).unwrap();
    let view = Aabb2D::from_xywh(900.0, 900.0, 50.0, 50.0);
    group.bench_function("uniform", |b| {
        b.iter(|| black_box(uniform.query(view, true, |_| {}, None)))
    });
    group.bench_function("with_long_item", |b| {
        b.iter(|| black_box(skewed.query(view, true, |_| {}, None)))
    });
    group.bench_function("health_4096", |b| {
        b.iter(|| black_box(skewed.estimate_health()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_query,
    bench_move_heavy,
    bench_query_heavy,
    bench_outlier,
);
criterion_main!(benches);
