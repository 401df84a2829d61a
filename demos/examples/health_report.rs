// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Health report.
//!
//! A single very long item widens every query window. This demo shows how the health
//! estimate reacts to it, and how stale maxima linger until `recompute_maxima` runs.
//!
//! Run:
//! - `RUST_LOG=info,lazy_index=debug cargo run -p lazy_index_demos --example health_report`

use lazy_index::{Aabb2D, IndexConfig, LazyIndex};
use tracing_subscriber::EnvFilter;

fn report(label: &str, idx: &LazyIndex<u32>) {
    let health = idx.estimate_health();
    let sample = Aabb2D::from_xywh(500.0, 500.0, 20.0, 20.0);
    let stats = idx.query(sample, true, |_| {}, None);
    tracing::info!(
        label,
        health_x = health.x,
        health_y = health.y,
        max_width = idx.max_width(),
        max_height = idx.max_height(),
        candidates = stats.candidates,
        matches = stats.matches,
        "health report"
    );
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = IndexConfig::new().with_search_expansion(0.01);
    let mut idx = LazyIndex::with_config(config);
    for i in 0..400_u32 {
        let x = f64::from(i % 20) * 50.0;
        let y = f64::from(i / 20) * 50.0;
        idx.insert(i, Aabb2D::from_xywh(x, y, 10.0, 10.0)).expect("grid cells are valid");
    }
    report("uniform", &idx);

    let road = Aabb2D::from_xywh(0.0, 505.0, 1000.0, 4.0);
    idx.insert(9_999, road).expect("road is valid");
    report("with road", &idx);

    idx.remove(9_999, Some(road)).expect("road is indexed");
    report("road removed", &idx);

    idx.recompute_maxima();
    report("recomputed", &idx);
}
