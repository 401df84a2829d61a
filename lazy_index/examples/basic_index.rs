// Copyright 2025 the Lazy Index Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Lazy Index: insert, move, remove, query, and check health.

use lazy_index::{Aabb2D, LazyIndex};

fn main() {
    let mut idx: LazyIndex<u32> = LazyIndex::new();
    idx.insert(1, Aabb2D::from_xywh(0.0, 0.0, 10.0, 10.0)).expect("valid box");
    idx.insert(2, Aabb2D::from_xywh(5.0, 5.0, 10.0, 10.0)).expect("valid box");

    // Move box 1
    let old = idx
        .move_item(1, Aabb2D::from_xywh(20.0, 0.0, 10.0, 10.0))
        .expect("item 1 is indexed");
    println!("moved 1 from {old:?}");

    // Query a point
    let hits: Vec<_> = idx.query_point(6.0, 6.0).collect();
    println!("hits at (6,6): {hits:?}");

    idx.remove(2, None).expect("item 2 is indexed");
    println!("bounds: {:?}", idx.bounds());
    println!("health: {:?}", idx.estimate_health());
}
